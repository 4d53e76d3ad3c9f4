//! Review API Client
//!
//! Frontend bindings to the review backend, organized by endpoint.
//! `reqwest` runs on the browser `fetch()` API when compiled for wasm32.

mod queue;
mod decision;
mod stats;

#[cfg(test)]
pub mod fake;

use std::num::NonZeroU32;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{DecideAck, Decision, Item, Stats};

/// The three backend operations the queue view depends on.
///
/// Every call is exactly one round trip: no retry, cache or dedup.
#[async_trait(?Send)]
pub trait ReviewApi {
    /// Undecided items, in backend order
    async fn fetch_queue(&self, limit: NonZeroU32) -> ApiResult<Vec<Item>>;

    /// Record a verdict for one item
    async fn decide(&self, id: &str, decision: Decision) -> ApiResult<DecideAck>;

    /// Backlog counters
    async fn fetch_stats(&self) -> ApiResult<Stats>;
}

/// `ReviewApi` over HTTP
#[derive(Clone)]
pub struct HttpReviewApi {
    client: reqwest::Client,
    base: String,
}

impl HttpReviewApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: config.api_base.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base, path)
    }
}

#[async_trait(?Send)]
impl ReviewApi for HttpReviewApi {
    async fn fetch_queue(&self, limit: NonZeroU32) -> ApiResult<Vec<Item>> {
        self.get_queue(limit).await
    }

    async fn decide(&self, id: &str, decision: Decision) -> ApiResult<DecideAck> {
        self.post_decision(id, decision).await
    }

    async fn fetch_stats(&self) -> ApiResult<Stats> {
        self.get_stats().await
    }
}

// ========================
// Shared helpers
// ========================

/// Join base URL and path with exactly one `/`
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Read the body, then split success from failure by status
async fn read_body(response: reqwest::Response) -> ApiResult<String> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    classify(status, body)
}

/// Non-2xx becomes `ApiError::Status` carrying the body untouched
pub fn classify(status: u16, body: String) -> ApiResult<String> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        log::warn!("[API] request failed with status {}: {}", status, body);
        Err(ApiError::Status { status, body })
    }
}

pub fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn network_error(e: reqwest::Error) -> ApiError {
    log::warn!("[API] network error: {}", e);
    ApiError::Network(e.to_string())
}
