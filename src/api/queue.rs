//! Queue Endpoint
//!
//! `GET /api/queue?limit=<n>`

use std::num::NonZeroU32;

use super::{decode, endpoint, network_error, read_body, HttpReviewApi};
use crate::error::ApiResult;
use crate::models::Item;

pub fn queue_url(base: &str, limit: NonZeroU32) -> String {
    format!("{}?limit={}", endpoint(base, "/api/queue"), limit)
}

impl HttpReviewApi {
    pub(super) async fn get_queue(&self, limit: NonZeroU32) -> ApiResult<Vec<Item>> {
        let url = queue_url(&self.base, limit);
        log::debug!("[API] GET {}", url);
        let response = self.client.get(&url).send().await.map_err(network_error)?;
        let body = read_body(response).await?;
        decode(&body)
    }
}
