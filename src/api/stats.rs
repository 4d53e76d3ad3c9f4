//! Stats Endpoint
//!
//! `GET /api/stats`

use super::{decode, network_error, read_body, HttpReviewApi};
use crate::error::ApiResult;
use crate::models::Stats;

impl HttpReviewApi {
    pub(super) async fn get_stats(&self) -> ApiResult<Stats> {
        let url = self.url("/api/stats");
        log::debug!("[API] GET {}", url);
        let response = self.client.get(&url).send().await.map_err(network_error)?;
        let body = read_body(response).await?;
        decode(&body)
    }
}
