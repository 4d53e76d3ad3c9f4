//! Decision Endpoint
//!
//! `POST /api/decide` with `{ id, decision }`.

use super::{decode, network_error, read_body, HttpReviewApi};
use crate::error::ApiResult;
use crate::models::{DecideAck, DecideRequest, Decision};

impl HttpReviewApi {
    pub(super) async fn post_decision(&self, id: &str, decision: Decision) -> ApiResult<DecideAck> {
        let url = self.url("/api/decide");
        log::debug!("[API] POST {} id={} decision={}", url, id, decision);
        let response = self
            .client
            .post(&url)
            .json(&DecideRequest { id, decision })
            .send()
            .await
            .map_err(network_error)?;
        let body = read_body(response).await?;
        let ack: DecideAck = decode(&body)?;
        if let Some(message) = &ack.message {
            log::info!("[API] decide {}: {}", id, message);
        }
        Ok(ack)
    }
}
