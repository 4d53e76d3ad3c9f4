//! Queue Actions
//!
//! Async flows behind the view's user actions, generic over `ReviewApi`.

use std::num::NonZeroU32;

use crate::api::ReviewApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{DecideAck, Decision, Item, Stats};

/// Fetch queue and stats concurrently; the first failure wins.
pub async fn fetch_snapshot<A: ReviewApi + ?Sized>(
    api: &A,
    limit: NonZeroU32,
) -> ApiResult<(Vec<Item>, Stats)> {
    futures::try_join!(api.fetch_queue(limit), api.fetch_stats())
}

pub fn load_failed_message(err: &ApiError) -> String {
    format!("Load failed: {}", err)
}

pub fn decision_failed_message(err: &ApiError) -> String {
    format!("Decision failed: {}", err)
}

/// Send one verdict. `Err` carries the text to show the operator.
///
/// An acknowledgement with `ok == false` counts as a failure.
pub async fn submit_decision<A: ReviewApi + ?Sized>(
    api: &A,
    id: &str,
    choice: Decision,
) -> Result<DecideAck, String> {
    match api.decide(id, choice).await {
        Ok(ack) if ack.ok => {
            log::info!("[DECIDE] {} -> {}", id, choice);
            Ok(ack)
        }
        Ok(ack) => {
            let reason = ack.message.as_deref().unwrap_or("rejected by backend");
            log::warn!("[DECIDE] {} -> {} not accepted: {}", id, choice, reason);
            Err(format!("Decision failed: {}", reason))
        }
        Err(err) => {
            log::warn!("[DECIDE] {} -> {} failed (status {:?}): {}", id, choice, err.status(), err);
            Err(decision_failed_message(&err))
        }
    }
}

/// Where a card keeps its in-flight decision.
pub trait DecisionSlot {
    /// Mark `choice` as in flight. Returns false if one is already pending.
    fn begin(&self, choice: Decision) -> bool;
    fn clear(&self);
}

/// Result of one yes/no click on a card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardDecision {
    /// The backend accepted; the card should leave the queue.
    Accepted(DecideAck),
    /// Rejected or unreachable; the slot is free again.
    Failed(String),
    /// Another decision for this card is still in flight. Nothing was sent.
    Busy,
}

/// One card's decision flow: claim the slot, send, free the slot on failure.
///
/// On success the slot stays claimed so the buttons remain disabled until the
/// card is removed.
pub async fn run_card_decision<A, S>(api: &A, slot: &S, id: &str, choice: Decision) -> CardDecision
where
    A: ReviewApi + ?Sized,
    S: DecisionSlot + ?Sized,
{
    if !slot.begin(choice) {
        log::debug!("[DECIDE] {} busy, ignoring {}", id, choice);
        return CardDecision::Busy;
    }
    match submit_decision(api, id, choice).await {
        Ok(ack) => CardDecision::Accepted(ack),
        Err(message) => {
            slot.clear();
            CardDecision::Failed(message)
        }
    }
}
