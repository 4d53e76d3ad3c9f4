//! Scripted in-memory `ReviewApi` for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::num::NonZeroU32;

use async_trait::async_trait;

use super::ReviewApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{DecideAck, Decision, Item, Stats};

#[derive(Default)]
pub struct FakeApi {
    queue: RefCell<VecDeque<ApiResult<Vec<Item>>>>,
    stats: RefCell<VecDeque<ApiResult<Stats>>>,
    decisions: RefCell<VecDeque<ApiResult<DecideAck>>>,
    /// `limit` of every fetch_queue call
    pub queue_limits: RefCell<Vec<u32>>,
    /// Every decide call, in order
    pub decided: RefCell<Vec<(String, Decision)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(self, result: ApiResult<Vec<Item>>) -> Self {
        self.queue.borrow_mut().push_back(result);
        self
    }

    pub fn stats(self, result: ApiResult<Stats>) -> Self {
        self.stats.borrow_mut().push_back(result);
        self
    }

    pub fn decision(self, result: ApiResult<DecideAck>) -> Self {
        self.decisions.borrow_mut().push_back(result);
        self
    }
}

fn unscripted(call: &str) -> ApiError {
    ApiError::Network(format!("no scripted response for {}", call))
}

#[async_trait(?Send)]
impl ReviewApi for FakeApi {
    async fn fetch_queue(&self, limit: NonZeroU32) -> ApiResult<Vec<Item>> {
        self.queue_limits.borrow_mut().push(limit.get());
        self.queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("fetch_queue")))
    }

    async fn decide(&self, id: &str, decision: Decision) -> ApiResult<DecideAck> {
        self.decided.borrow_mut().push((id.to_string(), decision));
        self.decisions
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("decide")))
    }

    async fn fetch_stats(&self) -> ApiResult<Stats> {
        self.stats
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("fetch_stats")))
    }
}
