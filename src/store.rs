//! Queue State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The transitions
//! are plain methods on `QueueState` so they run without a reactive owner.

use std::num::NonZeroU32;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{ApiError, ApiResult};
use crate::models::{Item, Stats};

/// Batch sizes offered in the toolbar
pub const LIMIT_OPTIONS: &[u32] = &[5, 10, 20, 50];

pub const DEFAULT_LIMIT: NonZeroU32 = match NonZeroU32::new(10) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// Review queue state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct QueueState {
    /// Current batch, in backend order
    pub items: Vec<Item>,
    /// Last committed stats (None until the first successful load)
    pub stats: Option<Stats>,
    /// A load is in flight
    pub loading: bool,
    /// Bumped on every load; only the latest may commit
    pub generation: u64,
}

/// Handle for one load, issued by [`QueueState::begin_load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    limit: NonZeroU32,
}

impl LoadTicket {
    pub fn limit(&self) -> NonZeroU32 {
        self.limit
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Items and stats replaced
    Committed,
    /// Latest load failed; nothing changed
    Failed(ApiError),
    /// A newer load was started; result dropped
    Superseded,
}

impl QueueState {
    pub fn begin_load(&mut self, limit: NonZeroU32) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket {
            generation: self.generation,
            limit,
        }
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the combined queue+stats result. All-or-nothing.
    ///
    /// A result for an older ticket is discarded. If it was a failure it is
    /// logged at warn but not surfaced, since the newer load reports its own
    /// outcome.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: ApiResult<(Vec<Item>, Stats)>,
    ) -> LoadOutcome {
        if !self.is_current(ticket) {
            match &result {
                Ok(_) => log::debug!(
                    "[QUEUE] dropping load #{} (limit {}), latest is #{}",
                    ticket.generation,
                    ticket.limit,
                    self.generation
                ),
                Err(err) => log::warn!(
                    "[QUEUE] superseded load #{} (limit {}) failed, latest is #{}: {}",
                    ticket.generation,
                    ticket.limit,
                    self.generation,
                    err
                ),
            }
            return LoadOutcome::Superseded;
        }

        self.loading = false;
        match result {
            Ok((items, stats)) => {
                log::info!("[QUEUE] loaded {} items (limit {})", items.len(), ticket.limit);
                self.items = items;
                self.stats = Some(stats);
                LoadOutcome::Committed
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    /// Drop a decided item. Returns whether it was present.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

/// Type alias for the store
pub type QueueStore = Store<QueueState>;

/// Get the queue store from context
pub fn use_queue_store() -> QueueStore {
    expect_context::<QueueStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Remove an item from the store by ID
pub fn store_remove_item(store: &QueueStore, item_id: &str) {
    if !store.write().remove_item(item_id) {
        log::debug!("[QUEUE] item {} already gone", item_id);
    }
}
