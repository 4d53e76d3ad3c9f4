//! Queue Toolbar Component
//!
//! Batch size selector and backlog stats line.

use std::num::NonZeroU32;

use leptos::prelude::*;

use crate::store::{use_queue_store, QueueStateStoreFields, LIMIT_OPTIONS};

#[component]
pub fn Toolbar(
    limit: ReadSignal<NonZeroU32>,
    set_limit: WriteSignal<NonZeroU32>,
) -> impl IntoView {
    let store = use_queue_store();

    let on_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<u32>().ok().and_then(NonZeroU32::new) {
            Some(next) => set_limit.set(next),
            None => log::warn!("[TOOLBAR] ignoring batch size {:?}", event_target_value(&ev)),
        }
    };

    view! {
        <div class="toolbar">
            <label for="batch-size">"Batch size"</label>
            <select
                id="batch-size"
                prop:value=move || limit.get().to_string()
                on:change=on_change
            >
                {LIMIT_OPTIONS.iter().map(|n| {
                    let n = *n;
                    view! {
                        <option value=n.to_string() selected=move || limit.get().get() == n>
                            {n}
                        </option>
                    }
                }).collect_view()}
            </select>

            {move || store.stats().get().map(|stats| view! {
                <div class="stat">{stats.to_string()}</div>
            })}
        </div>
    }
}
