//! Review Queue App
//!
//! Header with refresh, toolbar, notices and the card grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{NoticeBanner, ReviewCard, Toolbar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_remove_item, LoadOutcome, QueueState, QueueStateStoreFields, DEFAULT_LIMIT};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("[APP] review backend at {}", config.api_base);

    let ctx = AppContext::new(config);
    provide_context(ctx);
    let store = Store::new(QueueState::default());
    provide_context(store);

    let (limit, set_limit) = signal(DEFAULT_LIMIT);

    // Fetch queue + stats; only the newest load may commit
    let load = move || {
        let ticket = store.write().begin_load(limit.get_untracked());
        spawn_local(async move {
            let api = ctx.api();
            let result = actions::fetch_snapshot(&api, ticket.limit()).await;
            let outcome = store.write().finish_load(ticket, result);
            if let LoadOutcome::Failed(err) = outcome {
                ctx.notify_error(actions::load_failed_message(&err));
            }
        });
    };

    // Load on mount and whenever the batch size changes
    Effect::new(move |_| {
        limit.track();
        load();
    });

    let on_done = Callback::new(move |id: String| store_remove_item(&store, &id));

    view! {
        <div class="container">
            <div class="header">
                <h2>"Review Queue"</h2>
                <button
                    class="btn"
                    disabled=move || store.loading().get()
                    on:click=move |_| load()
                >
                    {move || if store.loading().get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <NoticeBanner />

            <Toolbar limit=limit set_limit=set_limit />

            <Show
                when=move || !store.items().read().is_empty()
                fallback=|| view! { <div class="card empty">"No pending items."</div> }
            >
                <div class="grid">
                    <For
                        each=move || store.items().get()
                        key=|item| item.id.clone()
                        children=move |item| view! { <ReviewCard item=item on_done=on_done /> }
                    />
                </div>
            </Show>
        </div>
    }
}
