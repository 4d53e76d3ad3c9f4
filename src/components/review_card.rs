//! Review Card Component
//!
//! One queue item with yes/no controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, CardDecision, DecisionSlot};
use crate::card::{CardText, PendingDecision};
use crate::context::use_app_context;
use crate::markdown::{parse_markdown, parse_markdown_inline};
use crate::models::{Decision, Item};

impl DecisionSlot for RwSignal<PendingDecision> {
    fn begin(&self, choice: Decision) -> bool {
        self.try_update(|p| p.begin(choice)).unwrap_or(false)
    }

    fn clear(&self) {
        self.try_update(|p| p.clear());
    }
}

/// Review card
///
/// # Arguments
/// * `item` - The document to review
/// * `on_done` - Called with the item id once the backend accepted a decision
#[component]
pub fn ReviewCard(item: Item, #[prop(into)] on_done: Callback<String>) -> impl IntoView {
    let ctx = use_app_context();
    let text = CardText::resolve(&item);
    let has_toggle = text.answer_needs_toggle();

    let pending = RwSignal::new(PendingDecision::default());
    let (expanded, set_expanded) = signal(false);

    let question_html = parse_markdown_inline(&text.question);
    let answer_html = parse_markdown(&text.answer);

    let id = item.id;
    let submit = move |choice: Decision| {
        if pending.get_untracked().is_pending() {
            return;
        }
        let id = id.clone();
        spawn_local(async move {
            let api = ctx.api();
            match actions::run_card_decision(&api, &pending, &id, choice).await {
                CardDecision::Accepted(ack) => {
                    if let Some(message) = ack.message {
                        ctx.notify_info(message);
                    }
                    on_done.run(id);
                }
                CardDecision::Failed(message) => ctx.notify_error(message),
                CardDecision::Busy => {}
            }
        });
    };
    let submit_yes = submit.clone();
    let submit_no = submit;

    view! {
        <div class="card">
            <h3 class="card-question" inner_html=question_html></h3>
            <div class="card-meta">
                "source_id: " {text.source}
                {text.created_at.map(|created| view! {
                    <span class="card-created">" · " {created}</span>
                })}
            </div>

            <div
                class="card-answer markdown-body"
                class:collapsed=move || has_toggle && !expanded.get()
                inner_html=answer_html
            ></div>

            <Show when=move || has_toggle>
                <button
                    class="btn link"
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() { "Show less" } else { "Show more" }}
                </button>
            </Show>

            <div class="actions">
                <button
                    class="btn yes"
                    disabled=move || pending.get().is_pending()
                    on:click=move |_| submit_yes(Decision::Yes)
                >
                    {move || pending.get().button_label(Decision::Yes)}
                </button>
                <button
                    class="btn no"
                    disabled=move || pending.get().is_pending()
                    on:click=move |_| submit_no(Decision::No)
                >
                    {move || pending.get().button_label(Decision::No)}
                </button>
            </div>
        </div>
    }
}
