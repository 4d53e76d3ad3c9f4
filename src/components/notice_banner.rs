//! Notice Banner Component
//!
//! Renders the notification channel with per-notice dismiss buttons.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notice-region" role="status" aria-live="polite">
            <For
                each=move || ctx.notices.get().entries().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.level.css_class()>
                            <span class="notice-message">{notice.message}</span>
                            <button
                                class="notice-dismiss"
                                on:click=move |_| ctx.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
