//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpReviewApi;
use crate::config::AppConfig;
use crate::notice::{NoticeLevel, Notices};

/// Info notices clear themselves after this long
const INFO_NOTICE_MS: u32 = 4_000;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Notification channel rendered by `NoticeBanner`
    pub notices: RwSignal<Notices>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            notices: RwSignal::new(Notices::default()),
        }
    }

    /// HTTP client for the configured backend
    pub fn api(&self) -> HttpReviewApi {
        self.config.with_value(HttpReviewApi::new)
    }

    pub fn notify_error(&self, message: String) {
        log::warn!("[NOTICE] {}", message);
        self.notices.update(|n| {
            n.push(NoticeLevel::Error, message);
        });
    }

    pub fn notify_info(&self, message: String) {
        log::info!("[NOTICE] {}", message);
        let Some(id) = self.notices.try_update(|n| n.push(NoticeLevel::Info, message)) else {
            return;
        };
        let notices = self.notices;
        spawn_local(async move {
            TimeoutFuture::new(INFO_NOTICE_MS).await;
            notices.try_update(|n| n.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|n| {
            n.dismiss(id);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
