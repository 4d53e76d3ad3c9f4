//! Application Configuration
//!
//! The backend base URL is fixed at build time (`REVIEW_API_BASE`) and
//! resolved once at startup.

/// Backend used when `REVIEW_API_BASE` is not set
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_base(option_env!("REVIEW_API_BASE"))
    }

    pub fn with_base(base: Option<&str>) -> Self {
        let api_base = base
            .map(|b| b.trim().trim_end_matches('/'))
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();
        Self { api_base }
    }

    pub fn log_level() -> log::LevelFilter {
        if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base(None)
    }
}
