//! UI Components
//!
//! Leptos components for the review queue.

mod review_card;
mod toolbar;
mod notice_banner;

pub use review_card::ReviewCard;
pub use toolbar::Toolbar;
pub use notice_banner::NoticeBanner;
