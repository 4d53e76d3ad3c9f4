//! Review Card Logic
//!
//! Text resolution and per-card decision state, kept free of reactive
//! types so the rules can be tested on the host.

use crate::models::{Decision, Item};

/// Answers longer than this (in characters) get a show more/less toggle
pub const ANSWER_PREVIEW_CHARS: usize = 300;

pub const NO_QUESTION: &str = "(no question)";
pub const NO_ANSWER: &str = "(no answer)";
pub const NO_SOURCE: &str = "-";

/// Display text for one card, after field fallback.
///
/// Precedence:
/// - question: `prompt`, `question`, `title`, then [`NO_QUESTION`]
/// - answer: `content`, then [`NO_ANSWER`]
/// - source: `source_id`, then [`NO_SOURCE`]
///
/// Blank values count as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub question: String,
    pub answer: String,
    pub source: String,
    pub created_at: Option<String>,
}

impl CardText {
    pub fn resolve(item: &Item) -> Self {
        let question = present(&item.prompt)
            .or_else(|| present(&item.question))
            .or_else(|| present(&item.title))
            .unwrap_or(NO_QUESTION);
        let answer = present(&item.content).unwrap_or(NO_ANSWER);
        let source = present(&item.source_id).unwrap_or(NO_SOURCE);

        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            source: source.to_string(),
            created_at: present(&item.created_at).map(str::to_string),
        }
    }

    pub fn answer_needs_toggle(&self) -> bool {
        exceeds_preview(&self.answer)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

pub fn exceeds_preview(text: &str) -> bool {
    text.chars().count() > ANSWER_PREVIEW_CHARS
}

/// In-flight decision for one card; at most one at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingDecision(Option<Decision>);

impl PendingDecision {
    /// Mark `choice` as in flight. Returns false if one is already pending.
    pub fn begin(&mut self, choice: Decision) -> bool {
        if self.0.is_some() {
            return false;
        }
        self.0 = Some(choice);
        true
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    pub fn button_label(&self, button: Decision) -> &'static str {
        match (button, self.0 == Some(button)) {
            (Decision::Yes, true) => "Saving...",
            (Decision::Yes, false) => "Yes → accept",
            (Decision::No, true) => "Processing...",
            (Decision::No, false) => "No → reject",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item::new("65f0c1a2")
    }

    #[test]
    fn test_prompt_wins_over_question_and_title() {
        let mut it = item();
        it.prompt = Some("What is the refund window?".to_string());
        it.question = Some("Refund window?".to_string());
        it.title = Some("Refunds".to_string());

        assert_eq!(CardText::resolve(&it).question, "What is the refund window?");
    }

    #[test]
    fn test_question_then_title_fallback() {
        let mut it = item();
        it.question = Some("Refund window?".to_string());
        it.title = Some("Refunds".to_string());
        assert_eq!(CardText::resolve(&it).question, "Refund window?");

        it.question = None;
        assert_eq!(CardText::resolve(&it).question, "Refunds");
    }

    #[test]
    fn test_blank_fields_fall_through() {
        let mut it = item();
        it.prompt = Some("   ".to_string());
        it.question = Some(String::new());
        it.title = Some("Legacy title".to_string());
        it.content = Some("\n\t".to_string());

        let text = CardText::resolve(&it);
        assert_eq!(text.question, "Legacy title");
        assert_eq!(text.answer, NO_ANSWER);
    }

    #[test]
    fn test_missing_everything_uses_placeholders() {
        let text = CardText::resolve(&item());
        assert_eq!(text.question, NO_QUESTION);
        assert_eq!(text.answer, NO_ANSWER);
        assert_eq!(text.source, NO_SOURCE);
        assert!(text.created_at.is_none());
        assert!(!text.answer_needs_toggle());
    }

    #[test]
    fn test_content_and_metadata() {
        let mut it = item();
        it.content = Some("Within 14 days.".to_string());
        it.source_id = Some("1042".to_string());
        it.created_at = Some("2024-03-01 09:30".to_string());

        let text = CardText::resolve(&it);
        assert_eq!(text.answer, "Within 14 days.");
        assert_eq!(text.source, "1042");
        assert_eq!(text.created_at.as_deref(), Some("2024-03-01 09:30"));
    }

    #[test]
    fn test_toggle_boundary() {
        let mut it = item();
        it.content = Some("a".repeat(300));
        assert!(!CardText::resolve(&it).answer_needs_toggle());

        it.content = Some("a".repeat(301));
        assert!(CardText::resolve(&it).answer_needs_toggle());
    }

    #[test]
    fn test_toggle_counts_characters_not_bytes() {
        // 300 Hangul syllables are 900 bytes
        assert!(!exceeds_preview(&"가".repeat(300)));
        assert!(exceeds_preview(&"가".repeat(301)));
    }

    #[test]
    fn test_pending_allows_one_decision_at_a_time() {
        let mut pending = PendingDecision::default();
        assert!(!pending.is_pending());

        assert!(pending.begin(Decision::Yes));
        assert!(!pending.begin(Decision::No));
        assert_eq!(pending.button_label(Decision::Yes), "Saving...");

        pending.clear();
        assert!(pending.begin(Decision::No));
    }

    #[test]
    fn test_button_labels() {
        let mut pending = PendingDecision::default();
        assert_eq!(pending.button_label(Decision::Yes), "Yes → accept");
        assert_eq!(pending.button_label(Decision::No), "No → reject");

        pending.begin(Decision::No);
        assert_eq!(pending.button_label(Decision::Yes), "Yes → accept");
        assert_eq!(pending.button_label(Decision::No), "Processing...");

        pending.clear();
        pending.begin(Decision::Yes);
        assert_eq!(pending.button_label(Decision::Yes), "Saving...");
    }
}
