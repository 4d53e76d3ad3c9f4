//! Notices
//!
//! On-page notification channel. Failures land here instead of a
//! blocking alert.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Info,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Error => "notice notice-error",
            NoticeLevel::Info => "notice notice-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    next_id: u64,
    entries: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Notice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_arrival_order() {
        let mut notices = Notices::default();
        let first = notices.push(NoticeLevel::Error, "Load failed: offline");
        let second = notices.push(NoticeLevel::Info, "already decided: yes");

        assert_ne!(first, second);
        let messages: Vec<&str> = notices.entries().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["Load failed: offline", "already decided: yes"]);
    }

    #[test]
    fn test_dismiss_removes_exactly_one() {
        let mut notices = Notices::default();
        let a = notices.push(NoticeLevel::Error, "a");
        let b = notices.push(NoticeLevel::Error, "b");

        assert!(notices.dismiss(a));
        assert!(!notices.dismiss(a));
        assert_eq!(notices.entries().len(), 1);
        assert_eq!(notices.entries()[0].id, b);

        notices.dismiss(b);
        assert!(notices.entries().is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let mut notices = Notices::default();
        let a = notices.push(NoticeLevel::Info, "a");
        notices.dismiss(a);
        let b = notices.push(NoticeLevel::Info, "b");
        assert!(b > a);
    }
}
