//! Frontend Models
//!
//! Data structures matching the review backend's JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reviewable document (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Backlog counters (matches backend `/api/stats`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub raw_total: u64,
    pub raw_undecided: u64,
    pub raw_yes: u64,
    pub raw_no: u64,
    pub rmx_total: u64,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RAW total {} / undecided {} / YES {} / NO {} / RMX {}",
            self.raw_total, self.raw_undecided, self.raw_yes, self.raw_no, self.rmx_total
        )
    }
}

/// Operator verdict for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Yes,
    No,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Yes => "yes",
            Decision::No => "no",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/decide`
#[derive(Debug, Clone, Serialize)]
pub struct DecideRequest<'a> {
    pub id: &'a str,
    pub decision: Decision,
}

/// Acknowledgement returned by `POST /api/decide`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DecideAck {
    pub ok: bool,
    pub decision: Option<Decision>,
    pub message: Option<String>,
}
