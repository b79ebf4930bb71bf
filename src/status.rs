//! Inline status line: the single channel validation errors, progress
//! notes, and failures report through. Never fatal; every status leaves
//! the session re-submittable.

use serde::Serialize;

/// Visual weight of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    /// Neutral progress text, or nothing.
    Muted,
    Ok,
    Warn,
    Danger,
}

/// A status message with its level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusLine {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusLine {
    /// Empty, muted line — the initial and post-success state.
    pub fn clear() -> Self {
        Self {
            text: String::new(),
            level: StatusLevel::Muted,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Muted,
        }
    }

    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Ok,
        }
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Warn,
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Danger,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::clear()
    }
}
