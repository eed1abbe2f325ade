//! Per-row edit session: `Viewing → Editing → Viewing`.
//!
//! Entering an edit captures the row's original text. Leaving it either
//! commits (the trimmed input is non-empty and actually changed) or
//! discards (blank input, unchanged text, or an explicit cancel). The
//! session itself never mutates the store; the caller applies a
//! [`EditOutcome::Commit`] through the edit command.

use crate::model::Todo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    id: u64,
    original: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Apply this text through `edit(id, text)`.
    Commit(String),
    /// Restore the original text; no store mutation.
    Discard,
}

impl EditSession {
    pub fn begin(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            original: todo.text.clone(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Resolve a confirmation (enter, blur) with the text typed so far.
    pub fn finish(&self, input: &str) -> EditOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == self.original {
            EditOutcome::Discard
        } else {
            EditOutcome::Commit(trimmed.to_string())
        }
    }

    /// An explicit cancel discards whatever was typed.
    pub fn cancel(&self) -> EditOutcome {
        EditOutcome::Discard
    }
}
