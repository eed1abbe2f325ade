use crate::error::TodozError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One task record. `created_at` is set once at creation and never
/// touched again; edits only replace `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// The id for the next todo: one past the highest id in use, or 1 for
/// an empty list.
pub fn next_id(todos: &[Todo]) -> u64 {
    todos.iter().map(|t| t.id).max().map_or(1, |m| m + 1)
}

/// The subset criterion applied to the rendered view. Never applied to
/// persisted data or stats, and never persisted itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Active => write!(f, "active"),
            Filter::Completed => write!(f, "done"),
        }
    }
}

impl FromStr for Filter {
    type Err = TodozError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "done" | "completed" => Ok(Filter::Completed),
            other => Err(TodozError::Api(format!("Invalid filter: {}", other))),
        }
    }
}
