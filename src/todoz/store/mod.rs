//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the todo list lives so the
//! command layer never knows about files:
//!
//! - [`fs::FileStore`]: production storage — the whole list as one JSON
//!   array in `todos.json` under the app data directory. The file name
//!   is the fixed "key"; the array is the value, in canonical
//!   most-recent-first order.
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated
//!   tests. No persistence.
//!
//! Every mutation rewrites the entire array. There is no incremental
//! persistence and no transactional guarantee; a crash between mutation
//! and save loses that one mutation only.

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

/// Abstract interface for todo-list storage.
pub trait DataStore {
    /// Load the full sequence in canonical order. Implementations must
    /// treat absent storage as an empty list.
    fn load(&self) -> Result<Vec<Todo>>;

    /// Replace the stored sequence with `todos`, overwriting any prior
    /// value.
    fn save(&mut self, todos: &[Todo]) -> Result<()>;
}
