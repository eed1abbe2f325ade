//! # API Facade
//!
//! [`TodoApi`] is a thin facade over the command layer and the single
//! entry point for every operation, whatever the UI. It owns the store
//! handle and the process-wide filter (which always starts at `all` and
//! is never persisted), dispatches to `commands/*.rs`, and returns
//! structured `Result<CmdResult>` values — no business logic, no I/O,
//! no presentation.
//!
//! Generic over [`DataStore`]: production uses `TodoApi<FileStore>`,
//! tests use `TodoApi<InMemoryStore>`.

use crate::commands;
use crate::error::Result;
use crate::model::{Filter, Todo};
use crate::store::DataStore;

pub struct TodoApi<S: DataStore> {
    store: S,
    filter: Filter,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            filter: Filter::default(),
        }
    }

    pub fn add(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, text)
    }

    pub fn toggle(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::toggle::run(&mut self.store, id)
    }

    pub fn delete(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn edit(&mut self, id: u64, new_text: &str) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, new_text)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The current filtered view plus stats over the unfiltered list.
    pub fn render(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, self.filter)
    }

    pub fn todo(&self, id: u64) -> Result<Option<Todo>> {
        Ok(self.store.load()?.into_iter().find(|t| t.id == id))
    }
}

pub use crate::commands::list::Stats;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
