use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Filter, Todo};
use crate::store::DataStore;

/// Counts over the *unfiltered* sequence. The current filter never
/// changes these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Stats {
    pub fn over(todos: &[Todo]) -> Self {
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.completed).count();
        Self {
            total,
            active: total - completed,
            completed,
        }
    }
}

pub fn run<S: DataStore>(store: &S, filter: Filter) -> Result<CmdResult> {
    let todos = store.load()?;
    let stats = Stats::over(&todos);
    let listed: Vec<_> = todos.into_iter().filter(|t| filter.matches(t)).collect();
    Ok(CmdResult::default().with_listed(listed).with_stats(stats))
}
