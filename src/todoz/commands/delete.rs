use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let Some(pos) = todos.iter().position(|t| t.id == id) else {
        // Unknown id: no-op, no error.
        return Ok(CmdResult::default());
    };
    let removed = todos.remove(pos);
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted ({}): {}",
        removed.id, removed.text
    )));
    result.affected.push(removed);
    Ok(result)
}
