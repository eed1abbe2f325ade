use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let affected = match todos.iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            todo.completed = !todo.completed;
            todo.clone()
        }
        // Unknown id: no-op, no error.
        None => return Ok(CmdResult::default()),
    };
    store.save(&todos)?;

    let mut result = CmdResult::default();
    let message = if affected.completed {
        CmdMessage::success(format!("Done ({}): {}", id, affected.text))
    } else {
        CmdMessage::info(format!("Reopened ({}): {}", id, affected.text))
    };
    result.add_message(message);
    result.affected.push(affected);
    Ok(result)
}
