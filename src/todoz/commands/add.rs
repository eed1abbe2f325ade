use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{next_id, Todo};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        // Blank input is absorbed without touching the list.
        return Ok(CmdResult::default());
    }

    let mut todos = store.load()?;
    let todo = Todo::new(next_id(&todos), text.to_string());
    todos.insert(0, todo.clone());
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added ({}): {}",
        todo.id, todo.text
    )));
    result.affected.push(todo);
    Ok(result)
}
