use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: u64, new_text: &str) -> Result<CmdResult> {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        // Blank input is absorbed without touching the list.
        return Ok(CmdResult::default());
    }

    let mut todos = store.load()?;
    let affected = match todos.iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            todo.text = new_text.to_string();
            todo.clone()
        }
        // Unknown id: no-op, no error.
        None => return Ok(CmdResult::default()),
    };
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated ({}): {}",
        id, affected.text
    )));
    result.affected.push(affected);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn replaces_the_text_with_the_trimmed_value() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "old").unwrap();

        run(&mut store, 1, "  new  ").unwrap();
        assert_eq!(store.load().unwrap()[0].text, "new");
    }

    #[test]
    fn blank_text_is_a_noop() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "old").unwrap();

        let result = run(&mut store, 1, "   ").unwrap();
        assert!(result.affected.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(store.load().unwrap()[0].text, "old");
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "old").unwrap();

        let result = run(&mut store, 99, "new").unwrap();
        assert!(result.affected.is_empty());
        assert_eq!(store.load().unwrap()[0].text, "old");
    }

    #[test]
    fn leaves_created_at_and_completed_untouched() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "old").unwrap();
        crate::commands::toggle::run(&mut store, 1).unwrap();
        let before = store.load().unwrap()[0].clone();

        run(&mut store, 1, "new").unwrap();
        let after = store.load().unwrap()[0].clone();
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.completed, before.completed);
    }
}
