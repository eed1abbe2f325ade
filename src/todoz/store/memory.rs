use super::DataStore;
use crate::error::Result;
use crate::model::Todo;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    todos: Vec<Todo>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.todos = todos.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::next_id;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_todo(mut self, text: &str) -> Self {
            let mut todos = self.store.load().unwrap();
            todos.insert(0, Todo::new(next_id(&todos), text.to_string()));
            self.store.save(&todos).unwrap();
            self
        }

        pub fn with_completed_todo(mut self, text: &str) -> Self {
            let mut todos = self.store.load().unwrap();
            let mut todo = Todo::new(next_id(&todos), text.to_string());
            todo.completed = true;
            todos.insert(0, todo);
            self.store.save(&todos).unwrap();
            self
        }
    }
}
