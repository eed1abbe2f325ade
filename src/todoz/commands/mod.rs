use crate::model::Todo;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// What a command did and what the caller should show. Invalid inputs
/// (blank text, unknown ids) come back as an untouched default: no
/// affected todos, no messages.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Todo>,
    pub listed: Vec<Todo>,
    pub stats: Option<list::Stats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, todos: Vec<Todo>) -> Self {
        self.listed = todos;
        self
    }

    pub fn with_stats(mut self, stats: list::Stats) -> Self {
        self.stats = Some(stats);
        self
    }
}
