use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todoz")]
#[command(about = "A tiny filtered todo list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter the rendered list (all, active, done)
    #[arg(short, long, global = true, default_value = "all")]
    pub filter: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo
    #[command(alias = "a")]
    Add {
        /// Text of the todo
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List todos
    #[command(alias = "ls")]
    List,

    /// Toggle a todo between done and active
    #[command(alias = "done")]
    Toggle {
        /// Id of the todo
        id: u64,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        /// Id of the todo
        id: u64,
    },

    /// Edit a todo's text
    #[command(alias = "e")]
    Edit {
        /// Id of the todo
        id: u64,

        /// New text (omit to edit interactively)
        #[arg(required = false, num_args = 0..)]
        text: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
