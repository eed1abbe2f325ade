use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use todoz::api::{CmdMessage, MessageLevel, TodoApi};
use todoz::config::TodozConfig;
use todoz::error::{Result, TodozError};
use todoz::model::Filter;
use todoz::render::{render_stats, render_todos};
use todoz::session::{EditOutcome, EditSession};
use todoz::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TodoApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let filter = Filter::from_str(&cli.filter)?;
    let mut ctx = init_context()?;
    ctx.api.set_filter(filter);

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&mut ctx, text.join(" ")),
        Some(Commands::Toggle { id }) => handle_toggle(&mut ctx, id),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Edit { id, text }) => handle_edit(&mut ctx, id, text),
        Some(Commands::Config { key, value }) => handle_config(key, value),
        Some(Commands::List) | None => render_list(&ctx),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TODOZ_DATA") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "todoz", "todoz")
        .ok_or_else(|| TodozError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    let config = TodozConfig::load(&dir).unwrap_or_default();
    let store = FileStore::new(dir).with_data_file(config.data_file());
    Ok(AppContext {
        api: TodoApi::new(store),
    })
}

fn handle_add(ctx: &mut AppContext, text: String) -> Result<()> {
    let result = ctx.api.add(&text)?;
    print_messages(&result.messages);
    render_list(ctx)
}

fn handle_toggle(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.toggle(id)?;
    print_messages(&result.messages);
    render_list(ctx)
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.delete(id)?;
    print_messages(&result.messages);
    render_list(ctx)
}

fn handle_edit(ctx: &mut AppContext, id: u64, text: Vec<String>) -> Result<()> {
    let new_text = if text.is_empty() {
        let Some(todo) = ctx.api.todo(id)? else {
            // Unknown id: nothing to edit, just re-render.
            return render_list(ctx);
        };
        let session = EditSession::begin(&todo);
        match prompt_edit(&session)? {
            EditOutcome::Commit(t) => t,
            EditOutcome::Discard => return render_list(ctx),
        }
    } else {
        text.join(" ")
    };

    let result = ctx.api.edit(id, &new_text)?;
    print_messages(&result.messages);
    render_list(ctx)
}

fn prompt_edit(session: &EditSession) -> Result<EditOutcome> {
    print!("Edit ({}) [{}]: ", session.id(), session.original());
    io::stdout().flush().map_err(TodozError::Io)?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        // EOF counts as a cancel.
        Ok(0) => Ok(session.cancel()),
        Ok(_) => Ok(session.finish(&input)),
        Err(e) => Err(TodozError::Io(e)),
    }
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = data_dir()?;
    let mut config = TodozConfig::load(&dir).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => {
            println!("data-file = {}", config.data_file());
        }
        (Some("data-file"), Some(v)) => {
            config.set_data_file(&v);
            config.save(&dir)?;
            println!("data-file = {}", config.data_file());
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn render_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.render()?;
    println!("{}", render_todos(&result.listed, ctx.api.filter()));
    if let Some(stats) = &result.stats {
        println!("{}", render_stats(stats).dimmed());
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}
