//! List rendering: rows, the stats line, and the empty-state line.
//!
//! These functions return plain strings so the view can be tested
//! without a terminal; `main.rs` just prints what comes back.

use crate::commands::list::Stats;
use crate::model::{Filter, Todo};
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;
const CHECK_DONE: &str = "[x]";
const CHECK_OPEN: &str = "[ ]";

/// Render the filtered rows, or the empty-state line when the view has
/// zero items.
pub fn render_todos(todos: &[Todo], filter: Filter) -> String {
    if todos.is_empty() {
        return empty_state(filter).to_string();
    }
    todos.iter().map(render_row).collect::<Vec<_>>().join("\n")
}

fn empty_state(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No todos yet.",
        Filter::Active => "No active todos.",
        Filter::Completed => "No completed todos.",
    }
}

fn render_row(todo: &Todo) -> String {
    let check = if todo.completed { CHECK_DONE } else { CHECK_OPEN };
    let idx_str = format!("{}. ", todo.id);

    // Width math happens on the uncolored strings; ANSI codes would
    // throw the columns off.
    let fixed_width = check.width() + 1 + idx_str.width() + 2 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let text_display = truncate_to_width(&todo.text, available);
    let padding = available.saturating_sub(text_display.width());
    let time_ago = format_time_ago(todo.created_at);

    let check_colored = if todo.completed {
        check.green()
    } else {
        check.normal()
    };
    let text_colored = if todo.completed {
        text_display.strikethrough().dimmed()
    } else {
        text_display.normal()
    };

    format!(
        "{} {}{}{}  {}",
        check_colored,
        idx_str,
        text_colored,
        " ".repeat(padding),
        time_ago.dimmed()
    )
}

pub fn render_stats(stats: &Stats) -> String {
    format!(
        "{} total · {} active · {} done",
        stats.total, stats.active, stats.completed
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list::Stats;
    use crate::model::Todo;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn renders_a_checkbox_id_and_text_per_row() {
        plain();
        let todo = Todo::new(1, "buy milk".into());
        let row = render_todos(&[todo], Filter::All);
        assert!(row.starts_with("[ ] 1. buy milk"));
        assert!(row.ends_with("now"));
    }

    #[test]
    fn marks_completed_rows() {
        plain();
        let mut todo = Todo::new(2, "done thing".into());
        todo.completed = true;
        let row = render_todos(&[todo], Filter::All);
        assert!(row.starts_with("[x] 2. done thing"));
    }

    #[test]
    fn renders_one_line_per_todo_in_order() {
        plain();
        let todos = vec![Todo::new(2, "b".into()), Todo::new(1, "a".into())];
        let out = render_todos(&todos, Filter::All);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[ ] 2. b"));
        assert!(lines[1].starts_with("[ ] 1. a"));
    }

    #[test]
    fn empty_state_follows_the_filter() {
        plain();
        assert_eq!(render_todos(&[], Filter::All), "No todos yet.");
        assert_eq!(render_todos(&[], Filter::Active), "No active todos.");
        assert_eq!(render_todos(&[], Filter::Completed), "No completed todos.");
    }

    #[test]
    fn long_text_is_truncated_with_an_ellipsis() {
        plain();
        let todo = Todo::new(1, "x".repeat(200));
        let row = render_todos(&[todo], Filter::All);
        assert!(row.contains('…'));
    }

    #[test]
    fn stats_line_reads_total_active_done() {
        let stats = Stats {
            total: 3,
            active: 2,
            completed: 1,
        };
        assert_eq!(render_stats(&stats), "3 total · 2 active · 1 done");
    }
}
