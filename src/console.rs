//! Line-based console front end for the demo binary / 控制台交互

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::models::{Category, Record};
use crate::search::{highlight, SearchOutcome};

/// One console input line / 控制台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text becomes the new query / 普通文本即查询
    Query(String),
    Tab(Category),
    Toggle(Category),
    Clear,
    Quit,
}

/// Parse a console line / 解析命令
///
/// Lines starting with `:` are commands; anything else is a query, kept verbatim.
pub fn parse_command(line: &str) -> Result<Command> {
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Query(line.to_string()));
    };

    let mut parts = rest.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let arg = parts.next().map(str::trim).unwrap_or("");

    match name {
        "tab" => Ok(Command::Tab(arg.parse()?)),
        "toggle" => Ok(Command::Toggle(arg.parse()?)),
        "clear" => Ok(Command::Clear),
        "quit" | "q" => Ok(Command::Quit),
        other => Err(Error::invalid_argument(format!("unknown command: :{}", other))),
    }
}

fn render_name(record: &Record, query: &str) -> String {
    highlight(&record.name, query)
        .into_iter()
        .map(|span| {
            if span.is_match {
                format!("[{}]", span.text)
            } else {
                span.text.to_string()
            }
        })
        .collect()
}

/// Render tabs and results as plain text / 渲染结果
pub fn render_view(outcome: &SearchOutcome, query: &str, selected: Category) -> String {
    let mut out = String::new();

    let tabs: Vec<String> = outcome
        .tabs
        .iter()
        .map(|tab| {
            let count = outcome.count(*tab).unwrap_or(0);
            if *tab == selected {
                format!("*{} ({})*", tab, count)
            } else {
                format!("{} ({})", tab, count)
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join(" | "));

    if query.is_empty() {
        return out;
    }
    if outcome.filtered.is_empty() {
        let _ = writeln!(out, "  No results found");
        return out;
    }

    for record in &outcome.filtered {
        let _ = writeln!(
            out,
            "  #{:<3} {:<6} {} - {}{}",
            record.id,
            record.kind.as_str(),
            render_name(record, query),
            record.status,
            if record.is_active() { " ●" } else { "" }
        );
    }
    out
}
