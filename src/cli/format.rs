//! Rendering of record sets into terminal lines
//!
//! Rows are rendered through small templates. Tokens in braces are
//! substituted per row; unknown tokens are left as they are.
//!
//! | Token | Source | Padding |
//! |-------|--------|---------|
//! | `{id}` | task or list id | left, [`ID_WIDTH`] |
//! | `{name}` | task or list name | none |
//! | `{listName}` | owning list of a task | left, [`LIST_NAME_WIDTH`] |
//! | `{doneDate}` | done timestamp as `D/M/YYYY` | none |
//! | `{totalTasks}` | task count of a list | none |
//!
//! Rows are printed in the order the store returned them.

use std::io::{self, Write};

use chrono::{DateTime, Datelike};

use super::output::{Output, Tone};
use crate::domain::{List, Record, ResourceKind, Task};

pub const DEFAULT_TEMPLATE: &str = "{id}  {name}";
pub const DONE_TEMPLATE: &str = "{id}  {name}  {listName}  {doneDate}";
pub const LIST_TEMPLATE: &str = "{name} ({totalTasks})";

pub const ID_WIDTH: usize = 4;
pub const LIST_NAME_WIDTH: usize = 12;

const STAR: &str = " ★";

/// Right-aligns `value` in a column of `width`; longer values are kept whole
pub fn pad_left(value: &str, width: usize) -> String {
    format!("{:>width$}", value, width = width)
}

/// Formats epoch seconds as `D/M/YYYY` (UTC, no leading zeros)
pub fn format_date(timestamp: i64) -> Option<String> {
    let date = DateTime::from_timestamp(timestamp, 0)?;
    Some(format!("{}/{}/{}", date.day(), date.month(), date.year()))
}

/// Substitutes `{token}`s using `lookup`
pub fn fill(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match after.find('}') {
            Some(end) => {
                let token = &after[..end];
                match lookup(token) {
                    Some(value) => rendered.push_str(&value),
                    None => {
                        rendered.push('{');
                        rendered.push_str(token);
                        rendered.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                rendered.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

fn task_field(task: &Task, token: &str) -> Option<String> {
    match token {
        "id" => Some(pad_left(&task.id.to_string(), ID_WIDTH)),
        "name" => Some(task.name.clone()),
        "doneDate" => Some(task.done_date.and_then(format_date).unwrap_or_default()),
        "listName" => Some(
            task.list_name
                .as_deref()
                .map(|name| pad_left(name, LIST_NAME_WIDTH))
                .unwrap_or_default(),
        ),
        _ => None,
    }
}

fn list_field(list: &List, token: &str) -> Option<String> {
    match token {
        "id" => Some(pad_left(&list.id.to_string(), ID_WIDTH)),
        "name" => Some(list.name.clone()),
        "totalTasks" => Some(list.total_tasks.to_string()),
        _ => None,
    }
}

/// Renders one record into a line, without emphasis
pub fn render_record(record: &Record, template: &str) -> String {
    match record {
        Record::Task(task) => fill(template, |token| task_field(task, token)),
        Record::List(list) => fill(template, |token| list_field(list, token)),
    }
}

fn write_record<W: Write>(out: &mut Output<W>, record: &Record, template: &str) -> io::Result<()> {
    let line = render_record(record, template);

    match record {
        Record::Task(task) if task.important => {
            let starred = format!(
                "{}{}",
                out.paint(&line, Tone::Starred),
                out.paint(STAR, Tone::Starred)
            );
            out.line(&starred)
        }
        _ => out.line(&line),
    }
}

/// Renders records one per line
///
/// Without a template, tasks use [`DEFAULT_TEMPLATE`] and lists use [`LIST_TEMPLATE`].
pub fn render<W: Write>(
    out: &mut Output<W>,
    kind: ResourceKind,
    records: &[Record],
    template: Option<&str>,
) -> io::Result<()> {
    let template = template.unwrap_or(match kind {
        ResourceKind::Task => DEFAULT_TEMPLATE,
        ResourceKind::List => LIST_TEMPLATE,
    });

    for record in records {
        write_record(out, record, template)?;
    }

    Ok(())
}

/// Renders tasks with a header line each time the owning list changes
///
/// Input is expected to be ordered by list already.
pub fn render_grouped<W: Write>(
    out: &mut Output<W>,
    records: &[Record],
    template: Option<&str>,
) -> io::Result<()> {
    let template = template.unwrap_or(DEFAULT_TEMPLATE);
    let mut current: Option<&str> = None;

    for record in records {
        if let Some(task) = record.as_task() {
            let list = task.list_name.as_deref().unwrap_or_default();
            if current != Some(list) {
                current = Some(list);
                let header = format!("{}:", list);
                out.styled(&header, Tone::Header)?;
            }
        }

        write_record(out, record, template)?;
    }

    Ok(())
}
