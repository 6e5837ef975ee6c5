//! # Command-Line Interface
//!
//! Turns a positional argument list into one store call and prints the
//! result.
//!
//! ## Pipeline
//!
//! | Stage | Module | Role |
//! |-------|--------|------|
//! | Resolve | `args` | command/major/minor/extra, resource kind, target id |
//! | Dispatch | `dispatch` | command name to [`Action`], help/version/unknown |
//! | Handle | `command` | one store call per action |
//! | Classify | `callback` | error / found / not found / no identifier |
//! | Render | `format` | templates, padding, grouping by list |
//!
//! ## Grammar
//!
//! ```text
//! nodo ls                               overview of pending tasks
//! nodo ls [lists|done [n]|removed [n]|<list_name>]
//! nodo <task_id>                        same as `nodo show <task_id>`
//! nodo show list <list_name>
//! nodo add [<list_name>] <task_name>
//! nodo add list <list_name>
//! nodo done|undo|star|unstar <task_id>
//! nodo rm|restore <task_id> | rm|restore list <list_name>
//! nodo move <task_id> <list_name>
//! ```
//!
//! Unknown commands print usage help and exit successfully.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` for debug output on stderr:
//! ```bash
//! nodo --verbose ls done
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod args;
mod callback;
mod command;
mod dispatch;
mod format;
mod help;
mod output;

pub use app::{execute, run, Cli};
pub use args::{is_numeric, parse_id, Arguments, Resolved};
pub use callback::{Callback, Classification};
pub use command::Command;
pub use dispatch::{Action, Request};
pub use format::{format_date, pad_left, render, render_grouped};
pub use output::{Output, Tone};
