//! Command handlers
//!
//! [`Command`] holds the two stores and the output sink. Each handler makes
//! at most one store call, reports it through a [`Callback`], and renders
//! whatever came back. Store failures are printed, never returned: the only
//! errors a handler propagates are failures to write output.

use std::io::{self, Write};

use super::args::{parse_id, Resolved};
use super::callback::Callback;
use super::dispatch::Action;
use super::format::{self, DONE_TEMPLATE, LIST_TEMPLATE};
use super::output::{Output, Tone};
use crate::domain::{List, NewTask, Outcome, Record, ResourceKind, Task};
use crate::storage::{ListStore, StoreResult, TaskStore};

/// Facade over the list and task stores
pub struct Command<'a, W: Write> {
    lists: &'a dyn ListStore,
    tasks: &'a dyn TaskStore,
    default_list: String,
    out: Output<W>,
}

impl<'a, W: Write> Command<'a, W> {
    pub fn new(
        lists: &'a dyn ListStore,
        tasks: &'a dyn TaskStore,
        default_list: impl Into<String>,
        out: Output<W>,
    ) -> Self {
        Self {
            lists,
            tasks,
            default_list: default_list.into(),
            out,
        }
    }

    /// Returns the output sink
    pub fn into_output(self) -> Output<W> {
        self.out
    }

    /// Runs the handler for `action`
    pub fn dispatch(&mut self, action: Action, args: &Resolved) -> io::Result<()> {
        self.out.verbose_ctx(
            "dispatch",
            &format!("{} kind={} id={:?}", action.name(), args.kind, args.id),
        );

        match action {
            Action::Ls => self.ls(args),
            Action::Show => self.show(args),
            Action::Add => self.add(args),
            Action::Done => self.set_done(args.id.as_deref(), true),
            Action::Undo => self.set_done(args.id.as_deref(), false),
            Action::Star => self.set_star(args.id.as_deref(), true),
            Action::Unstar => self.set_star(args.id.as_deref(), false),
            Action::Remove => self.remove(args),
            Action::Restore => self.restore(args),
            Action::Move => self.move_task(args),
        }
    }

    fn trace(&self, operation: &str, result: &StoreResult) {
        if self.out.is_verbose() {
            let shape = match result {
                Ok(outcome) => outcome.describe(),
                Err(e) => format!("error: {}", e),
            };
            self.out.verbose_ctx("store", &format!("{} -> {}", operation, shape));
        }
    }

    /// Runs a call against one task, addressed by a numeric id
    fn with_task<F>(&mut self, id: Option<&str>, message: Option<&str>, call: F) -> io::Result<()>
    where
        F: FnOnce(&dyn TaskStore, i64) -> StoreResult,
    {
        let callback = Callback::new(ResourceKind::Task, id, message);

        match id.and_then(parse_id) {
            Some(task_id) => {
                let result = call(self.tasks, task_id);
                self.trace("task", &result);
                callback.finish(&mut self.out, result)
            }
            None => callback.unresolved(&mut self.out),
        }
    }

    /// Runs a call against one list, addressed by name
    fn with_list<F>(&mut self, name: Option<String>, message: &str, call: F) -> io::Result<()>
    where
        F: FnOnce(&dyn ListStore, &str) -> StoreResult,
    {
        let callback = Callback::new(ResourceKind::List, name.as_deref(), Some(message));

        match name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => {
                let result = call(self.lists, name);
                self.trace("list", &result);
                callback.finish(&mut self.out, result)
            }
            None => callback.unresolved(&mut self.out),
        }
    }

    /// Prints a collection, or `empty` when there is nothing in it
    fn rows<F>(
        &mut self,
        operation: &str,
        result: StoreResult,
        empty: &str,
        render: F,
    ) -> io::Result<()>
    where
        F: FnOnce(&mut Output<W>, &[Record]) -> io::Result<()>,
    {
        self.trace(operation, &result);

        match result {
            Err(e) => self.out.error(&e.to_string()),
            Ok(outcome) if outcome.is_effective() => render(&mut self.out, outcome.records()),
            Ok(_) => self.out.warn(empty),
        }
    }

    fn ls(&mut self, args: &Resolved) -> io::Result<()> {
        let limit = args
            .minor
            .as_deref()
            .and_then(parse_id)
            .and_then(|n| u64::try_from(n).ok());

        match args.major.as_deref() {
            None => self.overview(),
            Some("lists") => {
                let result = self.lists.get_all();
                self.rows("get_all", result, "There are no lists yet.", |out, records| {
                    format::render(out, ResourceKind::List, records, Some(LIST_TEMPLATE))
                })
            }
            Some("done") => {
                let result = self.tasks.get_done(limit);
                let empty = "No tasks are done yet. Are you slacking?";
                self.rows("get_done", result, empty, |out, records| {
                    format::render(out, ResourceKind::Task, records, Some(DONE_TEMPLATE))
                })
            }
            Some("removed") => {
                let result = self.tasks.get_deleted(limit);
                self.rows("get_deleted", result, "There are no removed tasks.", |out, records| {
                    format::render(out, ResourceKind::Task, records, None)
                })
            }
            Some(_) => {
                let name = match args.kind {
                    ResourceKind::List => args.list_name(),
                    ResourceKind::Task => args.words(),
                };
                self.list_contents(name)
            }
        }
    }

    /// Default view: pending tasks grouped by list
    fn overview(&mut self) -> io::Result<()> {
        let result = self.tasks.get_to_do();
        self.rows("get_to_do", result, "Nothing to show.", |out, records| {
            format::render_grouped(out, records, None)
        })
    }

    fn list_contents(&mut self, name: Option<String>) -> io::Result<()> {
        let callback = Callback::new(ResourceKind::List, name.as_deref(), None);

        let Some(name) = name.filter(|name| !name.is_empty()) else {
            return callback.unresolved(&mut self.out);
        };

        let result = self.lists.get_by_name(&name);
        self.trace("get_by_name", &result);
        callback.finish_with(&mut self.out, result, |out, outcome| {
            format::render(out, ResourceKind::Task, outcome.records(), None)
        })
    }

    fn show(&mut self, args: &Resolved) -> io::Result<()> {
        if args.kind == ResourceKind::List {
            return self.show_list(args.list_name());
        }

        let id = args.id.as_deref();
        let callback = Callback::new(ResourceKind::Task, id, None);

        let Some(task_id) = id.and_then(parse_id) else {
            return callback.unresolved(&mut self.out);
        };

        let result = self.tasks.get(task_id);
        self.trace("get", &result);
        callback.finish_with(&mut self.out, result, |out, outcome| {
            match outcome.records().first().and_then(Record::as_task) {
                Some(task) => write_details(out, task),
                None => Ok(()),
            }
        })
    }

    /// `show list <name>`: the list with its task count
    fn show_list(&mut self, name: Option<String>) -> io::Result<()> {
        let callback = Callback::new(ResourceKind::List, name.as_deref(), None);

        let Some(name) = name.filter(|name| !name.is_empty()) else {
            return callback.unresolved(&mut self.out);
        };

        let result = self.lists.get(&name);
        self.trace("get list", &result);
        callback.finish_with(&mut self.out, result, |out, outcome| {
            match outcome.records().first().and_then(Record::as_list) {
                Some(list) => write_list_details(out, list),
                None => Ok(()),
            }
        })
    }

    fn add(&mut self, args: &Resolved) -> io::Result<()> {
        if args.kind == ResourceKind::List {
            return self.add_list(args.list_name());
        }

        let (list, name) = match (args.major.clone(), args.rest()) {
            (Some(name), None) => (self.default_list.clone(), name),
            (Some(list), Some(name)) => (list, name),
            (None, _) => (self.default_list.clone(), String::new()),
        };

        if name.is_empty() {
            return self.out.warn("Task name cannot be empty.");
        }

        let task = NewTask::new(list, name);
        let result = self.tasks.add(&task);
        self.trace("add task", &result);

        match result {
            Err(e) => self.out.error(&e.to_string()),
            Ok(Outcome::CreatedId(id)) if id > 0 => {
                let list = self.out.paint(&task.list, Tone::Accent);
                self.out.line(&format!("Task #{} added to list {}", id, list))
            }
            Ok(_) => self.out.error("The database did not return the new task id."),
        }
    }

    fn add_list(&mut self, name: Option<String>) -> io::Result<()> {
        let Some(name) = name.filter(|name| !name.is_empty()) else {
            return self.out.warn("List name cannot be empty.");
        };

        let result = self.lists.add(&name);
        self.trace("add list", &result);

        match result {
            Err(e) => self.out.error(&e.to_string()),
            Ok(Outcome::CreatedId(id)) if id > 0 => {
                self.out.line(&format!("Added list {}", name))
            }
            Ok(_) => self.out.error("The database did not return the new list id."),
        }
    }

    fn set_done(&mut self, id: Option<&str>, done: bool) -> io::Result<()> {
        let message = if done { "marked as done" } else { "marked as not done" };
        self.with_task(id, Some(message), |tasks, id| tasks.set_done(id, done))
    }

    fn set_star(&mut self, id: Option<&str>, important: bool) -> io::Result<()> {
        let message = if important {
            "marked as important"
        } else {
            "marked as not important"
        };
        self.with_task(id, Some(message), |tasks, id| tasks.set_star(id, important))
    }

    fn remove(&mut self, args: &Resolved) -> io::Result<()> {
        match args.kind {
            ResourceKind::List => {
                self.with_list(args.list_name(), "removed", |lists, name| lists.remove(name))
            }
            ResourceKind::Task => {
                self.with_task(args.id.as_deref(), Some("removed"), |tasks, id| tasks.remove(id))
            }
        }
    }

    fn restore(&mut self, args: &Resolved) -> io::Result<()> {
        match args.kind {
            ResourceKind::List => {
                self.with_list(args.list_name(), "restored", |lists, name| lists.restore(name))
            }
            ResourceKind::Task => {
                self.with_task(args.id.as_deref(), Some("restored"), |tasks, id| tasks.restore(id))
            }
        }
    }

    /// `move <task_id> <list_name>`
    fn move_task(&mut self, args: &Resolved) -> io::Result<()> {
        let id = args.major.as_deref();

        let Some(list) = args.rest() else {
            if id.is_none() {
                return Callback::new(ResourceKind::Task, None, None).unresolved(&mut self.out);
            }
            return self.out.warn("No list specified.");
        };

        let message = format!("moved to list {}", list);
        self.with_task(id, Some(message.as_str()), |tasks, id| tasks.move_to(id, &list))
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn date_or_none(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(format::format_date)
        .unwrap_or_else(|| "none".to_string())
}

fn write_list_details<W: Write>(out: &mut Output<W>, list: &List) -> io::Result<()> {
    out.styled(&format!("List {}", list.name), Tone::Strong)?;
    out.line(&format!("Tasks: {}", list.total_tasks))?;
    out.line(&format!("Removed: {}", yes_no(list.deleted)))
}

fn write_details<W: Write>(out: &mut Output<W>, task: &Task) -> io::Result<()> {
    out.styled(&format!("Task #{}", task.id), Tone::Strong)?;
    out.line(&format!("List: {}", task.list_name.as_deref().unwrap_or("none")))?;
    out.line(&format!("Name: {}", task.name))?;
    out.line(&format!("Important: {}", yes_no(task.important)))?;
    out.line(&format!("Notes: {}", task.notes.as_deref().unwrap_or("none")))?;
    out.line(&format!("Due Date: {}", date_or_none(task.date)))?;
    out.line(&format!("Done: {}", yes_no(task.done)))?;
    out.line(&format!("Done Date: {}", date_or_none(task.done_date)))?;
    out.line(&format!("Removed: {}", yes_no(task.deleted)))
}
