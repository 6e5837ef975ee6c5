//! Command name lookup
//!
//! Recognised command names map onto a closed set of [`Action`]s. Anything
//! else is not an error: the caller shows usage help and exits successfully.

use super::args::{Arguments, Resolved};

/// Operations a user can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ls,
    Show,
    Add,
    Done,
    Undo,
    Star,
    Unstar,
    Remove,
    Restore,
    Move,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::Ls,
        Action::Show,
        Action::Add,
        Action::Done,
        Action::Undo,
        Action::Star,
        Action::Unstar,
        Action::Remove,
        Action::Restore,
        Action::Move,
    ];

    /// Looks up a command name; `rm` and `delete` are synonyms
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "ls" => Action::Ls,
            "show" => Action::Show,
            "add" => Action::Add,
            "done" => Action::Done,
            "undo" => Action::Undo,
            "star" => Action::Star,
            "unstar" => Action::Unstar,
            "rm" | "delete" => Action::Remove,
            "restore" => Action::Restore,
            "move" => Action::Move,
            _ => return None,
        };

        Some(action)
    }

    /// Canonical command name
    pub fn name(&self) -> &'static str {
        match self {
            Action::Ls => "ls",
            Action::Show => "show",
            Action::Add => "add",
            Action::Done => "done",
            Action::Undo => "undo",
            Action::Star => "star",
            Action::Unstar => "unstar",
            Action::Remove => "rm",
            Action::Restore => "restore",
            Action::Move => "move",
        }
    }
}

/// What a raw argument list asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Help,
    Version,
    /// Unrecognised command name; answered with help
    Unknown(String),
    Invoke(Action, Resolved),
}

impl Request {
    /// Classifies an argument list (without the program name)
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arguments = Arguments::split(args);

        match arguments.command.as_deref() {
            None | Some("") | Some("-h") | Some("--help") | Some("help") => return Request::Help,
            Some("-v") | Some("--version") | Some("version") => return Request::Version,
            Some(_) => {}
        }

        let Some(resolved) = arguments.resolve() else {
            return Request::Help;
        };

        match Action::from_name(&resolved.command) {
            Some(action) => Request::Invoke(action, resolved),
            None => Request::Unknown(resolved.command),
        }
    }
}
