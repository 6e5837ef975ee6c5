//! Resource kinds addressed by the command line

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown resource kind: {0}")]
pub struct UnknownResourceKind(pub String);

/// The two kinds of resources a command can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Task,
    List,
}

impl ResourceKind {
    /// Lowercase noun used in messages ("No task identifier specified.")
    pub fn noun(&self) -> &'static str {
        match self {
            ResourceKind::Task => "task",
            ResourceKind::List => "list",
        }
    }

    /// Label prefixed to per-resource messages
    pub fn label(&self, id: &str) -> String {
        match self {
            ResourceKind::Task => format!("Task #{}", id),
            ResourceKind::List => format!("List {}", id),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownResourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(ResourceKind::Task),
            "list" => Ok(ResourceKind::List),
            other => Err(UnknownResourceKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!("task".parse::<ResourceKind>(), Ok(ResourceKind::Task));
        assert_eq!("list".parse::<ResourceKind>(), Ok(ResourceKind::List));
    }

    #[test]
    fn rejects_anything_else() {
        assert!("List".parse::<ResourceKind>().is_err());
        assert!("tasks".parse::<ResourceKind>().is_err());
        assert!("".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(ResourceKind::Task.label("42"), "Task #42");
        assert_eq!(ResourceKind::List.label("Groceries"), "List Groceries");
        assert_eq!(ResourceKind::List.to_string(), "list");
    }
}
