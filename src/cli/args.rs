//! Positional argument resolution
//!
//! The command line has no flags for its operations, only positions:
//!
//! ```text
//! nodo <command> <major> <minor> <extra>...
//! ```
//!
//! From those positions we derive which resource kind is meant and which
//! identifier targets it. `major == "list"` switches to lists, in which case
//! the identifier is `minor`; otherwise the identifier is `major`.
//!
//! A command made only of decimal digits is a task id, so `nodo 42` is
//! rewritten to `nodo show 42` with the remaining positions shifted right.

use crate::domain::ResourceKind;

/// True for one or more ASCII digits and nothing else, whatever the magnitude
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a task id: one or more ASCII digits and nothing else
///
/// Signs, whitespace and empty strings are rejected, as are values that
/// overflow `i64`.
pub fn parse_id(token: &str) -> Option<i64> {
    if !is_numeric(token) {
        return None;
    }

    token.parse().ok()
}

/// Raw positions, consumed in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub command: Option<String>,
    pub major: Option<String>,
    pub minor: Option<String>,
    pub extra: Vec<String>,
}

impl Arguments {
    /// Splits an argument list into command, major, minor and extra
    pub fn split<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);

        Self {
            command: args.next(),
            major: args.next(),
            minor: args.next(),
            extra: args.collect(),
        }
    }

    /// Resolves kind and identifier for a present command
    pub fn resolve(self) -> Option<Resolved> {
        let command = self.command?;

        if is_numeric(&command) {
            let mut extra = Vec::with_capacity(self.extra.len() + 1);
            extra.extend(self.minor);
            extra.extend(self.extra);

            return Some(Resolved::new("show", Some(command), self.major, extra));
        }

        Some(Resolved::new(command, self.major, self.minor, self.extra))
    }
}

/// A command with its resource kind and target identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub command: String,
    pub kind: ResourceKind,
    pub id: Option<String>,
    pub major: Option<String>,
    pub minor: Option<String>,
    pub extra: Vec<String>,
}

impl Resolved {
    fn new(
        command: impl Into<String>,
        major: Option<String>,
        minor: Option<String>,
        extra: Vec<String>,
    ) -> Self {
        let kind = if major.as_deref() == Some("list") {
            ResourceKind::List
        } else {
            ResourceKind::Task
        };

        let id = match kind {
            ResourceKind::List => minor.clone(),
            ResourceKind::Task => major.clone(),
        };

        Self {
            command: command.into(),
            kind,
            id,
            major,
            minor,
            extra,
        }
    }

    /// Minor and extra joined with single spaces, for unquoted names
    pub fn rest(&self) -> Option<String> {
        let minor = self.minor.as_ref()?;

        if self.extra.is_empty() {
            return Some(minor.clone());
        }

        let mut joined = minor.clone();
        for word in &self.extra {
            joined.push(' ');
            joined.push_str(word);
        }

        Some(joined)
    }

    /// Major, minor and extra joined with single spaces
    pub fn words(&self) -> Option<String> {
        let major = self.major.as_ref()?;

        match self.rest() {
            Some(rest) => Some(format!("{} {}", major, rest)),
            None => Some(major.clone()),
        }
    }

    /// Everything after `list` for list-kind commands (`add list My List`)
    pub fn list_name(&self) -> Option<String> {
        match self.kind {
            ResourceKind::List => self.rest(),
            ResourceKind::Task => self.id.clone(),
        }
    }
}
