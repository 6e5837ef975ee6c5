//! Outcome classification for store calls
//!
//! A [`Callback`] is built before a store call and applied to its result.
//! Classification, first match wins:
//!
//! 1. the store failed: print the error, skip the continuation
//! 2. something was found or changed: print the success message, run the continuation
//! 3. an identifier was given: "<Kind> <id> does not exist."
//! 4. no identifier: "No <kind> identifier specified."

use std::io::{self, Write};

use super::output::Output;
use crate::domain::{Outcome, ResourceKind, UnknownResourceKind};
use crate::storage::StoreResult;

/// Result of classifying a store response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Failed(String),
    Effective,
    NotFound,
    NoIdentifier,
}

/// Reports the outcome of one store call for one resource
#[derive(Debug, Clone)]
pub struct Callback {
    kind: ResourceKind,
    id: Option<String>,
    message: Option<String>,
}

impl Callback {
    pub fn new(kind: ResourceKind, id: Option<&str>, message: Option<&str>) -> Self {
        Self {
            kind,
            id: id.filter(|id| !id.is_empty()).map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    /// Builds a callback from a kind name; only "task" and "list" exist
    pub fn named(
        kind: &str,
        id: Option<&str>,
        message: Option<&str>,
    ) -> Result<Self, UnknownResourceKind> {
        Ok(Self::new(kind.parse()?, id, message))
    }

    pub fn classify(&self, result: &StoreResult) -> Classification {
        match result {
            Err(e) => Classification::Failed(e.to_string()),
            Ok(outcome) if outcome.is_effective() => Classification::Effective,
            Ok(_) => self.missing(),
        }
    }

    fn missing(&self) -> Classification {
        if self.id.is_some() {
            Classification::NotFound
        } else {
            Classification::NoIdentifier
        }
    }

    /// Reports a result with no continuation
    pub fn finish<W: Write>(self, out: &mut Output<W>, result: StoreResult) -> io::Result<()> {
        self.finish_with(out, result, |_, _| Ok(()))
    }

    /// Reports a result and hands effective outcomes to `then`
    pub fn finish_with<W, F>(
        self,
        out: &mut Output<W>,
        result: StoreResult,
        then: F,
    ) -> io::Result<()>
    where
        W: Write,
        F: FnOnce(&mut Output<W>, Outcome) -> io::Result<()>,
    {
        let classification = self.classify(&result);
        out.verbose_ctx(
            self.kind.noun(),
            &format!("{:?} -> {:?}", self.id, classification),
        );

        match (classification, result) {
            (Classification::Effective, Ok(outcome)) => {
                if let Some(message) = &self.message {
                    out.line(&format!("{} {}", self.label(), message))?;
                }
                then(out, outcome)
            }
            (classification, _) => self.report(out, classification),
        }
    }

    /// Reports a call that could not be made: the identifier was absent or unusable
    pub fn unresolved<W: Write>(self, out: &mut Output<W>) -> io::Result<()> {
        let classification = self.missing();
        self.report(out, classification)
    }

    fn report<W: Write>(
        &self,
        out: &mut Output<W>,
        classification: Classification,
    ) -> io::Result<()> {
        match classification {
            Classification::Failed(message) => out.error(&message),
            Classification::NotFound => out.line(&format!("{} does not exist.", self.label())),
            Classification::NoIdentifier => {
                out.line(&format!("No {} identifier specified.", self.kind.noun()))
            }
            Classification::Effective => Ok(()),
        }
    }

    fn label(&self) -> String {
        self.kind.label(self.id.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::storage::StoreError;

    fn run(callback: Callback, result: StoreResult) -> (String, bool) {
        let mut out = Output::new(Vec::new(), false, false);
        let mut continued = false;
        callback
            .finish_with(&mut out, result, |_, _| {
                continued = true;
                Ok(())
            })
            .unwrap();

        (String::from_utf8(out.into_inner().unwrap()).unwrap(), continued)
    }

    #[test]
    fn error_skips_continuation() {
        let callback = Callback::new(ResourceKind::Task, Some("3"), Some("marked as done"));
        let (text, continued) = run(callback, Err(StoreError::ListNotFound("Work".into())));

        assert_eq!(text, "List Work does not exist.\n");
        assert!(!continued);
    }

    #[test]
    fn affected_rows_print_message_and_continue() {
        let callback = Callback::new(ResourceKind::Task, Some("3"), Some("marked as done"));
        let (text, continued) = run(callback, Ok(Outcome::AffectedCount(1)));

        assert_eq!(text, "Task #3 marked as done\n");
        assert!(continued);
    }

    #[test]
    fn found_record_without_message_only_continues() {
        let callback = Callback::new(ResourceKind::Task, Some("3"), None);
        let record = Task::new(3, 1, "a").into();
        let (text, continued) = run(callback, Ok(Outcome::SingleRecord(Some(record))));

        assert_eq!(text, "");
        assert!(continued);
    }

    #[test]
    fn not_found_with_id() {
        let callback = Callback::new(ResourceKind::List, Some("Work"), Some("removed"));
        let (text, continued) = run(callback, Ok(Outcome::AffectedCount(0)));

        assert_eq!(text, "List Work does not exist.\n");
        assert!(!continued);
    }

    #[test]
    fn empty_record_set_is_not_found() {
        let callback = Callback::new(ResourceKind::List, Some("Work"), None);
        let (text, _) = run(callback, Ok(Outcome::RecordSet(Vec::new())));

        assert_eq!(text, "List Work does not exist.\n");
    }

    #[test]
    fn no_identifier() {
        let callback = Callback::new(ResourceKind::Task, None, Some("marked as done"));
        let (text, continued) = run(callback, Ok(Outcome::AffectedCount(0)));

        assert_eq!(text, "No task identifier specified.\n");
        assert!(!continued);
    }

    #[test]
    fn empty_identifier_counts_as_none() {
        let callback = Callback::new(ResourceKind::List, Some(""), None);
        assert_eq!(
            callback.classify(&Ok(Outcome::AffectedCount(0))),
            Classification::NoIdentifier
        );
    }

    #[test]
    fn unresolved_reports_without_a_call() {
        let mut out = Output::new(Vec::new(), false, false);
        Callback::new(ResourceKind::Task, Some("abc"), None)
            .unresolved(&mut out)
            .unwrap();
        Callback::new(ResourceKind::Task, None, None)
            .unresolved(&mut out)
            .unwrap();

        let text = String::from_utf8(out.into_inner().unwrap()).unwrap();
        assert_eq!(text, "Task #abc does not exist.\nNo task identifier specified.\n");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(Callback::named("task", Some("1"), None).is_ok());
        assert!(Callback::named("project", Some("1"), None).is_err());
    }
}
