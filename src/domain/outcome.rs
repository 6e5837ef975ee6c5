//! Results returned by store operations
//!
//! Each store method answers with exactly one [`Outcome`] variant, so
//! callers match on shape instead of probing for fields.

use super::{List, Task};

/// A single row coming back from a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    List(List),
    Task(Task),
}

impl Record {
    pub fn as_task(&self) -> Option<&Task> {
        match self {
            Record::Task(task) => Some(task),
            Record::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Record::List(list) => Some(list),
            Record::Task(_) => None,
        }
    }
}

impl From<Task> for Record {
    fn from(task: Task) -> Self {
        Record::Task(task)
    }
}

impl From<List> for Record {
    fn from(list: List) -> Self {
        Record::List(list)
    }
}

/// Successful result of a store operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Lookup of one record; `None` when nothing matched
    SingleRecord(Option<Record>),

    /// Ordered collection, in the order the store produced it
    RecordSet(Vec<Record>),

    /// Number of rows changed by an update
    AffectedCount(usize),

    /// Identifier of a newly created row
    CreatedId(i64),
}

impl Outcome {
    /// Returns true if the operation found or changed something
    pub fn is_effective(&self) -> bool {
        match self {
            Outcome::SingleRecord(record) => record.is_some(),
            Outcome::RecordSet(records) => !records.is_empty(),
            Outcome::AffectedCount(count) => *count > 0,
            Outcome::CreatedId(id) => *id > 0,
        }
    }

    /// Returns the records carried by this outcome, if any
    pub fn records(&self) -> &[Record] {
        match self {
            Outcome::SingleRecord(Some(record)) => std::slice::from_ref(record),
            Outcome::RecordSet(records) => records,
            _ => &[],
        }
    }

    /// Short description for verbose output
    pub fn describe(&self) -> String {
        match self {
            Outcome::SingleRecord(Some(_)) => "single record".to_string(),
            Outcome::SingleRecord(None) => "no record".to_string(),
            Outcome::RecordSet(records) => format!("{} record(s)", records.len()),
            Outcome::AffectedCount(count) => format!("{} row(s) affected", count),
            Outcome::CreatedId(id) => format!("created id {}", id),
        }
    }
}
