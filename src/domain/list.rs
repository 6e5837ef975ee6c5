//! List domain model

/// A named grouping of tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    /// Internal identifier
    pub id: i64,

    /// Unique name, which is how the command line refers to a list
    pub name: String,

    /// Soft-delete flag
    pub deleted: bool,

    /// Number of non-deleted tasks in the list
    pub total_tasks: u64,
}

impl List {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            deleted: false,
            total_tasks: 0,
        }
    }
}
