//! Task domain model
//!
//! A task belongs to exactly one list. Tasks are never purged: removal
//! only sets the `deleted` flag, and `restore` clears it again.

/// A unit of work inside a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Internal identifier
    pub id: i64,

    /// Owning list
    pub list_id: i64,

    /// Name of the owning list (joined in by the store)
    pub list_name: Option<String>,

    /// Human-readable name
    pub name: String,

    /// Starred tasks are rendered with emphasis
    pub important: bool,

    pub notes: Option<String>,

    /// Due date, seconds since the Unix epoch
    pub date: Option<i64>,

    pub done: bool,

    /// When the task was marked done, seconds since the Unix epoch
    pub done_date: Option<i64>,

    /// Soft-delete flag
    pub deleted: bool,
}

impl Task {
    /// Creates a pending task in the given list
    pub fn new(id: i64, list_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            list_id,
            list_name: None,
            name: name.into(),
            important: false,
            notes: None,
            date: None,
            done: false,
            done_date: None,
            deleted: false,
        }
    }

    /// Sets the owning list's name
    pub fn in_list(mut self, list_name: impl Into<String>) -> Self {
        self.list_name = Some(list_name.into());
        self
    }
}

/// Payload for creating a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Name of the list the task goes into
    pub list: String,

    /// Task name
    pub name: String,
}

impl NewTask {
    pub fn new(list: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            list: list.into(),
            name: name.into(),
        }
    }
}
