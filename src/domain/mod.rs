//! Domain models for nodo
//!
//! Lists, tasks and the shapes a store operation can come back with.
//! Nothing in here performs I/O.

mod kind;
mod list;
mod task;
mod outcome;

pub use kind::{ResourceKind, UnknownResourceKind};
pub use list::List;
pub use task::{NewTask, Task};
pub use outcome::{Outcome, Record};
