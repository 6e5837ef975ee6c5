//! nodo - The simple command line task manager
//!
//! Tasks live in named lists. One invocation runs one command: the
//! positional arguments are resolved to a list or a task, the matching
//! store operation runs, and the result is printed.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{List, NewTask, Outcome, Record, ResourceKind, Task};
