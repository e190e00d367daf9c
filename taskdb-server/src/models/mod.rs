//! Domain models for the tasks table

pub mod task;

pub use task::{ExecResult, NewTask, Task, TaskPatch};
