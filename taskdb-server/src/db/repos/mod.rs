//! Store trait and repository implementations
//!
//! Handlers only see [`TaskStore`]; the MySQL repository and the in-memory
//! store both implement it.

pub mod tasks;

use async_trait::async_trait;

use crate::models::{ExecResult, NewTask, Task, TaskPatch};

pub use tasks::MySqlTaskStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Query(#[from] sqlx::Error),

    /// A write the storage layer refuses, e.g. a NULL title.
    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("update has no updatable fields")]
    EmptyPatch,
}

/// One method per statement against the `tasks` table.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Short backend name reported by `/health`.
    fn backend(&self) -> &'static str;

    /// All rows, oldest `createat` first.
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError>;

    /// Insert a row; `insert_id` of the result is the generated id.
    async fn create(&self, task: NewTask) -> Result<ExecResult, StoreError>;

    /// Overwrite the fields present in `patch`. Zero affected rows is not an error.
    async fn update(&self, id: i64, patch: TaskPatch) -> Result<ExecResult, StoreError>;

    async fn delete(&self, id: i64) -> Result<ExecResult, StoreError>;
}
