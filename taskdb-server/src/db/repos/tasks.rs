//! Task repository over MySQL
//!
//! Every method runs exactly one statement against the pool, which
//! acquires a connection, executes and releases it.

use async_trait::async_trait;
use sqlx::mysql::MySqlQueryResult;
use sqlx::{MySql, QueryBuilder};

use super::{StoreError, TaskStore};
use crate::db::pool::TaskPool;
use crate::models::{ExecResult, NewTask, Task, TaskPatch};

/// MySQL-backed task store
#[derive(Clone, Debug)]
pub struct MySqlTaskStore {
    pool: TaskPool,
}

impl MySqlTaskStore {
    pub fn new(pool: TaskPool) -> Self {
        Self { pool }
    }
}

impl From<MySqlQueryResult> for ExecResult {
    fn from(r: MySqlQueryResult) -> Self {
        Self {
            affected_rows: r.rows_affected(),
            insert_id: r.last_insert_id(),
        }
    }
}

#[async_trait]
impl TaskStore for MySqlTaskStore {
    fn backend(&self) -> &'static str {
        "mysql"
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let rows = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, createat FROM tasks ORDER BY createat ASC",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let row = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, createat FROM tasks WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row)
    }

    async fn create(&self, task: NewTask) -> Result<ExecResult, StoreError> {
        let result = sqlx::query("INSERT INTO tasks (title, description) VALUES (?, ?)")
            .bind(task.title)
            .bind(task.description)
            .execute(self.pool.inner())
            .await?;

        Ok(result.into())
    }

    async fn update(&self, id: i64, patch: TaskPatch) -> Result<ExecResult, StoreError> {
        if patch.is_empty() {
            return Err(StoreError::EmptyPatch);
        }

        let mut query = QueryBuilder::<MySql>::new("UPDATE tasks SET ");
        {
            let mut set = query.separated(", ");
            if let Some(title) = patch.title {
                set.push("title = ").push_bind_unseparated(title);
            }
            if let Some(description) = patch.description {
                set.push("description = ")
                    .push_bind_unseparated(description);
            }
        }
        query.push(" WHERE id = ").push_bind(id);

        let result = query.build().execute(self.pool.inner()).await?;
        Ok(result.into())
    }

    async fn delete(&self, id: i64) -> Result<ExecResult, StoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.into())
    }
}
