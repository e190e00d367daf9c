//! In-memory task store
//!
//! Mirrors the table's behaviour (auto-increment ids from 1, `createat` set
//! on insert, NOT NULL title) without a database. Used by the router tests
//! and by `taskdb serve --memory`.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::repos::{StoreError, TaskStore};
use crate::models::{ExecResult, NewTask, Task, TaskPatch};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Task>,
    next_id: i64,
}

/// Task store held in process memory
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    table: RwLock<Table>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn title_required() -> StoreError {
    StoreError::Constraint("column 'title' cannot be null".into())
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let mut rows = self.table.read().await.rows.clone();
        // Stable: ties keep insertion order
        rows.sort_by_key(|t| t.createat);
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, task: NewTask) -> Result<ExecResult, StoreError> {
        let title = task.title.ok_or_else(title_required)?;

        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = table.next_id;
        table.rows.push(Task {
            id,
            title,
            description: task.description,
            createat: Utc::now(),
        });

        Ok(ExecResult {
            affected_rows: 1,
            insert_id: id as u64,
        })
    }

    async fn update(&self, id: i64, patch: TaskPatch) -> Result<ExecResult, StoreError> {
        if patch.is_empty() {
            return Err(StoreError::EmptyPatch);
        }

        let mut table = self.table.write().await;
        let Some(row) = table.rows.iter_mut().find(|t| t.id == id) else {
            return Ok(ExecResult::default());
        };
        if let Some(None) = patch.title {
            return Err(title_required());
        }

        if let Some(Some(title)) = patch.title {
            row.title = title;
        }
        if let Some(description) = patch.description {
            row.description = description;
        }

        Ok(ExecResult {
            affected_rows: 1,
            insert_id: 0,
        })
    }

    async fn delete(&self, id: i64) -> Result<ExecResult, StoreError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|t| t.id != id);

        Ok(ExecResult {
            affected_rows: (before - table.rows.len()) as u64,
            insert_id: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(title: &str, description: Option<&str>) -> NewTask {
        NewTask {
            title: Some(title.to_string()),
            description: description.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially() {
        let store = MemoryTaskStore::new();
        let a = store.create(new_task("a", None)).await.unwrap();
        let b = store.create(new_task("b", None)).await.unwrap();

        assert_eq!(a.insert_id, 1);
        assert_eq!(b.insert_id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryTaskStore::new();
        store.create(new_task("a", None)).await.unwrap();
        store.delete(1).await.unwrap();
        let next = store.create(new_task("b", None)).await.unwrap();

        assert_eq!(next.insert_id, 2);
    }

    #[tokio::test]
    async fn create_requires_title() {
        let store = MemoryTaskStore::new();
        let err = store.create(NewTask::default()).await.unwrap_err();

        assert!(matches!(err, StoreError::Constraint(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn list_is_ordered_by_createat() {
        let store = MemoryTaskStore::new();
        for title in ["one", "two", "three"] {
            store.create(new_task(title, None)).await.unwrap();
        }

        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.windows(2).all(|w| w[0].createat <= w[1].createat));
        assert_eq!(rows[0].title, "one");
    }

    #[tokio::test]
    async fn update_keeps_unspecified_fields() {
        let store = MemoryTaskStore::new();
        store
            .create(new_task("Buy milk", Some("2%")))
            .await
            .unwrap();
        let before = store.get(1).await.unwrap().unwrap();

        let patch = TaskPatch {
            title: Some(Some("Buy oat milk".into())),
            description: None,
        };
        let result = store.update(1, patch).await.unwrap();
        let after = store.get(1).await.unwrap().unwrap();

        assert_eq!(result.affected_rows, 1);
        assert_eq!(after.title, "Buy oat milk");
        assert_eq!(after.description, before.description);
        assert_eq!(after.createat, before.createat);
    }

    #[tokio::test]
    async fn update_can_clear_description() {
        let store = MemoryTaskStore::new();
        store.create(new_task("a", Some("x"))).await.unwrap();

        let patch = TaskPatch {
            title: None,
            description: Some(None),
        };
        store.update(1, patch).await.unwrap();

        assert_eq!(store.get(1).await.unwrap().unwrap().description, None);
    }

    #[tokio::test]
    async fn update_rejects_null_title() {
        let store = MemoryTaskStore::new();
        store.create(new_task("a", None)).await.unwrap();

        let patch = TaskPatch {
            title: Some(None),
            description: None,
        };
        assert!(matches!(
            store.update(1, patch).await,
            Err(StoreError::Constraint(_))
        ));
        assert_eq!(store.get(1).await.unwrap().unwrap().title, "a");
    }

    #[tokio::test]
    async fn update_missing_row_affects_nothing() {
        let store = MemoryTaskStore::new();
        let patch = TaskPatch {
            title: Some(Some("x".into())),
            description: None,
        };

        let result = store.update(42, patch).await.unwrap();
        assert_eq!(result.affected_rows, 0);
    }

    #[tokio::test]
    async fn delete_missing_row_leaves_table_unchanged() {
        let store = MemoryTaskStore::new();
        store.create(new_task("a", None)).await.unwrap();

        let result = store.delete(99).await.unwrap();
        assert_eq!(result.affected_rows, 0);
        assert_eq!(store.len().await, 1);
    }
}
