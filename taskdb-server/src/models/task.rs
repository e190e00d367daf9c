//! Task row, request bodies and write metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A row of the `tasks` table.
///
/// `id` and `createat` are assigned by storage on insert and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub createat: DateTime<Utc>,
}

/// Body of `POST /tasks`.
///
/// Both fields are optional here so a missing title is passed through and
/// rejected by the column constraint rather than by the JSON layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /tasks/{id}`.
///
/// Only `title` and `description` are updatable; any other key in the body
/// (including `id` and `createat`) is dropped during deserialization.
/// The outer `Option` says whether the field was present, the inner one
/// carries an explicit JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskPatch {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Execution metadata of a write statement, as reported by the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecResult {
    pub affected_rows: u64,
    pub insert_id: u64,
}
