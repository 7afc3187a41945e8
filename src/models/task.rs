use crate::repository::{FieldValue, Fields, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of both `POST` and `PUT`. Omitted optional fields reset to their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskFields {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Fields for TaskFields {
    fn values(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("title", FieldValue::Text(self.title.clone())),
            ("description", FieldValue::OptionalText(self.description.clone())),
            ("completed", FieldValue::Bool(self.completed)),
        ]
    }
}

impl Record for Task {
    const TABLE: &'static str = "tasks";
    const NAME: &'static str = "Task";
    type Fields = TaskFields;
}
