use crate::repository::{Child, FieldValue, Fields, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Function {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FunctionFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub role_id: i64,
}

impl Fields for FunctionFields {
    fn values(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", FieldValue::Text(self.name.clone())),
            ("description", FieldValue::OptionalText(self.description.clone())),
            ("role_id", FieldValue::Id(self.role_id)),
        ]
    }
}

impl Record for Function {
    const TABLE: &'static str = "functions";
    const NAME: &'static str = "Function";
    type Fields = FunctionFields;
}

impl Child for Function {
    const PARENT_COLUMN: &'static str = "role_id";
}
