use crate::models::function::Function;
use crate::repository::{Child, FieldValue, Fields, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub department_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub department_id: i64,
}

/// Detail view of a role with its functions embedded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleWithFunctions {
    #[serde(flatten)]
    pub role: Role,
    pub functions: Vec<Function>,
}

impl Fields for RoleFields {
    fn values(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", FieldValue::Text(self.name.clone())),
            ("description", FieldValue::OptionalText(self.description.clone())),
            ("department_id", FieldValue::Id(self.department_id)),
        ]
    }
}

impl Record for Role {
    const TABLE: &'static str = "roles";
    const NAME: &'static str = "Role";
    type Fields = RoleFields;
}

impl Child for Role {
    const PARENT_COLUMN: &'static str = "department_id";
}
