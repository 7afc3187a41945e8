use crate::models::role::Role;
use crate::repository::{FieldValue, Fields, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DepartmentFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Detail view of a department with its roles embedded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DepartmentWithRoles {
    #[serde(flatten)]
    pub department: Department,
    pub roles: Vec<Role>,
}

impl Fields for DepartmentFields {
    fn values(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", FieldValue::Text(self.name.clone())),
            ("description", FieldValue::OptionalText(self.description.clone())),
        ]
    }
}

impl Record for Department {
    const TABLE: &'static str = "departments";
    const NAME: &'static str = "Department";
    type Fields = DepartmentFields;
}
