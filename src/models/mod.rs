pub mod department;
pub mod function;
pub mod role;
pub mod task;

use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_LIMIT: i64 = 100;

/// Offset pagination shared by every list endpoint.
#[derive(Deserialize, Validate, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    #[serde(default)]
    #[validate(range(min = 0))]
    pub skip: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 0))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_use_defaults() {
        let page: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(page, Pagination::default());
    }

    #[test]
    fn negative_values_are_rejected() {
        let page = Pagination { skip: -1, limit: 10 };
        assert!(page.validate().is_err());
        let page = Pagination { skip: 0, limit: -5 };
        assert!(page.validate().is_err());
    }
}
