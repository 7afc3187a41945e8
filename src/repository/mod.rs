//! Row-level storage access shared by every entity type.
//!
//! Each entity describes itself through [`Record`] (and [`Child`] when it
//! hangs under a parent row); the functions here build the SQL from that
//! description. Every function works on one borrowed connection so a handler
//! can run all of its queries on the connection it acquired for the request.

use crate::models::Pagination;
use chrono::Utc;
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::{FromRow, QueryBuilder, SqliteConnection};

/// A base-field value as it is bound into an insert or update.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    OptionalText(Option<String>),
    Bool(bool),
    Id(i64),
}

/// Client-supplied fields of an entity, in column order.
pub trait Fields {
    fn values(&self) -> Vec<(&'static str, FieldValue)>;
}

pub trait Record: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    const TABLE: &'static str;
    /// Used in not-found messages.
    const NAME: &'static str;
    type Fields: Fields;
}

/// An entity owned by a parent row through a foreign key column.
pub trait Child: Record {
    const PARENT_COLUMN: &'static str;
}

fn push_value(query_builder: &mut QueryBuilder<'_, Sqlite>, value: FieldValue) {
    match value {
        FieldValue::Text(v) => query_builder.push_bind(v),
        FieldValue::OptionalText(v) => query_builder.push_bind(v),
        FieldValue::Bool(v) => query_builder.push_bind(v),
        FieldValue::Id(v) => query_builder.push_bind(v),
    };
}

pub async fn get<T: Record>(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<T>, sqlx::Error> {
    let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
    sqlx::query_as::<Sqlite, T>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// Rows in insertion order.
pub async fn list<T: Record>(
    conn: &mut SqliteConnection,
    page: Pagination,
) -> Result<Vec<T>, sqlx::Error> {
    let sql = format!("SELECT * FROM {} ORDER BY id LIMIT ? OFFSET ?", T::TABLE);
    sqlx::query_as::<Sqlite, T>(&sql)
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&mut *conn)
        .await
}

/// Same as [`list`], restricted to the children of `parent_id`. A parent that
/// does not exist simply has no children.
pub async fn list_by_parent<T: Child>(
    conn: &mut SqliteConnection,
    parent_id: i64,
    page: Pagination,
) -> Result<Vec<T>, sqlx::Error> {
    let sql = format!(
        "SELECT * FROM {} WHERE {} = ? ORDER BY id LIMIT ? OFFSET ?",
        T::TABLE,
        T::PARENT_COLUMN
    );
    sqlx::query_as::<Sqlite, T>(&sql)
        .bind(parent_id)
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&mut *conn)
        .await
}

/// Every child of `parent_id`, unpaginated. Backs the nested detail views.
pub async fn children<T: Child>(
    conn: &mut SqliteConnection,
    parent_id: i64,
) -> Result<Vec<T>, sqlx::Error> {
    let sql = format!(
        "SELECT * FROM {} WHERE {} = ? ORDER BY id",
        T::TABLE,
        T::PARENT_COLUMN
    );
    sqlx::query_as::<Sqlite, T>(&sql)
        .bind(parent_id)
        .fetch_all(&mut *conn)
        .await
}

pub async fn create<T: Record>(
    conn: &mut SqliteConnection,
    fields: &T::Fields,
) -> Result<T, sqlx::Error> {
    let values = fields.values();
    let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();

    let mut query_builder: QueryBuilder<'_, Sqlite> =
        QueryBuilder::new(format!("INSERT INTO {} (", T::TABLE));
    query_builder.push(columns.join(", "));
    query_builder.push(", created_at) VALUES (");
    for (_, value) in values {
        push_value(&mut query_builder, value);
        query_builder.push(", ");
    }
    query_builder.push_bind(Utc::now());
    query_builder.push(") RETURNING *");

    query_builder.build_query_as::<T>().fetch_one(&mut *conn).await
}

/// Full replace: every base field is overwritten and `updated_at` is stamped.
/// Returns `None` without touching storage when the row does not exist.
pub async fn update<T: Record>(
    conn: &mut SqliteConnection,
    id: i64,
    fields: &T::Fields,
) -> Result<Option<T>, sqlx::Error> {
    let mut query_builder: QueryBuilder<'_, Sqlite> =
        QueryBuilder::new(format!("UPDATE {} SET ", T::TABLE));
    for (column, value) in fields.values() {
        query_builder.push(column);
        query_builder.push(" = ");
        push_value(&mut query_builder, value);
        query_builder.push(", ");
    }
    query_builder.push("updated_at = ");
    query_builder.push_bind(Utc::now());
    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    query_builder
        .build_query_as::<T>()
        .fetch_optional(&mut *conn)
        .await
}

/// Deletes the row and returns it as it was. Dependent rows go with it through
/// the `ON DELETE CASCADE` foreign keys, within the same statement.
pub async fn delete<T: Record>(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<T>, sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE id = ? RETURNING *", T::TABLE);
    sqlx::query_as::<Sqlite, T>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}
