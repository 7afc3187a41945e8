//! Handlers shared by every entity; routes instantiate them per record type.

use crate::errors::AppError;
use crate::models::Pagination;
use crate::repository::{self, Child, Record};
use actix_web::{web, HttpResponse};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use validator::Validate;

pub async fn list<T>(
    pool: web::Data<SqlitePool>,
    page: web::Query<Pagination>,
) -> Result<HttpResponse, AppError>
where
    T: Record + Serialize,
{
    page.validate()?;
    let mut conn = pool.acquire().await?;
    let records = repository::list::<T>(&mut conn, page.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn list_children<T>(
    pool: web::Data<SqlitePool>,
    parent_id: web::Path<i64>,
    page: web::Query<Pagination>,
) -> Result<HttpResponse, AppError>
where
    T: Child + Serialize,
{
    page.validate()?;
    let mut conn = pool.acquire().await?;
    let records =
        repository::list_by_parent::<T>(&mut conn, parent_id.into_inner(), page.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn get<T>(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError>
where
    T: Record + Serialize,
{
    let mut conn = pool.acquire().await?;
    let record = repository::get::<T>(&mut conn, id.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found(T::NAME))?;
    Ok(HttpResponse::Ok().json(record))
}

pub async fn create<T>(
    pool: web::Data<SqlitePool>,
    fields: web::Json<T::Fields>,
) -> Result<HttpResponse, AppError>
where
    T: Record + Serialize,
    T::Fields: DeserializeOwned,
{
    let mut conn = pool.acquire().await?;
    let record = repository::create::<T>(&mut conn, &fields.into_inner()).await?;
    debug!("Created {} in {}", T::NAME, T::TABLE);
    Ok(HttpResponse::Ok().json(record))
}

pub async fn update<T>(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
    fields: web::Json<T::Fields>,
) -> Result<HttpResponse, AppError>
where
    T: Record + Serialize,
    T::Fields: DeserializeOwned,
{
    let mut conn = pool.acquire().await?;
    let record = repository::update::<T>(&mut conn, id.into_inner(), &fields.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found(T::NAME))?;
    Ok(HttpResponse::Ok().json(record))
}

pub async fn delete<T>(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError>
where
    T: Record + Serialize,
{
    let id = id.into_inner();
    let mut conn = pool.acquire().await?;
    let record = repository::delete::<T>(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(T::NAME))?;
    info!("Deleted {} {}", T::NAME, id);
    Ok(HttpResponse::Ok().json(record))
}
