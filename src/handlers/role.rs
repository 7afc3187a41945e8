use super::crud;
use crate::errors::AppError;
use crate::models::function::Function;
use crate::models::role::{Role, RoleWithFunctions};
use crate::repository;
use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/roles", "/roles/"])
            .route(web::get().to(crud::list::<Role>))
            .route(web::post().to(crud::create::<Role>)),
    )
    .service(
        web::resource("/roles/{role_id}")
            .route(web::get().to(get_role))
            .route(web::put().to(crud::update::<Role>))
            .route(web::delete().to(crud::delete::<Role>)),
    )
    .service(
        web::resource(["/roles/{role_id}/functions", "/roles/{role_id}/functions/"])
            .route(web::get().to(crud::list_children::<Function>)),
    );
}

pub async fn get_role(
    pool: web::Data<SqlitePool>,
    role_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let mut conn = pool.acquire().await?;

    let role = repository::get::<Role>(&mut conn, role_id.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found("Role"))?;
    let functions = repository::children::<Function>(&mut conn, role.id).await?;

    Ok(HttpResponse::Ok().json(RoleWithFunctions { role, functions }))
}
