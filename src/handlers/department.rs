use super::crud;
use crate::errors::AppError;
use crate::models::department::{Department, DepartmentWithRoles};
use crate::models::role::Role;
use crate::repository;
use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/departments", "/departments/"])
            .route(web::get().to(crud::list::<Department>))
            .route(web::post().to(crud::create::<Department>)),
    )
    .service(
        web::resource("/departments/{department_id}")
            .route(web::get().to(get_department))
            .route(web::put().to(crud::update::<Department>))
            .route(web::delete().to(crud::delete::<Department>)),
    )
    .service(
        web::resource([
            "/departments/{department_id}/roles",
            "/departments/{department_id}/roles/",
        ])
        .route(web::get().to(crud::list_children::<Role>)),
    );
}

pub async fn get_department(
    pool: web::Data<SqlitePool>,
    department_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let mut conn = pool.acquire().await?;

    let department = repository::get::<Department>(&mut conn, department_id.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found("Department"))?;
    let roles = repository::children::<Role>(&mut conn, department.id).await?;

    Ok(HttpResponse::Ok().json(DepartmentWithRoles { department, roles }))
}
