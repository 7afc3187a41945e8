use super::crud;
use crate::models::function::Function;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/functions", "/functions/"])
            .route(web::get().to(crud::list::<Function>))
            .route(web::post().to(crud::create::<Function>)),
    )
    .service(
        web::resource("/functions/{function_id}")
            .route(web::get().to(crud::get::<Function>))
            .route(web::put().to(crud::update::<Function>))
            .route(web::delete().to(crud::delete::<Function>)),
    );
}
