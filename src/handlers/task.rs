use super::crud;
use crate::models::task::Task;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["", "/"])
            .route(web::get().to(crud::list::<Task>))
            .route(web::post().to(crud::create::<Task>)),
    )
    .service(
        web::resource("/{task_id}")
            .route(web::get().to(crud::get::<Task>))
            .route(web::put().to(crud::update::<Task>))
            .route(web::delete().to(crud::delete::<Task>)),
    );
}
