use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use flowforge_backend::config::Config;
use flowforge_backend::{configure, db};
use log::{error, info};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    // Initialize the database pool
    let pool = db::create_pool(&config.database).await.map_err(|err| {
        error!("Failed to connect to the database: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;

    db::run_migrations(&pool).await.map_err(|err| {
        error!("Failed to apply migrations: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;

    let (host, port) = config.server.bind_address();
    info!("Starting server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}
