use flowforge_backend::config::DatabaseConfig;
use flowforge_backend::db;
use sqlx::SqlitePool;

pub async fn test_pool() -> SqlitePool {
    let pool = db::create_pool(&DatabaseConfig::in_memory())
        .await
        .expect("connect in-memory sqlite");
    db::run_migrations(&pool).await.expect("run migrations");
    pool
}
