pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::configure;
