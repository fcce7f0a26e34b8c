//! An HTTP api around the cross-dock distribution planner.

use actix_web::{middleware::from_fn, web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod dto;
mod errors;
mod handlers;
mod import;
mod middleware;
mod service;
mod storage;
mod validation;

use crate::storage::PgStorage;

const BIND_ADDR: (&str, u16) = ("0.0.0.0", 8080);
const SHUTDOWN_GRACE_SECS: u64 = 5;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    let dsn = match std::env::var("PG_DSN") {
        Ok(dsn) if !dsn.trim().is_empty() => dsn,
        _ => {
            tracing::error!("PG_DSN environment variable is required");
            std::process::exit(1);
        }
    };

    let pool = match PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .connect(&dsn)
        .await
    {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(error = %err, "failed to connect to PostgreSQL");
            std::process::exit(1);
        }
    };
    tracing::info!("connected to PostgreSQL");

    let storage = web::Data::new(PgStorage::new(pool));

    tracing::info!("starting HTTP server on {}:{}", BIND_ADDR.0, BIND_ADDR.1);

    HttpServer::new(move || {
        App::new()
            .app_data(storage.clone())
            .wrap(from_fn(middleware::request_context))
            .service(handlers::upload)
            .service(handlers::optimize)
    })
    .bind(BIND_ADDR)?
    .shutdown_timeout(SHUTDOWN_GRACE_SECS)
    .run()
    .await
}
