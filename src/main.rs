use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use crate::{
    app::env::Envy,
    storage::{file_system_storage::FileSystemStorage, storage::FileStorage},
    uploads::repository::{PgUploadedFileRepository, UploadedFileRepository},
};

mod app;
mod storage;
mod uploads;

#[cfg(test)]
mod test_util;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn FileStorage>,
    pub uploaded_files: Arc<dyn UploadedFileRepository>,
    pub envy: Arc<Envy>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let pool = PgPoolOptions::new()
        .max_connections(50)
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!("connected to db");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let storage = FileSystemStorage::new(envy.media_root(), envy.media_url());
    tracing::info!(location = ?storage.location(), "storing uploads on disk");

    let port = envy.port();
    let state = AppState {
        storage: Arc::new(storage),
        uploaded_files: Arc::new(PgUploadedFileRepository::new(pool)),
        envy: Arc::new(envy),
    };

    let app = app::router::build(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, %app_env, "listening");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
