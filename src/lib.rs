pub(crate) mod controllers;
pub(crate) mod core;
pub(crate) mod routes;
pub(crate) mod types;
pub(crate) mod utils;

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::error::ConfigError as Error;
use crate::core::store::postgres::PgStore;
use crate::core::{config::Args, state::AppState};
use crate::utils::role::AdminEmail;
use crate::utils::token::TokenCodec;

pub async fn run() -> Result<(), Error> {
    let config = Args::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = PgStore::connect(&config.database_url, config.max_connections).await?;

    store.migrate().await?;

    let state = AppState::new(
        Arc::new(store),
        TokenCodec::new(&config.jwt_secret),
        Arc::new(AdminEmail::new(config.admin_email.clone())),
        config.token_ttl()?,
    );

    let app = routes::router::routes(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(Error::IO)?;

    tracing::info!("Server is running on port {}", config.port);

    axum::serve(listener, app).await.map_err(Error::IO)?;

    Ok(())
}
