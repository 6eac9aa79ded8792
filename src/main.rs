use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use comment_service::auth::TokenValidator;
use comment_service::routes;
use comment_service::services::CommentService;
use comment_service::store::{HexIdValidator, MemoryCommentStore};
use comment_service::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,comment_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting comment-service");

    let config = Config::from_env()
        .map_err(anyhow::Error::msg)
        .context("Failed to load configuration")?;

    let store = Arc::new(MemoryCommentStore::new());
    let service = web::Data::new(CommentService::new(
        store,
        Arc::new(HexIdValidator::default()),
    ));
    let token_validator = web::Data::new(TokenValidator::new(&config.auth.jwt_secret));

    tracing::info!(
        "HTTP server listening on {}:{}",
        config.app.host,
        config.app.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(service.clone())
            .app_data(token_validator.clone())
            .configure(routes::configure)
    })
    .bind((config.app.host.as_str(), config.app.port))?
    .run()
    .await
    .context("HTTP server error")
}
