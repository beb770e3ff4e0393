mod model;
mod server;

use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    router,
    scheduler::subscription_sweep,
    service::{auth::JwtManager, billing::PaymentClient, mailer::MailerService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let jwt = Arc::new(JwtManager::new(
        &config.jwt_secret,
        config.jwt_access_ttl_secs,
    ));
    let mailer = MailerService::new(
        http_client.clone(),
        config.mail_api_url.clone(),
        config.mail_api_key.clone(),
        config.mail_from.clone(),
    );
    let payment = PaymentClient::new(
        http_client,
        config.payment_api_url.clone(),
        config.payment_api_key.clone(),
    );

    tracing::info!("Starting server");

    // Webhooks normally keep the subscriber mirror current; the sweep
    // catches farms whose paid period lapsed without an event.
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = subscription_sweep::start_scheduler(scheduler_db).await {
            tracing::error!("Subscription scheduler error: {}", e);
        }
    });

    let cors = CorsLayer::new()
        .allow_origin(config.app_url.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::new(
        db,
        jwt,
        config.refresh_ttl_days,
        mailer,
        payment,
        config.payment_webhook_secret.clone(),
    );

    let app = router::router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Error installing shutdown handler: {}", e);
    }
}
