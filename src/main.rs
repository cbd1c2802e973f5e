use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod domain;
mod metrics;
mod store;

use config::AppConfig;
use domain::order::OrderService;
use store::InMemoryOrderStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging, overridable with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,donut_queue=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        premium_threshold = config.queue.premium_threshold,
        batch_capacity = config.queue.batch_capacity,
        delivery_time_unit = config.queue.delivery_time_unit,
        min_customer_id = config.intake.min_customer_id,
        max_customer_id = config.intake.max_customer_id,
        "Loaded configuration"
    );

    let metrics = Arc::new(metrics::Metrics::new()?);
    tracing::info!("📊 Metrics registry created with {} metrics", metrics.registry().gather().len());

    let service = web::Data::new(OrderService::new(
        Arc::new(InMemoryOrderStore::new()),
        config.queue,
        config.intake,
        metrics.clone(),
    ));
    let metrics = web::Data::new(metrics);

    let bind = (config.server.host.clone(), config.server.port);
    tracing::info!("🚀 Starting order queue service on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(metrics.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
