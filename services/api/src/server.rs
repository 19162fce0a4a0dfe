use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;
use workify::config::AppConfig;
use workify::error::AppError;
use workify::listings::JobListingService;
use workify::telemetry;

use crate::cli::ServeArgs;
use crate::infra::{seed_listings, AppState, InMemoryJobListingRepository};
use crate::routes::with_job_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryJobListingRepository::default());
    if config.seed_demo_data {
        let seeded = seed_listings(&repository)
            .await
            .map_err(workify::listings::ListingServiceError::from)?;
        info!(seeded, "loaded sample job listings");
    }

    let service = Arc::new(JobListingService::new(repository));

    let app = with_job_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "workify job board service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
