use crate::cli::ServeArgs;
use crate::infra::{build_catalog, AppState, InMemoryDraftRepository};
use crate::routes::with_benefit_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use toeslagen::benefits::EligibilityService;
use toeslagen::config::AppConfig;
use toeslagen::error::AppError;
use toeslagen::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(build_catalog(&config.rules)?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalog: catalog.clone(),
    };

    let repository = Arc::new(InMemoryDraftRepository::default());
    let service = Arc::new(EligibilityService::new(
        catalog.clone(),
        repository,
        config.rules.program_year,
    ));

    let app = with_benefit_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        program_year = %config.rules.program_year,
        years = ?catalog.years(),
        "toeslagen eligibility service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
