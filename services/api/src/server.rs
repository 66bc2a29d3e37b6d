use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::app_router;
use axum_prometheus::PrometheusMetricLayer;
use saeum_academy::catalog::Catalog;
use saeum_academy::config::AppConfig;
use saeum_academy::error::AppError;
use saeum_academy::telemetry;
use std::sync::atomic::Ordering;
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

    let catalog = Catalog::builtin();
    catalog.validate()?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(Some(prometheus_handle));
    let readiness_flag = app_state.readiness.clone();

    let app = app_router(catalog, app_state, &config.server.base_path).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        base_path = %config.server.base_path,
        boards = catalog.boards().len(),
        teachers = catalog.all_teachers().len(),
        "academy site service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
