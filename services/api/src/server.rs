use crate::cli::ServeArgs;
use crate::infra::{
    default_evaluation_config, AppState, InMemoryDecisionLog, InMemoryTrainRepository,
};
use crate::routes::with_induction_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use rail_induction::config::AppConfig;
use rail_induction::error::AppError;
use rail_induction::telemetry;
use rail_induction::workflows::induction::InductionService;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryTrainRepository::default());
    let decision_log = Arc::new(InMemoryDecisionLog::default());
    let induction_service = Arc::new(InductionService::new(
        repository,
        decision_log,
        default_evaluation_config(),
    ));

    let app = with_induction_routes(induction_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "fleet induction planner ready");

    axum::serve(listener, app).await?;
    Ok(())
}
