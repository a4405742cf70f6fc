use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredSource, InMemoryActionLog};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use starsyn::analytics::{FilePreferenceStore, ProgramPreferences};
use starsyn::candidates::CandidateDashboardService;
use starsyn::config::AppConfig;
use starsyn::error::AppError;
use starsyn::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.candidates.take() {
        config.data.candidates_path = Some(path);
    }
    if let Some(path) = args.preferences.take() {
        config.data.preferences_path = path;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = ConfiguredSource::from_path(config.data.candidates_path.clone());
    info!(source = %source.describe(), "candidate source configured");
    let dashboard_service = Arc::new(CandidateDashboardService::new(
        Arc::new(source),
        Arc::new(InMemoryActionLog::default()),
    ));

    let store = FilePreferenceStore::new(config.data.preferences_path.clone());
    info!(path = %store.path().display(), "preference store configured");
    let preferences = Arc::new(ProgramPreferences::new(Arc::new(store)));

    let app = with_dashboard_routes(dashboard_service, preferences)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "candidate dashboard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
