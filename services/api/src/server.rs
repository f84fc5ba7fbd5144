use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_contact_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use contact_cleaner::config::AppConfig;
use contact_cleaner::error::AppError;
use contact_cleaner::storage::FilesystemObjectStore;
use contact_cleaner::telemetry;
use contact_cleaner::workflows::trigger::CleanupTrigger;
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
    if let Some(root) = args.storage_root.take() {
        config.storage.root = root;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = FilesystemObjectStore::new(config.storage.root.clone());
    let trigger = Arc::new(CleanupTrigger::new(
        store,
        config.storage.output_prefix.clone(),
    ));

    let app = with_contact_routes(trigger)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        storage_root = %config.storage.root.display(),
        "contact cleaner ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
