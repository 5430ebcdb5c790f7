use crate::cli::ServeArgs;
use crate::infra::{sample_trainees, AppState, InMemoryJobRepository, InMemoryTraineeDirectory};
use crate::routes::with_job_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_board::config::AppConfig;
use job_board::error::AppError;
use job_board::jobs::JobBoardService;
use job_board::telemetry;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryJobRepository::load(config.jobs.feed_csv.as_deref())?);
    let trainees = Arc::new(InMemoryTraineeDirectory::with_trainees(sample_trainees()));
    let service = Arc::new(JobBoardService::new(repository, trainees));

    let app = with_job_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        feed = ?config.jobs.feed_csv,
        "job board ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
