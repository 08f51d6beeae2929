use crate::cli::ServeArgs;
use crate::infra::{load_content, AppState};
use crate::routes::with_quiz_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use growth_quiz::config::AppConfig;
use growth_quiz::error::AppError;
use growth_quiz::quiz::{CsvSubmissionLog, QuizService};
use growth_quiz::telemetry;
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

    let content = Arc::new(load_content(&config.quiz)?);
    let log = Arc::new(CsvSubmissionLog::new(config.quiz.submission_log.clone()));
    let quiz_service = Arc::new(QuizService::new(content, log, config.quiz.tie_policy));

    let app = with_quiz_routes(quiz_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        submission_log = %config.quiz.submission_log.display(),
        tie_policy = ?config.quiz.tie_policy,
        "growth quiz service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
