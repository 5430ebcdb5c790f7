use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use job_board::jobs::{jobs_router, JobBoardService, JobRepository, TraineeDirectory};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_job_routes<R, T>(service: Arc<JobBoardService<R, T>>) -> axum::Router
where
    R: JobRepository + 'static,
    T: TraineeDirectory + 'static,
{
    jobs_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{
        sample_postings, sample_trainees, InMemoryJobRepository, InMemoryTraineeDirectory,
    };
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn service() -> Arc<JobBoardService<InMemoryJobRepository, InMemoryTraineeDirectory>> {
        Arc::new(JobBoardService::new(
            Arc::new(InMemoryJobRepository::with_postings(sample_postings())),
            Arc::new(InMemoryTraineeDirectory::with_trainees(sample_trainees())),
        ))
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn job_routes_are_mounted_next_to_health() {
        let router = with_job_routes(service());

        let response = router
            .clone()
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::get(
                    "/api/v1/jobs?user_id=usr-avery&monday=false&tuesday=false&wednesday=true&thursday=true&friday=false",
                )
                .body(Body::empty())
                .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        let ids: Vec<_> = body["jobs"]
            .as_array()
            .expect("jobs array")
            .iter()
            .filter_map(|card| card["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["rec-prep-cook", "rec-catering"]);
    }
}
