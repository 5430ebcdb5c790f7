use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::availability::{Availability, WorkDay};
use super::domain::{JobId, UserId};
use super::filter::FilterError;
use super::repository::{JobRepository, RepositoryError, TraineeDirectory};
use super::service::{JobBoardError, JobBoardService};

/// Query string for the listing endpoint. Day flags are all-or-nothing.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub user_id: String,
    pub monday: Option<bool>,
    pub tuesday: Option<bool>,
    pub wednesday: Option<bool>,
    pub thursday: Option<bool>,
    pub friday: Option<bool>,
}

impl ListingQuery {
    fn availability(&self) -> Result<Option<Availability>, FilterError> {
        let flags: BTreeMap<String, bool> = [
            (WorkDay::Monday, self.monday),
            (WorkDay::Tuesday, self.tuesday),
            (WorkDay::Wednesday, self.wednesday),
            (WorkDay::Thursday, self.thursday),
            (WorkDay::Friday, self.friday),
        ]
        .into_iter()
        .filter_map(|(day, flag)| flag.map(|flag| (day.key().to_string(), flag)))
        .collect();

        if flags.is_empty() {
            return Ok(None);
        }
        Ok(Some(Availability::from_map(&flags)?))
    }
}

#[derive(Debug, Deserialize)]
pub struct InterestRequest {
    pub user_id: String,
}

/// Router builder exposing the listing and interest endpoints.
pub fn jobs_router<R, T>(service: Arc<JobBoardService<R, T>>) -> Router
where
    R: JobRepository + 'static,
    T: TraineeDirectory + 'static,
{
    Router::new()
        .route("/api/v1/jobs", get(listing_handler::<R, T>))
        .route(
            "/api/v1/jobs/:job_id/interest",
            post(interest_handler::<R, T>),
        )
        .with_state(service)
}

pub(crate) async fn listing_handler<R, T>(
    State(service): State<Arc<JobBoardService<R, T>>>,
    Query(query): Query<ListingQuery>,
) -> Response
where
    R: JobRepository + 'static,
    T: TraineeDirectory + 'static,
{
    let availability = match query.availability() {
        Ok(availability) => availability,
        Err(err) => return error_response(JobBoardError::Filter(err)),
    };

    let user_id = UserId(query.user_id);
    match service.listing(&user_id, availability.as_ref()) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn interest_handler<R, T>(
    State(service): State<Arc<JobBoardService<R, T>>>,
    Path(job_id): Path<String>,
    axum::Json(request): axum::Json<InterestRequest>,
) -> Response
where
    R: JobRepository + 'static,
    T: TraineeDirectory + 'static,
{
    let job_id = JobId(job_id);
    let user_id = UserId(request.user_id);
    match service.register_interest(&job_id, &user_id) {
        Ok(()) => {
            let payload = json!({
                "job_id": job_id.0,
                "user_id": user_id.0,
                "submitted": true,
            });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: JobBoardError) -> Response {
    let status = match &err {
        JobBoardError::Filter(_) => StatusCode::UNPROCESSABLE_ENTITY,
        JobBoardError::UnknownTrainee(_) | JobBoardError::Repository(RepositoryError::NotFound) => {
            StatusCode::NOT_FOUND
        }
        JobBoardError::Locked(_) => StatusCode::FORBIDDEN,
        JobBoardError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
