use serde::Serialize;

use super::domain::{JobCard, JobId, JobPosting, Trainee, UserId};
use super::status::JobsStatus;

/// Storage abstraction over the external job feed and interest sink.
pub trait JobRepository: Send + Sync {
    /// Every posting currently published, unfiltered.
    fn fetch_all(&self) -> Result<Vec<JobPosting>, RepositoryError>;
    /// Record that `user` wants to apply for `job`.
    fn record_interest(&self, job: &JobId, user: &UserId) -> Result<(), RepositoryError>;
}

/// Lookup for trainee profiles, used to decide whether postings are unlocked.
pub trait TraineeDirectory: Send + Sync {
    fn fetch(&self, id: &UserId) -> Result<Option<Trainee>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Listing returned to the jobs screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    pub status: JobsStatus,
    pub jobs: Vec<JobCard>,
}
