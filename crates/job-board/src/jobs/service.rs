use std::sync::Arc;

use tracing::{debug, info, warn};

use super::availability::Availability;
use super::domain::{JobCard, JobId, JobPosting, Trainee, UserId};
use super::filter::{filter_jobs, FilterError};
use super::repository::{JobListing, JobRepository, RepositoryError, TraineeDirectory};
use super::status::JobsStatus;

/// Service composing the job feed, the trainee directory, and the availability filter.
pub struct JobBoardService<R, T> {
    repository: Arc<R>,
    trainees: Arc<T>,
}

impl<R, T> JobBoardService<R, T>
where
    R: JobRepository + 'static,
    T: TraineeDirectory + 'static,
{
    pub fn new(repository: Arc<R>, trainees: Arc<T>) -> Self {
        Self {
            repository,
            trainees,
        }
    }

    pub fn trainee(&self, user_id: &UserId) -> Result<Trainee, JobBoardError> {
        self.trainees
            .fetch(user_id)?
            .ok_or_else(|| JobBoardError::UnknownTrainee(user_id.clone()))
    }

    /// Fetch the full, unfiltered list from the feed.
    pub fn fetch_jobs(&self) -> Result<Vec<JobPosting>, JobBoardError> {
        let jobs = self.repository.fetch_all()?;
        debug!(count = jobs.len(), "fetched job postings");
        Ok(jobs)
    }

    /// Fetch fresh postings and keep the ones covered by `availability`.
    pub fn filtered(&self, availability: &Availability) -> Result<Vec<JobPosting>, JobBoardError> {
        let jobs = self.fetch_jobs()?;
        let matched = filter_jobs(&jobs, availability).map_err(|err| {
            warn!(error = %err, "rejected availability filter input");
            err
        })?;
        debug!(
            total = jobs.len(),
            matched = matched.len(),
            "filtered job postings by availability"
        );
        Ok(matched)
    }

    /// Listing for a trainee, optionally narrowed to the days they are free.
    ///
    /// Trainees that have not graduated get an empty `Locked` listing without touching the feed.
    pub fn listing(
        &self,
        user_id: &UserId,
        availability: Option<&Availability>,
    ) -> Result<JobListing, JobBoardError> {
        let trainee = self.trainee(user_id)?;
        if !trainee.graduated {
            return Ok(JobListing {
                status: JobsStatus::Locked,
                jobs: Vec::new(),
            });
        }

        let jobs = match availability {
            Some(availability) => self.filtered(availability)?,
            None => self.fetch_jobs()?,
        };
        let status = JobsStatus::derive(trainee.graduated, &jobs);
        let jobs = jobs
            .iter()
            .map(|posting| JobCard::for_trainee(posting, &trainee.id))
            .collect();

        Ok(JobListing { status, jobs })
    }

    /// Forward a trainee's interest in a posting to the update sink.
    pub fn register_interest(
        &self,
        job_id: &JobId,
        user_id: &UserId,
    ) -> Result<(), JobBoardError> {
        let trainee = self.trainee(user_id)?;
        if !trainee.graduated {
            return Err(JobBoardError::Locked(trainee.id));
        }

        self.repository.record_interest(job_id, &trainee.id)?;
        info!(job = %job_id, user = %trainee.id, "registered interest in job posting");
        Ok(())
    }
}

/// Error raised by the job board service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobBoardError {
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("trainee {0} not found")]
    UnknownTrainee(UserId),
    #[error("trainee {0} has not unlocked job postings yet")]
    Locked(UserId),
}
