//! State backing the jobs screen: availability overlay, loading flag, and the displayed list.
//!
//! The availability value is owned here and replaced on every toggle; the filter only ever sees
//! an immutable copy.

use super::availability::{Availability, WorkDay};
use super::domain::{JobCard, JobPosting, Trainee};
use super::repository::{JobRepository, TraineeDirectory};
use super::service::{JobBoardError, JobBoardService};
use super::status::JobsStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobsScreen {
    availability: Availability,
    overlay_visible: bool,
    refreshing: bool,
    jobs: Vec<JobPosting>,
    status: JobsStatus,
}

impl Default for JobsScreen {
    fn default() -> Self {
        Self::new(Availability::default())
    }
}

impl JobsScreen {
    /// Fresh screen: overlay open and a load pending.
    pub fn new(availability: Availability) -> Self {
        Self {
            availability,
            overlay_visible: true,
            refreshing: true,
            jobs: Vec::new(),
            status: JobsStatus::Normal,
        }
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    /// Status from the last [`refresh`](Self::refresh); [`apply_filter`](Self::apply_filter) does
    /// not update it, even when the filtered list is empty.
    pub fn status(&self) -> JobsStatus {
        self.status
    }

    pub fn toggle(&mut self, day: WorkDay) {
        self.availability = self.availability.toggled(day);
    }

    pub fn open_overlay(&mut self) {
        self.overlay_visible = true;
    }

    /// Reload the unfiltered list and recompute the status from it.
    ///
    /// On failure the previous list and status stay on screen.
    pub fn refresh<R, T>(
        &mut self,
        service: &JobBoardService<R, T>,
        trainee: &Trainee,
    ) -> Result<(), JobBoardError>
    where
        R: JobRepository + 'static,
        T: TraineeDirectory + 'static,
    {
        self.refreshing = true;
        let fetched = service.fetch_jobs();
        self.refreshing = false;

        let jobs = fetched?;
        self.status = JobsStatus::derive(trainee.graduated, &jobs);
        self.jobs = jobs;
        Ok(())
    }

    /// Fetch fresh postings, keep the ones matching the current availability, and close the
    /// overlay. The status computed by the last refresh is kept as is.
    pub fn apply_filter<R, T>(&mut self, service: &JobBoardService<R, T>) -> Result<(), JobBoardError>
    where
        R: JobRepository + 'static,
        T: TraineeDirectory + 'static,
    {
        let jobs = service.filtered(&self.availability)?;
        self.jobs = jobs;
        self.overlay_visible = false;
        Ok(())
    }

    pub fn cards(&self, trainee: &Trainee) -> Vec<JobCard> {
        self.jobs
            .iter()
            .map(|posting| JobCard::for_trainee(posting, &trainee.id))
            .collect()
    }
}
