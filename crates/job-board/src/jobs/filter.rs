//! Availability filtering for job postings.
//!
//! A posting passes when every day in its schedule is a day the trainee marked as free. Postings
//! are never modified; the result is an order-preserving selection of clones.

use std::collections::{BTreeMap, BTreeSet};

use super::availability::{Availability, WorkDay};
use super::domain::{JobId, JobPosting};

/// Malformed availability maps or schedule vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("availability is missing an entry for {day}")]
    MissingDay { day: WorkDay },
    #[error("'{key}' is not a weekday between monday and friday")]
    UnknownDay { key: String },
    #[error("job {job_id} lists '{value}' in its schedule, expected Monday through Friday")]
    UnknownScheduleDay { job_id: JobId, value: String },
}

/// Error raised by the availability filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Select the postings whose schedule is fully covered by `availability`.
pub fn filter_jobs(
    jobs: &[JobPosting],
    availability: &Availability,
) -> Result<Vec<JobPosting>, FilterError> {
    let available = availability.available_labels();

    // Vocabulary is checked for every posting up front so a bad entry is reported even when the
    // posting would have been rejected by the length check.
    let required = jobs
        .iter()
        .map(required_days)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(jobs
        .iter()
        .zip(required)
        .filter(|(_, required)| covers(&available, required))
        .map(|(job, _)| job.clone())
        .collect())
}

/// Same as [`filter_jobs`] but starting from a raw `day -> flag` map.
pub fn filter_jobs_by_map(
    jobs: &[JobPosting],
    availability: &BTreeMap<String, bool>,
) -> Result<Vec<JobPosting>, FilterError> {
    let availability = Availability::from_map(availability)?;
    filter_jobs(jobs, &availability)
}

/// Distinct days a posting requires. Duplicate schedule entries collapse here, so the length
/// check in [`covers`] compares like with like.
fn required_days(job: &JobPosting) -> Result<BTreeSet<&'static str>, InvalidInput> {
    job.schedule
        .iter()
        .map(|entry| {
            WorkDay::from_label(entry)
                .map(WorkDay::label)
                .ok_or_else(|| InvalidInput::UnknownScheduleDay {
                    job_id: job.id.clone(),
                    value: entry.clone(),
                })
        })
        .collect()
}

fn covers(available: &BTreeSet<&str>, required: &BTreeSet<&str>) -> bool {
    if required.len() > available.len() {
        return false;
    }
    covers_exhaustive(available, required)
}

fn covers_exhaustive(available: &BTreeSet<&str>, required: &BTreeSet<&str>) -> bool {
    required.iter().all(|day| available.contains(day))
}
