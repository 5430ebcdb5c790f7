use chrono::NaiveDate;
use job_board::jobs::{
    Availability, JobFeed, JobId, JobPosting, JobRepository, RepositoryError, Trainee,
    TraineeDirectory, UserId,
};
use job_board::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryJobRepository {
    postings: Arc<Mutex<Vec<JobPosting>>>,
}

impl InMemoryJobRepository {
    pub(crate) fn with_postings(postings: Vec<JobPosting>) -> Self {
        Self {
            postings: Arc::new(Mutex::new(postings)),
        }
    }

    /// Seed from a CSV export when one is configured, otherwise from the built-in sample set.
    pub(crate) fn load(feed_csv: Option<&Path>) -> Result<Self, AppError> {
        let postings = match feed_csv {
            Some(path) => JobFeed::from_path(path)?,
            None => sample_postings(),
        };
        Ok(Self::with_postings(postings))
    }
}

impl JobRepository for InMemoryJobRepository {
    fn fetch_all(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        let guard = self
            .postings
            .lock()
            .map_err(|_| RepositoryError::Unavailable("posting store poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn record_interest(&self, job: &JobId, user: &UserId) -> Result<(), RepositoryError> {
        let mut guard = self
            .postings
            .lock()
            .map_err(|_| RepositoryError::Unavailable("posting store poisoned".to_string()))?;
        let posting = guard
            .iter_mut()
            .find(|posting| &posting.id == job)
            .ok_or(RepositoryError::NotFound)?;
        posting.users.insert(user.clone());
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryTraineeDirectory {
    trainees: Arc<HashMap<UserId, Trainee>>,
}

impl InMemoryTraineeDirectory {
    pub(crate) fn with_trainees(trainees: impl IntoIterator<Item = Trainee>) -> Self {
        Self {
            trainees: Arc::new(
                trainees
                    .into_iter()
                    .map(|trainee| (trainee.id.clone(), trainee))
                    .collect(),
            ),
        }
    }
}

impl TraineeDirectory for InMemoryTraineeDirectory {
    fn fetch(&self, id: &UserId) -> Result<Option<Trainee>, RepositoryError> {
        Ok(self.trainees.get(id).cloned())
    }
}

pub(crate) fn sample_trainees() -> Vec<Trainee> {
    vec![
        Trainee {
            id: UserId("usr-avery".to_string()),
            name: "Avery Lee".to_string(),
            graduated: true,
        },
        Trainee {
            id: UserId("usr-jules".to_string()),
            name: "Jules Moreno".to_string(),
            graduated: false,
        },
    ]
}

pub(crate) fn sample_postings() -> Vec<JobPosting> {
    fn posting(
        id: &str,
        name: &str,
        company: &str,
        wage: &str,
        schedule: &[&str],
        posted_on: (i32, u32, u32),
    ) -> JobPosting {
        JobPosting {
            id: JobId(id.to_string()),
            name: name.to_string(),
            company: company.to_string(),
            address: Some("Mission District, San Francisco".to_string()),
            wage: Some(wage.to_string()),
            description: None,
            posted_on: NaiveDate::from_ymd_opt(posted_on.0, posted_on.1, posted_on.2),
            schedule: schedule.iter().map(|day| day.to_string()).collect(),
            users: BTreeSet::new(),
        }
    }

    vec![
        posting(
            "rec-prep-cook",
            "Prep Cook",
            "Mission Bistro",
            "$18/hr",
            &["Wednesday", "Thursday"],
            (2024, 3, 4),
        ),
        posting(
            "rec-dishwasher",
            "Dishwasher",
            "Mission Bistro",
            "$17/hr",
            &["Monday"],
            (2024, 3, 5),
        ),
        posting(
            "rec-barista",
            "Barista",
            "Bean There",
            "$19/hr",
            &["Tuesday", "Thursday", "Friday"],
            (2024, 3, 6),
        ),
        posting(
            "rec-catering",
            "Catering Assistant",
            "Valencia Events",
            "$20/hr",
            &[],
            (2024, 3, 7),
        ),
    ]
}

pub(crate) fn parse_days(raw: &str) -> Result<Availability, String> {
    Availability::parse_day_list(raw).map_err(|err| err.to_string())
}
