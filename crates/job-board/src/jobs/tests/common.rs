use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use crate::jobs::domain::{JobId, JobPosting, Trainee, UserId};
use crate::jobs::repository::{JobRepository, RepositoryError, TraineeDirectory};
use crate::jobs::{jobs_router, JobBoardService};

pub(super) fn posting(id: &str, schedule: &[&str]) -> JobPosting {
    JobPosting {
        id: JobId(id.to_string()),
        name: format!("Posting {id}"),
        company: "Mission Bistro".to_string(),
        address: Some("12 Valencia St".to_string()),
        wage: Some("$18/hr".to_string()),
        description: None,
        posted_on: None,
        schedule: schedule.iter().map(|day| day.to_string()).collect(),
        users: BTreeSet::new(),
    }
}

pub(super) fn postings() -> Vec<JobPosting> {
    vec![
        posting("rec1", &["Wednesday", "Thursday"]),
        posting("rec2", &["Monday"]),
        posting("rec3", &[]),
        posting("rec4", &["Monday", "Tuesday", "Wednesday"]),
    ]
}

pub(super) fn graduate() -> Trainee {
    Trainee {
        id: UserId("usr-grad".to_string()),
        name: "Avery Lee".to_string(),
        graduated: true,
    }
}

pub(super) fn enrolled() -> Trainee {
    Trainee {
        id: UserId("usr-new".to_string()),
        name: "Jules Moreno".to_string(),
        graduated: false,
    }
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    postings: Mutex<Vec<JobPosting>>,
    interest: Mutex<Vec<(JobId, UserId)>>,
}

impl MemoryRepository {
    pub(super) fn with_postings(postings: Vec<JobPosting>) -> Self {
        Self {
            postings: Mutex::new(postings),
            interest: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn interest(&self) -> Vec<(JobId, UserId)> {
        self.interest.lock().expect("interest mutex poisoned").clone()
    }

    pub(super) fn replace(&self, postings: Vec<JobPosting>) {
        *self.postings.lock().expect("postings mutex poisoned") = postings;
    }
}

impl JobRepository for MemoryRepository {
    fn fetch_all(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        Ok(self.postings.lock().expect("postings mutex poisoned").clone())
    }

    fn record_interest(&self, job: &JobId, user: &UserId) -> Result<(), RepositoryError> {
        let mut postings = self.postings.lock().expect("postings mutex poisoned");
        let posting = postings
            .iter_mut()
            .find(|posting| &posting.id == job)
            .ok_or(RepositoryError::NotFound)?;
        posting.users.insert(user.clone());
        self.interest
            .lock()
            .expect("interest mutex poisoned")
            .push((job.clone(), user.clone()));
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl JobRepository for UnavailableRepository {
    fn fetch_all(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("feed offline".to_string()))
    }

    fn record_interest(&self, _job: &JobId, _user: &UserId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("feed offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryTrainees {
    trainees: HashMap<UserId, Trainee>,
}

impl MemoryTrainees {
    pub(super) fn with(trainees: impl IntoIterator<Item = Trainee>) -> Self {
        Self {
            trainees: trainees
                .into_iter()
                .map(|trainee| (trainee.id.clone(), trainee))
                .collect(),
        }
    }
}

impl TraineeDirectory for MemoryTrainees {
    fn fetch(&self, id: &UserId) -> Result<Option<Trainee>, RepositoryError> {
        Ok(self.trainees.get(id).cloned())
    }
}

pub(super) fn build_service() -> (
    Arc<JobBoardService<MemoryRepository, MemoryTrainees>>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::with_postings(postings()));
    let trainees = Arc::new(MemoryTrainees::with([graduate(), enrolled()]));
    let service = Arc::new(JobBoardService::new(repository.clone(), trainees));
    (service, repository)
}

pub(super) fn router_with_service(
    service: Arc<JobBoardService<MemoryRepository, MemoryTrainees>>,
) -> axum::Router {
    jobs_router(service)
}
