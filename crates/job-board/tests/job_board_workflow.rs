//! End-to-end screen flow: load the feed, refresh, adjust availability, filter, register interest.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use job_board::jobs::{
    JobBoardService, JobFeed, JobId, JobPosting, JobRepository, JobsScreen, JobsStatus,
    RepositoryError, Trainee, TraineeDirectory, UserId, WorkDay,
};

const FEED: &str = "Id,Name,Company,Address,Wage,Schedule,Description,Posted On,Users\n\
rec1,Prep Cook,Mission Bistro,12 Valencia St,$18/hr,\"Wednesday, Thursday\",,2024-03-04,\n\
rec2,Dishwasher,Mission Bistro,12 Valencia St,$17/hr,Monday,,2024-03-05,\n\
rec3,Line Cook,Mission Bistro,12 Valencia St,$21/hr,\"Monday;Wednesday;Friday\",,2024-03-06,\n";

#[derive(Default)]
struct FeedRepository {
    postings: Mutex<Vec<JobPosting>>,
}

impl JobRepository for FeedRepository {
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
        Ok(())
    }
}

#[derive(Default)]
struct Directory {
    trainees: HashMap<UserId, Trainee>,
}

impl TraineeDirectory for Directory {
    fn fetch(&self, id: &UserId) -> Result<Option<Trainee>, RepositoryError> {
        Ok(self.trainees.get(id).cloned())
    }
}

fn trainee() -> Trainee {
    Trainee {
        id: UserId("usr-grad".to_string()),
        name: "Kiara Patel".to_string(),
        graduated: true,
    }
}

#[test]
fn trainee_narrows_postings_and_applies() {
    let postings = JobFeed::from_reader(FEED.as_bytes()).expect("feed parses");
    let repository = Arc::new(FeedRepository {
        postings: Mutex::new(postings),
    });
    let directory = Arc::new(Directory {
        trainees: HashMap::from([(trainee().id, trainee())]),
    });
    let service = JobBoardService::new(repository, directory);
    let trainee = trainee();

    let mut screen = JobsScreen::default();
    screen.refresh(&service, &trainee).expect("refresh");
    assert_eq!(screen.jobs().len(), 3);
    assert_eq!(screen.status(), JobsStatus::Normal);

    screen.apply_filter(&service).expect("filter with defaults");
    let ids: Vec<_> = screen.jobs().iter().map(|job| job.id.0.as_str()).collect();
    assert_eq!(ids, vec!["rec1"]);

    screen.open_overlay();
    screen.toggle(WorkDay::Monday);
    screen.toggle(WorkDay::Friday);
    screen.apply_filter(&service).expect("filter with full week");
    let ids: Vec<_> = screen.jobs().iter().map(|job| job.id.0.as_str()).collect();
    assert_eq!(ids, vec!["rec1", "rec2", "rec3"]);

    service
        .register_interest(&JobId("rec3".to_string()), &trainee.id)
        .expect("interest recorded");
    screen.apply_filter(&service).expect("filter again");
    let submitted: Vec<_> = screen
        .cards(&trainee)
        .into_iter()
        .filter(|card| card.submitted)
        .map(|card| card.id.0)
        .collect();
    assert_eq!(submitted, vec!["rec3".to_string()]);
}
