//! Job postings for program graduates, narrowed by the days a trainee is free to work.

pub mod availability;
pub mod domain;
pub mod feed;
pub mod filter;
pub mod repository;
pub mod router;
pub mod screen;
pub mod service;
pub mod status;

#[cfg(test)]
mod tests;

pub use availability::{Availability, WorkDay};
pub use domain::{JobCard, JobId, JobPosting, Trainee, UserId};
pub use feed::{FeedError, JobFeed};
pub use filter::{filter_jobs, filter_jobs_by_map, FilterError, InvalidInput};
pub use repository::{JobListing, JobRepository, RepositoryError, TraineeDirectory};
pub use router::jobs_router;
pub use screen::JobsScreen;
pub use service::{JobBoardError, JobBoardService};
pub use status::JobsStatus;
