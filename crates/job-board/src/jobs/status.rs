use serde::{Deserialize, Serialize};

use super::domain::JobPosting;

/// Presentation status for the jobs screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobsStatus {
    /// The trainee has not graduated yet and cannot browse postings.
    Locked,
    /// Eligible, but there is nothing to show.
    Empty,
    #[default]
    Normal,
}

impl JobsStatus {
    /// `Locked` wins over everything; otherwise the status reflects whether `jobs` is empty.
    pub fn derive(eligible: bool, jobs: &[JobPosting]) -> Self {
        if !eligible {
            JobsStatus::Locked
        } else if jobs.is_empty() {
            JobsStatus::Empty
        } else {
            JobsStatus::Normal
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            JobsStatus::Locked => "locked",
            JobsStatus::Empty => "empty",
            JobsStatus::Normal => "normal",
        }
    }
}
