use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for trainees using the app.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Job posting as supplied by the external feed.
///
/// `schedule` holds capitalized weekday names exactly as the feed delivered them; the
/// availability filter is responsible for rejecting anything outside the Monday..Friday
/// vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub wage: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub posted_on: Option<NaiveDate>,
    pub schedule: Vec<String>,
    /// Trainees that have already registered interest in this posting.
    #[serde(default)]
    pub users: BTreeSet<UserId>,
}

impl JobPosting {
    pub fn has_interest_from(&self, user: &UserId) -> bool {
        self.users.contains(user)
    }
}

/// Trainee enrolled in the readiness program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainee {
    pub id: UserId,
    pub name: String,
    /// Only graduates may browse postings.
    pub graduated: bool,
}

/// Card-level projection of a posting for a specific trainee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobCard {
    pub id: JobId,
    pub name: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wage: Option<String>,
    pub schedule: Vec<String>,
    pub submitted: bool,
}

impl JobCard {
    pub fn for_trainee(posting: &JobPosting, trainee: &UserId) -> Self {
        Self {
            id: posting.id.clone(),
            name: posting.name.clone(),
            company: posting.company.clone(),
            address: posting.address.clone(),
            wage: posting.wage.clone(),
            schedule: posting.schedule.clone(),
            submitted: posting.has_interest_from(trainee),
        }
    }
}
