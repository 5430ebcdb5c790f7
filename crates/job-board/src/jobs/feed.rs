use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::domain::{JobId, JobPosting, UserId};

#[derive(Debug)]
pub enum FeedError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidDate { job_id: String, value: String },
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Io(err) => write!(f, "failed to read job feed: {}", err),
            FeedError::Csv(err) => write!(f, "invalid job feed CSV data: {}", err),
            FeedError::InvalidDate { job_id, value } => write!(
                f,
                "job {} has posting date '{}', expected YYYY-MM-DD",
                job_id, value
            ),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Io(err) => Some(err),
            FeedError::Csv(err) => Some(err),
            FeedError::InvalidDate { .. } => None,
        }
    }
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for FeedError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads postings from a spreadsheet export.
///
/// Expected header: `Id,Name,Company,Address,Wage,Schedule,Description,Posted On,Users`.
/// `Schedule` and `Users` hold lists separated by `,` or `;`. Schedule entries are only trimmed;
/// vocabulary checks happen when the postings are filtered.
pub struct JobFeed;

impl JobFeed {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<JobPosting>, FeedError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<JobPosting>, FeedError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut postings = Vec::new();

        for record in csv_reader.deserialize::<FeedRow>() {
            postings.push(record?.into_posting()?);
        }

        Ok(postings)
    }
}

#[derive(Debug, Deserialize)]
struct FeedRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Address", default, deserialize_with = "empty_string_as_none")]
    address: Option<String>,
    #[serde(rename = "Wage", default, deserialize_with = "empty_string_as_none")]
    wage: Option<String>,
    #[serde(rename = "Schedule", default)]
    schedule: String,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    description: Option<String>,
    #[serde(rename = "Posted On", default, deserialize_with = "empty_string_as_none")]
    posted_on: Option<String>,
    #[serde(rename = "Users", default)]
    users: String,
}

impl FeedRow {
    fn into_posting(self) -> Result<JobPosting, FeedError> {
        let posted_on = match self.posted_on {
            Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                FeedError::InvalidDate {
                    job_id: self.id.clone(),
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(JobPosting {
            schedule: split_list(&self.schedule).map(str::to_string).collect(),
            users: split_list(&self.users)
                .map(|user| UserId(user.to_string()))
                .collect::<BTreeSet<_>>(),
            id: JobId(self.id),
            name: self.name,
            company: self.company,
            address: self.address,
            wage: self.wage,
            description: self.description,
            posted_on,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
