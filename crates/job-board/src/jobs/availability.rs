use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::filter::InvalidInput;

/// The five weekdays a trainee can mark as free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl WorkDay {
    pub const ALL: [WorkDay; 5] = [
        WorkDay::Monday,
        WorkDay::Tuesday,
        WorkDay::Wednesday,
        WorkDay::Thursday,
        WorkDay::Friday,
    ];

    /// Lower-case key used in availability maps and query strings.
    pub const fn key(self) -> &'static str {
        match self {
            WorkDay::Monday => "monday",
            WorkDay::Tuesday => "tuesday",
            WorkDay::Wednesday => "wednesday",
            WorkDay::Thursday => "thursday",
            WorkDay::Friday => "friday",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.key() == key)
    }

    /// Capitalized name used in posting schedules.
    pub const fn label(self) -> &'static str {
        match self {
            WorkDay::Monday => "Monday",
            WorkDay::Tuesday => "Tuesday",
            WorkDay::Wednesday => "Wednesday",
            WorkDay::Thursday => "Thursday",
            WorkDay::Friday => "Friday",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.label() == label)
    }
}

impl fmt::Display for WorkDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkDay {
    type Err = InvalidInput;

    /// Lenient parse for CLI and config input: accepts keys or labels in any case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::from_key(&normalized).ok_or_else(|| InvalidInput::UnknownDay {
            key: value.trim().to_string(),
        })
    }
}

/// Trainee's self-reported free/busy state for each weekday.
///
/// Always complete: every weekday has a flag. Values are replaced wholesale rather than edited in
/// place, see [`Availability::toggled`]. Deserializing goes through [`Availability::from_map`], so a
/// missing or unknown day surfaces as [`InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, bool>",
    into = "BTreeMap<String, bool>"
)]
pub struct Availability {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
}

impl Default for Availability {
    fn default() -> Self {
        Self::from_days([WorkDay::Wednesday, WorkDay::Thursday])
    }
}

impl Availability {
    pub const fn none() -> Self {
        Self {
            monday: false,
            tuesday: false,
            wednesday: false,
            thursday: false,
            friday: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
        }
    }

    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = WorkDay>,
    {
        days.into_iter()
            .fold(Self::none(), |availability, day| availability.with(day, true))
    }

    /// Parse a comma separated list such as `"monday,wednesday"`. An empty list means no days.
    pub fn parse_day_list(raw: &str) -> Result<Self, InvalidInput> {
        let days = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(WorkDay::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_days(days))
    }

    /// Build from a raw key/flag map. Every weekday key must be present and no other key is allowed.
    pub fn from_map(map: &BTreeMap<String, bool>) -> Result<Self, InvalidInput> {
        if let Some(key) = map.keys().find(|key| WorkDay::from_key(key).is_none()) {
            return Err(InvalidInput::UnknownDay { key: key.clone() });
        }

        let mut availability = Self::none();
        for day in WorkDay::ALL {
            let flag = map
                .get(day.key())
                .copied()
                .ok_or(InvalidInput::MissingDay { day })?;
            availability = availability.with(day, flag);
        }
        Ok(availability)
    }

    pub const fn is_available(&self, day: WorkDay) -> bool {
        match day {
            WorkDay::Monday => self.monday,
            WorkDay::Tuesday => self.tuesday,
            WorkDay::Wednesday => self.wednesday,
            WorkDay::Thursday => self.thursday,
            WorkDay::Friday => self.friday,
        }
    }

    pub fn with(mut self, day: WorkDay, flag: bool) -> Self {
        let slot = match day {
            WorkDay::Monday => &mut self.monday,
            WorkDay::Tuesday => &mut self.tuesday,
            WorkDay::Wednesday => &mut self.wednesday,
            WorkDay::Thursday => &mut self.thursday,
            WorkDay::Friday => &mut self.friday,
        };
        *slot = flag;
        self
    }

    pub fn toggled(self, day: WorkDay) -> Self {
        self.with(day, !self.is_available(day))
    }

    pub fn days(&self) -> impl Iterator<Item = WorkDay> + '_ {
        WorkDay::ALL
            .into_iter()
            .filter(move |day| self.is_available(*day))
    }

    /// Capitalized names of the days marked free, matching the schedule vocabulary.
    pub fn available_labels(&self) -> BTreeSet<&'static str> {
        self.days().map(WorkDay::label).collect()
    }

    pub fn to_map(&self) -> BTreeMap<String, bool> {
        WorkDay::ALL
            .into_iter()
            .map(|day| (day.key().to_string(), self.is_available(day)))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, bool>> for Availability {
    type Error = InvalidInput;

    fn try_from(map: BTreeMap<String, bool>) -> Result<Self, Self::Error> {
        Self::from_map(&map)
    }
}

impl From<Availability> for BTreeMap<String, bool> {
    fn from(availability: Availability) -> Self {
        availability.to_map()
    }
}
