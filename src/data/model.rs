use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::DataError;

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Binary launch outcome as stored in the `class` column (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class value (vertical coordinate of the scatter chart).
    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("class must be 0 or 1, got {other}")),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.as_class()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch table
// ---------------------------------------------------------------------------

/// A single launch (one row of `spacex_launch_dash.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub site: String,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass: f64,
    #[serde(rename = "Booster Version", default, skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(site: &str, payload_mass: f64, outcome: Outcome, booster_category: &str) -> Self {
        LaunchRecord {
            flight_number: None,
            site: site.to_string(),
            outcome,
            payload_mass,
            booster_version: None,
            booster_category: booster_category.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

// ---------------------------------------------------------------------------
// PayloadBounds – min / max of the payload column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

// ---------------------------------------------------------------------------
// RecordSet – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Read-only once constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<LaunchRecord>,
}

impl RecordSet {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        RecordSet { records }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in first-appearance order.
    pub fn sites(&self) -> Vec<&str> {
        distinct_in_order(self.records.iter().map(|r| r.site.as_str()))
    }

    /// Distinct booster categories in first-appearance order.
    pub fn booster_categories(&self) -> Vec<&str> {
        distinct_in_order(self.records.iter().map(|r| r.booster_category.as_str()))
    }

    /// Minimum and maximum payload mass over all records.
    ///
    /// Fails with [`DataError::EmptyDataset`] when there are no rows, since no
    /// default payload interval can be derived.
    pub fn payload_bounds(&self) -> Result<PayloadBounds, DataError> {
        let mut masses = self.records.iter().map(|r| r.payload_mass);
        let first = masses.next().ok_or(DataError::EmptyDataset)?;
        let (min, max) = masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
        Ok(PayloadBounds { min, max })
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

pub(crate) fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
