use crate::utils::error::Result;
use crate::utils::validation::{
    validate_each, validate_finite_non_negative, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub season: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub name: String,
}

impl Athlete {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One performance in one event.
///
/// `distance_result` marks a performance measured in meters, where a larger
/// number is better. Otherwise `performance` is a time in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub event: Event,
    pub performance: f64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub distance_result: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub athletes: Vec<Athlete>,
}

impl ResultRecord {
    pub fn timed(season: &str, event: &str, seconds: f64) -> Self {
        Self {
            event: Event {
                name: event.to_string(),
                season: season.to_string(),
            },
            performance: seconds,
            distance_result: false,
            athletes: Vec::new(),
        }
    }

    pub fn measured(season: &str, event: &str, meters: f64) -> Self {
        Self {
            distance_result: true,
            ..Self::timed(season, event, meters)
        }
    }

    pub fn with_athletes(mut self, names: &[&str]) -> Self {
        self.athletes = names.iter().map(|name| Athlete::new(*name)).collect();
        self
    }
}

impl Validate for ResultRecord {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("event.season", &self.event.season)?;
        validate_non_empty_string("event.name", &self.event.name)?;
        validate_finite_non_negative("performance", self.performance)?;
        for athlete in &self.athletes {
            validate_non_empty_string("athletes.name", &athlete.name)?;
        }
        Ok(())
    }
}

/// season -> event name -> records of that event
pub type ResultsBySeason = BTreeMap<String, BTreeMap<String, Vec<ResultRecord>>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub season: String,
    pub event: String,
    pub place: usize,
    pub athletes: String,
    pub mark: String,
}

#[derive(Debug, Clone)]
pub struct DisplayReport {
    pub grouped: ResultsBySeason,
    pub rows: Vec<DisplayRow>,
    pub csv_output: String,
}

impl DisplayReport {
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }
}

/// Parses a JSON array of result records, rejecting records that fail validation.
pub fn parse_records(json: &[u8]) -> Result<Vec<ResultRecord>> {
    let records: Vec<ResultRecord> = serde_json::from_slice(json)?;
    validate_each("records", &records)?;
    Ok(records)
}
