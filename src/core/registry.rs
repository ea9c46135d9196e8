//! Name-based access to the filters over JSON values, the way templates call them.

use crate::core::marks::{track_dist, track_time, xc_time};
use crate::core::order::{order_object_by, ObjectKey};
use crate::core::results::group_by_event;
use crate::core::text::{nl2br, relay_names};
use crate::domain::model::{Athlete, ResultRecord};
use crate::utils::error::{FilterError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const FILTER_NAMES: [&str; 7] = [
    "orderObjectBy",
    "results",
    "xcTime",
    "trackTime",
    "trackDist",
    "n12br",
    "relayNames",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    OrderObjectBy,
    Results,
    XcTime,
    TrackTime,
    TrackDist,
    LineBreaks,
    RelayNames,
}

impl Filter {
    pub const ALL: [Filter; 7] = [
        Filter::OrderObjectBy,
        Filter::Results,
        Filter::XcTime,
        Filter::TrackTime,
        Filter::TrackDist,
        Filter::LineBreaks,
        Filter::RelayNames,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Filter::OrderObjectBy => "orderObjectBy",
            Filter::Results => "results",
            Filter::XcTime => "xcTime",
            Filter::TrackTime => "trackTime",
            Filter::TrackDist => "trackDist",
            Filter::LineBreaks => "n12br",
            Filter::RelayNames => "relayNames",
        }
    }

    /// Runs the filter. `args` are the extra template arguments; only
    /// `orderObjectBy` reads them (`[label, reverse]`).
    pub fn apply(&self, input: &Value, args: &[Value]) -> Result<Value> {
        tracing::trace!(filter = self.name(), "applying filter");

        match self {
            Filter::OrderObjectBy => {
                let object = input.as_object().ok_or_else(|| self.wrong_input(input, "an object"))?;
                // args[0] is the sort label, which does not change the order
                let reverse = match args.get(1) {
                    None | Some(Value::Null) => false,
                    Some(Value::Bool(flag)) => *flag,
                    Some(other) => {
                        return Err(FilterError::invalid_value(
                            "orderObjectBy.reverse",
                            other,
                            "expected a boolean",
                        ))
                    }
                };
                let entries: Vec<(ObjectKey, Value)> = object
                    .iter()
                    .map(|(key, value)| (ObjectKey::parse(key), value.clone()))
                    .collect();
                Ok(Value::Array(order_object_by(entries, reverse)))
            }
            Filter::Results => {
                let items = input
                    .as_array()
                    .ok_or_else(|| self.wrong_input(input, "an array of result records"))?;
                // the typed record only drives grouping; the caller's objects are emitted as given
                let entries = items
                    .iter()
                    .map(|item| {
                        ResultRecord::deserialize(item)
                            .map(|record| (record, item.clone()))
                            .map_err(|e| self.wrong_input(item, &format!("a result record ({})", e)))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(serde_json::to_value(group_by_event(entries)?)?)
            }
            Filter::XcTime => Ok(Value::String(xc_time(self.number(input)?)?)),
            Filter::TrackTime => Ok(Value::String(track_time(self.number(input)?)?)),
            Filter::TrackDist => Ok(Value::String(track_dist(self.number(input)?)?)),
            Filter::LineBreaks => {
                let text = input.as_str().ok_or_else(|| self.wrong_input(input, "a string"))?;
                Ok(Value::String(nl2br(text)))
            }
            Filter::RelayNames => {
                let athletes: Vec<Athlete> = serde_json::from_value(input.clone())
                    .map_err(|e| self.wrong_input(input, &format!("an array of athletes ({})", e)))?;
                Ok(Value::from(relay_names(&athletes)))
            }
        }
    }

    fn number(&self, input: &Value) -> Result<f64> {
        input.as_f64().ok_or_else(|| self.wrong_input(input, "a number"))
    }

    fn wrong_input(&self, input: &Value, expected: &str) -> FilterError {
        FilterError::invalid_value(self.name(), input, &format!("expected {}", expected))
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(name: &str) -> Result<Self> {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.name() == name.trim())
            .ok_or_else(|| FilterError::UnknownFilterError {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks a filter up by name and applies it.
pub fn apply_filter(name: &str, input: &Value, args: &[Value]) -> Result<Value> {
    name.parse::<Filter>()?.apply(input, args)
}
