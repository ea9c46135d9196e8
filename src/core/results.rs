//! Grouping of flat result records into the season / event display structure.

use crate::domain::model::{ResultRecord, ResultsBySeason};
use crate::utils::error::Result;
use crate::utils::validation::validate_each;
use std::collections::BTreeMap;

/// season -> event name -> items of that event
pub type GroupedBy<T> = BTreeMap<String, BTreeMap<String, Vec<T>>>;

/// Groups records by season, then event name, best performance first.
///
/// Times sort ascending and distances descending. Every bucket is sorted once
/// after all records are partitioned. An invalid record fails the whole call.
pub fn group_results(records: &[ResultRecord]) -> Result<ResultsBySeason> {
    let entries = records
        .iter()
        .map(|record| (record.clone(), record.clone()))
        .collect();
    group_by_event(entries)
}

/// Same grouping as [`group_results`], but each bucket holds the item paired
/// with its record, e.g. the caller's raw JSON object with all of its fields.
pub fn group_by_event<T>(entries: Vec<(ResultRecord, T)>) -> Result<GroupedBy<T>> {
    let records: Vec<&ResultRecord> = entries.iter().map(|(record, _)| record).collect();
    validate_each("records", &records)?;

    let mut grouped = entries.into_iter().fold(
        GroupedBy::<(ResultRecord, T)>::new(),
        |mut acc, (record, item)| {
            acc.entry(record.event.season.clone())
                .or_default()
                .entry(record.event.name.clone())
                .or_default()
                .push((record, item));
            acc
        },
    );

    for events in grouped.values_mut() {
        for bucket in events.values_mut() {
            sort_best_first(bucket);
        }
    }

    Ok(grouped
        .into_iter()
        .map(|(season, events)| {
            let events: BTreeMap<String, Vec<T>> = events
                .into_iter()
                .map(|(name, bucket)| (name, bucket.into_iter().map(|(_, item)| item).collect()))
                .collect();
            (season, events)
        })
        .collect())
}

/// Sorts one event's entries, better performance first.
///
/// A bucket holding any distance result is treated as a distance event, so the
/// comparator stays a total order even when the flag is set inconsistently.
fn sort_best_first<T>(bucket: &mut [(ResultRecord, T)]) {
    let distance_event = bucket.iter().any(|(record, _)| record.distance_result);
    bucket.sort_by(|(a, _), (b, _)| {
        if distance_event {
            b.performance.total_cmp(&a.performance)
        } else {
            a.performance.total_cmp(&b.performance)
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FilterError;

    fn fixture() -> Vec<ResultRecord> {
        vec![
            ResultRecord::timed("Indoor", "60m", 12.0),
            ResultRecord::timed("Indoor", "200m", 22.0),
            ResultRecord::timed("Indoor", "200m", 32.0),
            ResultRecord::measured("Indoor", "Triple Jump", 42.0),
            ResultRecord::measured("Indoor", "Triple Jump", 52.0),
        ]
    }

    fn performances(grouped: &ResultsBySeason, season: &str, event: &str) -> Vec<f64> {
        grouped[season][event].iter().map(|r| r.performance).collect()
    }

    #[test]
    fn test_groups_by_season_and_event() {
        let grouped = group_results(&fixture()).unwrap();

        assert_eq!(grouped.len(), 1);
        let indoor = &grouped["Indoor"];
        assert_eq!(indoor.len(), 3);
        assert_eq!(performances(&grouped, "Indoor", "60m"), vec![12.0]);
        assert_eq!(performances(&grouped, "Indoor", "200m"), vec![22.0, 32.0]);
        assert_eq!(performances(&grouped, "Indoor", "Triple Jump"), vec![52.0, 42.0]);
    }

    #[test]
    fn test_no_record_lost() {
        let mut records = fixture();
        records.push(ResultRecord::timed("Outdoor", "60m", 7.2));
        records.push(ResultRecord::timed("Outdoor", "60m", 7.0));

        let grouped = group_results(&records).unwrap();
        let total: usize = grouped
            .values()
            .flat_map(|events| events.values())
            .map(Vec::len)
            .sum();

        assert_eq!(total, records.len());
        assert_eq!(performances(&grouped, "Outdoor", "60m"), vec![7.0, 7.2]);
    }

    #[test]
    fn test_input_is_untouched() {
        let records = fixture();
        let before = records.clone();
        group_results(&records).unwrap();
        assert_eq!(records, before);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            ResultRecord::timed("Outdoor", "4x400m", 200.0).with_athletes(&["A One", "B Two"]),
            ResultRecord::timed("Outdoor", "4x400m", 200.0).with_athletes(&["C Three", "D Four"]),
        ];
        let grouped = group_results(&records).unwrap();
        assert_eq!(grouped["Outdoor"]["4x400m"], records);
    }

    #[test]
    fn test_group_by_event_keeps_paired_items() {
        let entries = vec![
            (ResultRecord::measured("Indoor", "Long Jump", 6.1), "meet a"),
            (ResultRecord::measured("Indoor", "Long Jump", 6.8), "meet b"),
            (ResultRecord::timed("Indoor", "60m", 7.3), "meet c"),
        ];
        let grouped = group_by_event(entries).unwrap();

        assert_eq!(grouped["Indoor"]["Long Jump"], vec!["meet b", "meet a"]);
        assert_eq!(grouped["Indoor"]["60m"], vec!["meet c"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_results(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_record_fails_fast() {
        let records = vec![
            ResultRecord::timed("Indoor", "60m", 7.0),
            ResultRecord::timed("Indoor", "60m", f64::NAN),
        ];
        match group_results(&records) {
            Err(FilterError::InvalidValueError { field, .. }) => {
                assert_eq!(field, "records[1].performance")
            }
            other => panic!("expected invalid value error, got {:?}", other),
        }
    }
}
