use itc_filters::{apply_filter, FilterError};
use serde_json::json;

#[test]
fn test_order_object_by_over_json_object() {
    let given = json!({"2010": "2010", "2015": "2015", "2011": "2011", "2013": "2013"});

    let result = apply_filter("orderObjectBy", &given, &[json!("date")]).unwrap();
    assert_eq!(result, json!(["2015", "2013", "2011", "2010"]));

    let result = apply_filter("orderObjectBy", &given, &[json!("date"), json!(true)]).unwrap();
    assert_eq!(result, json!(["2010", "2011", "2013", "2015"]));
}

#[test]
fn test_results_over_json_records() {
    let given = json!([
        {"event": {"name": "60m", "season": "Indoor"}, "performance": 12},
        {"event": {"name": "200m", "season": "Indoor"}, "performance": 22},
        {"event": {"name": "200m", "season": "Indoor"}, "performance": 32},
        {"event": {"name": "Triple Jump", "season": "Indoor"}, "performance": 42, "distanceResult": true},
        {"event": {"name": "Triple Jump", "season": "Indoor"}, "performance": 52, "distanceResult": true}
    ]);
    let expected = json!({
        "Indoor": {
            "60m": [
                {"event": {"name": "60m", "season": "Indoor"}, "performance": 12}
            ],
            "200m": [
                {"event": {"name": "200m", "season": "Indoor"}, "performance": 22},
                {"event": {"name": "200m", "season": "Indoor"}, "performance": 32}
            ],
            "Triple Jump": [
                {"event": {"name": "Triple Jump", "season": "Indoor"}, "performance": 52, "distanceResult": true},
                {"event": {"name": "Triple Jump", "season": "Indoor"}, "performance": 42, "distanceResult": true}
            ]
        }
    });

    let result = apply_filter("results", &given, &[]).unwrap();
    assert_eq!(result, expected);
}

#[test]
fn test_results_keeps_every_field_of_the_record() {
    let given = json!([
        {"event": {"name": "60m", "season": "Indoor", "id": 7}, "performance": 12,
         "meet": "Big Ten", "date": "2015-02-01"},
        {"event": {"name": "60m", "season": "Indoor", "id": 7}, "performance": 11,
         "meet": "Husky Classic"}
    ]);
    let expected = json!({
        "Indoor": {
            "60m": [
                {"event": {"name": "60m", "season": "Indoor", "id": 7}, "performance": 11,
                 "meet": "Husky Classic"},
                {"event": {"name": "60m", "season": "Indoor", "id": 7}, "performance": 12,
                 "meet": "Big Ten", "date": "2015-02-01"}
            ]
        }
    });

    assert_eq!(apply_filter("results", &given, &[]).unwrap(), expected);
}

#[test]
fn test_results_rejects_invalid_performance() {
    let given = json!([
        {"event": {"name": "60m", "season": "Indoor"}, "performance": 7.1},
        {"event": {"name": "60m", "season": "Indoor"}, "performance": -7.1}
    ]);
    match apply_filter("results", &given, &[]) {
        Err(FilterError::InvalidValueError { field, .. }) => {
            assert_eq!(field, "records[1].performance")
        }
        other => panic!("expected invalid value error, got {:?}", other),
    }
}

#[test]
fn test_results_rejects_record_without_event() {
    let given = json!([{"performance": 12}]);
    assert!(matches!(
        apply_filter("results", &given, &[]),
        Err(FilterError::InvalidValueError { .. })
    ));
}

#[test]
fn test_number_filters() {
    assert_eq!(apply_filter("xcTime", &json!(1101), &[]).unwrap(), json!("18:21"));
    assert_eq!(apply_filter("trackTime", &json!(115.05), &[]).unwrap(), json!("1:55.05"));
    assert_eq!(apply_filter("trackTime", &json!(12.003), &[]).unwrap(), json!("12.00"));
    assert_eq!(apply_filter("trackDist", &json!(9), &[]).unwrap(), json!("9.00 m"));
    assert!(apply_filter("trackDist", &json!(-9), &[]).is_err());
}

#[test]
fn test_n12br_filter() {
    let given = json!("Hello.\r\nHow are you?\r\n\r\nFine thanks.");
    assert_eq!(
        apply_filter("n12br", &given, &[]).unwrap(),
        json!("Hello.<br />How are you?<br /><br />Fine thanks.")
    );
}

#[test]
fn test_relay_names_filter() {
    let individual = json!([{"name": "Tyler Splitt"}]);
    assert_eq!(
        apply_filter("relayNames", &individual, &[]).unwrap(),
        json!(["Tyler Splitt"])
    );

    let relay = json!([
        {"name": "Tyler Splitt"},
        {"name": "Mike Kreiser"},
        {"name": "Ryan Somerfield"},
        {"name": "Michael Frintner"}
    ]);
    assert_eq!(
        apply_filter("relayNames", &relay, &[]).unwrap(),
        json!(["Splitt, Kreiser, Somerfield, Frintner"])
    );

    assert_eq!(apply_filter("relayNames", &json!([]), &[]).unwrap(), json!([]));
}

#[test]
fn test_unknown_filter_name() {
    assert!(matches!(
        apply_filter("currency", &json!(1), &[]),
        Err(FilterError::UnknownFilterError { .. })
    ));
}
