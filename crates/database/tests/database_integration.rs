//! End-to-end tests over construction, linking, querying, and limiting.

use chrono::NaiveDateTime;
use neodb_core::{CloseApproach, NearEarthObject};
use neodb_database::NeoDatabase;
use neodb_query::{limit, Filter};

fn approach(designation: &str, time: &str, distance: f64, velocity: f64) -> CloseApproach {
    let time = NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M").unwrap();
    CloseApproach::new(designation, time, distance, velocity)
}

/// One unnamed object, one approach: the whole pipeline on the smallest
/// possible data set.
#[test]
fn single_object_end_to_end() {
    let neos = vec![NearEarthObject::new("2021AB", None, None, false)];
    let approaches = vec![approach("2021AB", "2021-01-01 00:00", 0.05, 10.0)];
    let db = NeoDatabase::new(neos, approaches);

    let neo = db.neo_by_designation("2021AB").expect("lookup must hit");
    assert_eq!(neo.approaches().len(), 1);

    let ca = db.approaches_of(neo).next().unwrap();
    let back = db.neo_for(ca).unwrap();
    assert_eq!(back.designation(), "2021AB");

    let hazardous = Filter::builder().hazardous(Some(true)).build().unwrap();
    assert_eq!(db.query(Some(&hazardous)).count(), 0);

    let not_hazardous = Filter::builder().hazardous(Some(false)).build().unwrap();
    let hits: Vec<_> = db.query(Some(&not_hazardous)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].distance(), 0.05);

    let record = neo.to_record();
    assert_eq!(record.name, "");
    assert!(record.diameter_km.is_nan());
}

#[test]
fn unlinked_approach_is_kept_but_excluded_from_neo_criteria() {
    let neos = vec![NearEarthObject::new("433", Some("Eros".into()), Some(16.84), true)];
    let approaches = vec![
        approach("433", "2021-01-01 00:00", 0.1, 10.0),
        approach("9999XY", "2021-02-01 00:00", 0.2, 20.0),
    ];
    let db = NeoDatabase::new(neos, approaches);

    // Retained in the master list, unlinked.
    assert_eq!(db.approaches().len(), 2);
    assert!(db.approaches()[1].neo().is_none());

    // Excluded from any diameter- or hazardous-based result.
    let by_diameter = Filter::builder().diameter_min(Some(0.0)).build().unwrap();
    let hits: Vec<_> = db.query(Some(&by_diameter)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].designation(), "433");

    let by_hazard = Filter::builder().hazardous(Some(true)).build().unwrap();
    assert_eq!(db.query(Some(&by_hazard)).count(), 1);

    // Still visible to filters over its own attributes.
    let by_distance = Filter::builder().distance_min(Some(0.15)).build().unwrap();
    let hits: Vec<_> = db.query(Some(&by_distance)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].designation(), "9999XY");
}

#[test]
fn query_stream_composes_with_limit() {
    let neos = vec![NearEarthObject::new("433", None, None, false)];
    let approaches: Vec<CloseApproach> = (1..=5)
        .map(|day| approach("433", &format!("2021-01-{day:02} 00:00"), 0.1 * day as f64, 10.0))
        .collect();
    let db = NeoDatabase::new(neos, approaches);

    let first_three: Vec<_> = limit(db.query(None), Some(3)).collect();
    assert_eq!(first_three.len(), 3);
    assert_eq!(first_three[0].time_str(), "2021-01-01 00:00");
    assert_eq!(first_three[2].time_str(), "2021-01-03 00:00");

    assert_eq!(limit(db.query(None), Some(10)).count(), 5);
    assert_eq!(limit(db.query(None), None).count(), 5);
    assert_eq!(limit(db.query(None), Some(0)).count(), 5);

    // Filter and limit together: still lazy, still ordered.
    let far = Filter::builder().distance_min(Some(0.25)).build().unwrap();
    let limited: Vec<_> = limit(db.query(Some(&far)), Some(2)).collect();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].time_str(), "2021-01-03 00:00");
    assert_eq!(limited[1].time_str(), "2021-01-04 00:00");
}
