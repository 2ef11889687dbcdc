//! End-to-end search with the reference settings.
//!
//! The reference settings are durations 4..=25 spaced by at least 2 and a
//! ratio of 1.5 to 4.0, sets of 3..=20 durations starting with `[1, 2]`, and
//! pools of 4 durations totalling 3..=20 with at least 3 pools per total.

use duration_pools::{
    Bounds, DurationSearch, DurationSet, Pool, SearchConfig, SearchRecord, SetGenerator,
};

fn reference_set() -> DurationSet {
    DurationSet::new(vec![1, 2, 4, 7, 10, 15]).unwrap()
}

fn reference_record(search: &DurationSearch) -> SearchRecord {
    search
        .records()
        .find(|record| record.set == reference_set())
        .expect("reference set should qualify")
}

fn pools(values: &[&[u32]]) -> Vec<Pool> {
    values.iter().map(|v| Pool::new(v.to_vec())).collect()
}

#[test]
fn test_reference_set_is_generated() {
    let generator = SetGenerator::new(SearchConfig::default()).unwrap();
    assert!(generator.iter().any(|set| set == reference_set()));
}

#[test]
fn test_reference_record_buckets() {
    let search = DurationSearch::new(SearchConfig::default()).unwrap();
    let record = reference_record(&search);

    assert_eq!(record.pool_length, 4);
    assert_eq!(record.pools.sums().collect::<Vec<_>>(), vec![18, 19, 20]);
    assert_eq!(
        record.pools.get(18).unwrap().pools(),
        pools(&[&[1, 1, 1, 15], &[2, 2, 4, 10], &[2, 2, 7, 7]]).as_slice()
    );
    assert_eq!(
        record.pools.get(19).unwrap().pools(),
        pools(&[
            &[1, 1, 2, 15],
            &[1, 1, 7, 10],
            &[1, 4, 4, 10],
            &[1, 4, 7, 7],
            &[4, 4, 4, 7]
        ])
        .as_slice()
    );
    assert_eq!(
        record.pools.get(20).unwrap().pools(),
        pools(&[&[1, 2, 2, 15], &[1, 2, 7, 10], &[2, 4, 4, 10], &[2, 4, 7, 7]]).as_slice()
    );
}

#[test]
fn test_reference_record_display() {
    let search = DurationSearch::new(SearchConfig::default()).unwrap();
    let text = reference_record(&search).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Pool length: 4",
            "Set: (1, 2, 4, 7, 10, 15)",
            "Pools (sum 18): [(1, 1, 1, 15), (2, 2, 4, 10), (2, 2, 7, 7)]",
            "Pools (sum 19): [(1, 1, 2, 15), (1, 1, 7, 10), (1, 4, 4, 10), (1, 4, 7, 7), (4, 4, 4, 7)]",
            "Pools (sum 20): [(1, 2, 2, 15), (1, 2, 7, 10), (2, 4, 4, 10), (2, 4, 7, 7)]",
        ]
    );
}

#[test]
fn test_every_record_uses_generated_sets() {
    let search = DurationSearch::new(SearchConfig::default()).unwrap();
    let sets: Vec<DurationSet> = search.generator().iter().collect();
    for record in search.records() {
        assert!(sets.contains(&record.set));
        assert!(record.set.starts_with(&[1, 2]));
    }
}

#[test]
fn test_larger_pools_are_searched_after_smaller() {
    let config = SearchConfig {
        pool_length_range: Bounds::new(4, 5),
        ..SearchConfig::default()
    };
    let search = DurationSearch::new(config).unwrap();
    let (records, stats) = search.run();
    let first_five = records.iter().position(|r| r.pool_length == 5);
    if let Some(index) = first_five {
        assert!(records[index..].iter().all(|r| r.pool_length == 5));
    }
    assert!(records.iter().any(|r| r.pool_length == 4));
    assert_eq!(stats.records as usize, records.len());
}

#[cfg(feature = "serde")]
#[test]
fn test_reference_record_json_roundtrip() {
    let search = DurationSearch::new(SearchConfig::default()).unwrap();
    let record = reference_record(&search);

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.starts_with(r#"{"poolLength":4,"set":[1,2,4,7,10,15],"pools":{"18":"#));
    let restored: SearchRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, record);
    assert_eq!(restored.pools.sums().collect::<Vec<_>>(), vec![18, 19, 20]);
}

#[cfg(feature = "serde")]
#[test]
fn test_config_loaded_from_json_drives_search() {
    let json = r#"{
        "durationRange": [4, 25],
        "minDiff": 2,
        "minMult": 1.5,
        "maxMult": 4.0,
        "setSizeRange": [6, 6],
        "forcedPrefix": [2, 1],
        "poolLengthRange": [4, 4],
        "poolSumRange": [3, 20],
        "minPoolsPerSum": 3
    }"#;
    let config: SearchConfig = serde_json::from_str(json).unwrap();
    let search = DurationSearch::new(config).unwrap();
    assert!(search.records().all(|record| record.set.len() == 6));
    let record = reference_record(&search);
    assert_eq!(record.pools.len(), 3);
}
