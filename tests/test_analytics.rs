use std::collections::HashMap;
use std::io::Write;

use cell_stats::analytics::{
    calculate_weight_stats, count_single_feature_sensors, highest_avg_weight,
    phones_announced_released_different_years,
};
use cell_stats::cell::clean_weight;
use cell_stats::loader::load_csv;
use cell_stats::report::Report;
use cell_stats::CellStore;

fn base_row() -> HashMap<String, String> {
    let mut row = HashMap::new();
    row.insert("oem".to_string(), "TestOEM".to_string());
    row.insert("model".to_string(), "TestModel".to_string());
    row.insert(
        "launch_announced".to_string(),
        "2020, Announced, 2020 Released, 2021".to_string(),
    );
    row.insert("body_weight".to_string(), "150 g".to_string());
    row.insert("features_sensors".to_string(), "GPS".to_string());
    row
}

#[test]
fn clean_weight_valid_and_invalid() {
    assert_eq!(clean_weight(Some("150 g")), Some(150));
    assert_eq!(clean_weight(Some("-")), None);
}

#[test]
fn announced_released_different_years() {
    let mut store = CellStore::new();
    store.create(1, &base_row());

    let results = phones_announced_released_different_years(&store).unwrap();
    assert!(!results.is_empty());
    assert!(results[0].contains("2020") && results[0].contains("2021"));
}

#[test]
fn highest_avg_weight_multiple_entries() {
    let mut store = CellStore::new();
    let mut row = base_row();
    row.insert("body_weight".to_string(), "200 g".to_string());
    store.create(1, &row);
    row.insert("oem".to_string(), "TestOEM2".to_string());
    row.insert("body_weight".to_string(), "100 g".to_string());
    store.create(2, &row);

    let result = highest_avg_weight(&store).unwrap();
    assert_eq!(result.oem, "TestOEM");
    assert_eq!(result.mean, 200.0);
}

#[test]
fn weight_stats_single_entry() {
    let mut store = CellStore::new();
    store.create(1, &base_row());

    let stats = calculate_weight_stats(&store).to_map();
    assert_eq!(stats["mean"], 150.0);
    assert_eq!(stats["median"], 150.0);
    assert_eq!(stats["standard_deviation"], 0.0);
}

#[test]
fn clear_resets_between_runs() {
    let mut store = CellStore::new();
    store.create(1, &base_row());
    assert_eq!(count_single_feature_sensors(&store), 1);

    store.clear();
    assert!(store.all().is_empty());
    assert_eq!(count_single_feature_sensors(&store), 0);
    assert_eq!(highest_avg_weight(&store), None);
    assert_eq!(calculate_weight_stats(&store).mean, 0.0);
}

#[test]
fn analytics_are_idempotent() {
    let mut store = CellStore::new();
    store.create(1, &base_row());
    let mut row = base_row();
    row.insert("oem".to_string(), "Other".to_string());
    row.insert("body_weight".to_string(), "g 210".to_string());
    row.insert("features_sensors".to_string(), "GPS,Compass".to_string());
    store.create(2, &row);

    let first = Report::build(&store);
    let second = Report::build(&store);
    assert_eq!(first, second);
    assert_eq!(store.len(), 2);
}

#[test]
fn load_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "oem,model,launch_announced,launch_status,body_weight,features_sensors,platform_os"
    )
    .unwrap();
    writeln!(
        file,
        "Google,Pixel 5,\"2020, September 30. Released 2020, October 15\",Available,151 g,\"Fingerprint, accelerometer, gyro\",Android 11"
    )
    .unwrap();
    writeln!(
        file,
        "Motorola,Moto E,\"2019, Announced, 2019 Released, 2020\",Discontinued,159 g,Accelerometer,Android 9.0"
    )
    .unwrap();
    writeln!(file, "Alcatel,OT-club,1999,Discontinued,-,V1,").unwrap();

    let mut store = CellStore::new();
    assert_eq!(load_csv(file.path(), &mut store).unwrap(), 3);

    let phones = phones_announced_released_different_years(&store).unwrap();
    assert_eq!(phones.len(), 2);
    assert!(phones[0].starts_with("Google Pixel 5, Announced: September 30., Released: October 15"));
    assert!(phones[1].starts_with("Motorola Moto E"));

    assert_eq!(count_single_feature_sensors(&store), 2);

    let heaviest = highest_avg_weight(&store).unwrap();
    assert_eq!(heaviest.oem, "Motorola");
    assert_eq!(heaviest.mean, 159.0);

    let stats = calculate_weight_stats(&store);
    assert_eq!(stats.mean, 155.0);
    assert_eq!(stats.median, 159.0);
    assert_eq!(stats.standard_deviation, 4.0);
}

#[test]
fn load_missing_file() {
    let mut store = CellStore::new();
    assert!(load_csv("does/not/exist.csv", &mut store).is_err());
    assert!(store.is_empty());
}
