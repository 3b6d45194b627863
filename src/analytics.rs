use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::Result;
use crate::store::CellStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OemWeight {
    pub oem: String,
    pub mean: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightStats {
    pub mean: f64,
    pub median: f64,
    pub standard_deviation: f64,
}

impl WeightStats {
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        let mut map = BTreeMap::new();
        map.insert("mean", self.mean);
        map.insert("median", self.median);
        map.insert("standard_deviation", self.standard_deviation);
        map
    }
}

/// Cells whose announced and released years differ, one formatted line each:
/// `<oem> <model>, Announced: <year>, Released: <year> [<launch text>]`.
///
/// The years are the second token of each half of the launch field, which
/// for fields like `2020, Announced, 2020 Released, 2021` is not the leading
/// year, so the raw launch text is kept in brackets.
///
/// Cells without a launch field, or whose launch field has no `Released`
/// part, are skipped. A malformed `Released` field fails the whole query.
pub fn phones_announced_released_different_years(store: &CellStore) -> Result<Vec<String>> {
    let mut phones = Vec::new();

    for cell in store.all() {
        let years = match cell.launch_years() {
            Some(years) => years?,
            None => continue,
        };
        if !years.years_differ() {
            continue;
        }

        phones.push(format!(
            "{} {}, Announced: {}, Released: {} [{}]",
            cell.oem.as_deref().unwrap_or_default(),
            cell.model.as_deref().unwrap_or_default(),
            years.announced.as_deref().unwrap_or_default(),
            years.released.as_deref().unwrap_or_default(),
            cell.launch_announced.as_deref().unwrap_or_default(),
        ));
    }

    Ok(phones)
}

pub fn count_single_feature_sensors(store: &CellStore) -> usize {
    store
        .all()
        .iter()
        .filter(|cell| cell.sensor_count() == Some(1))
        .count()
}

/// OEM with the highest mean body weight.
///
/// Only weighed cells with a known OEM take part. On a tie the OEM seen first
/// in store order wins.
pub fn highest_avg_weight(store: &CellStore) -> Option<OemWeight> {
    // (oem, total, count) in order of first appearance.
    let mut groups: Vec<(&str, u64, u64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for cell in store.all() {
        let (oem, weight) = match (cell.oem.as_deref(), cell.body_weight) {
            (Some(oem), Some(weight)) => (oem, weight),
            _ => continue,
        };
        let position = *positions.entry(oem).or_insert_with(|| {
            groups.push((oem, 0, 0));
            groups.len() - 1
        });
        let group = &mut groups[position];
        group.1 += u64::from(weight);
        group.2 += 1;
    }

    let mut best: Option<OemWeight> = None;
    for (oem, total, count) in groups {
        let mean = total as f64 / count as f64;
        if best.as_ref().map_or(true, |best| mean > best.mean) {
            best = Some(OemWeight {
                oem: oem.to_string(),
                mean,
            });
        }
    }
    best
}

pub fn calculate_weight_stats(store: &CellStore) -> WeightStats {
    let mut weights: Vec<u32> = store
        .all()
        .iter()
        .filter_map(|cell| cell.body_weight)
        .collect();

    if weights.is_empty() {
        return WeightStats {
            mean: 0.0,
            median: 0.0,
            standard_deviation: 0.0,
        };
    }

    let mean = mean(&weights);
    let median = median(&mut weights) as f64;
    let variance = weights
        .iter()
        .map(|&weight| (weight as f64 - mean).powi(2))
        .sum::<f64>()
        / weights.len() as f64;

    WeightStats {
        mean,
        median,
        standard_deviation: variance.sqrt(),
    }
}

fn mean(numbers: &[u32]) -> f64 {
    numbers.iter().map(|&n| u64::from(n)).sum::<u64>() as f64 / numbers.len() as f64
}

/// Upper-middle element: index `len / 2` of the sorted values.
fn median(numbers: &mut [u32]) -> u32 {
    numbers.sort_unstable();
    let mid = numbers.len() / 2;
    numbers[mid]
}
