use std::fmt;

use log::warn;
use serde::Serialize;

use crate::analytics::{self, OemWeight, WeightStats};
use crate::error::Result;
use crate::store::CellStore;

/// Every analytic over one store snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_cells: usize,
    /// `Err` carries the reason the launch query could not run.
    pub different_years: std::result::Result<Vec<String>, String>,
    pub single_feature_sensors: usize,
    pub highest_avg_weight: Option<OemWeight>,
    pub weight_stats: WeightStats,
}

impl Report {
    /// Run all analytics. A malformed launch field only fails that query.
    pub fn build(store: &CellStore) -> Self {
        let different_years = analytics::phones_announced_released_different_years(store)
            .map_err(|err| {
                warn!("Skipping launch year analytics: {}", err);
                err.to_string()
            });

        Report {
            total_cells: store.len(),
            different_years,
            single_feature_sensors: analytics::count_single_feature_sensors(store),
            highest_avg_weight: analytics::highest_avg_weight(store),
            weight_stats: analytics::calculate_weight_stats(store),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total cells loaded: {}", self.total_cells)?;
        match &self.different_years {
            Ok(phones) => writeln!(
                f,
                "Phones with differing announced and released years: {:?}",
                phones
            )?,
            Err(reason) => writeln!(
                f,
                "Phones with differing announced and released years: unavailable ({})",
                reason
            )?,
        }
        writeln!(
            f,
            "Number of phones with only one feature sensor: {}",
            self.single_feature_sensors
        )?;
        if let Some(heaviest) = &self.highest_avg_weight {
            writeln!(
                f,
                "OEM with highest average body weight: {}, Weight: {}",
                heaviest.oem, heaviest.mean
            )?;
        }
        write!(f, "Weight stats: {:?}", self.weight_stats.to_map())
    }
}
