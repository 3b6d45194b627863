use std::collections::HashMap;

use serde::Serialize;

use crate::error::Result;
use crate::launch::LaunchYears;

pub const OEM: &str = "oem";
pub const MODEL: &str = "model";
pub const LAUNCH_ANNOUNCED: &str = "launch_announced";
pub const LAUNCH_STATUS: &str = "launch_status";
pub const BODY_DIMENSIONS: &str = "body_dimensions";
pub const BODY_WEIGHT: &str = "body_weight";
pub const BODY_SIM: &str = "body_sim";
pub const DISPLAY_TYPE: &str = "display_type";
pub const DISPLAY_SIZE: &str = "display_size";
pub const DISPLAY_RESOLUTION: &str = "display_resolution";
pub const FEATURES_SENSORS: &str = "features_sensors";
pub const PLATFORM_OS: &str = "platform_os";

/// Placeholder used by the source data for an unknown weight.
const MISSING_WEIGHT: &str = "-";

/// One phone specification row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub index: usize,
    pub oem: Option<String>,
    pub model: Option<String>,
    pub launch_announced: Option<String>,
    pub launch_status: Option<String>,
    pub body_dimensions: Option<String>,
    /// Grams, already cleaned by [clean_weight].
    pub body_weight: Option<u32>,
    pub body_sim: Option<String>,
    pub display_type: Option<String>,
    pub display_size: Option<String>,
    pub display_resolution: Option<String>,
    pub features_sensors: Option<String>,
    pub platform_os: Option<String>,
}

impl Cell {
    pub fn new(index: usize, row: &HashMap<String, String>) -> Self {
        let field = |name: &str| row.get(name).cloned();

        Cell {
            index,
            oem: field(OEM),
            model: field(MODEL),
            launch_announced: field(LAUNCH_ANNOUNCED),
            launch_status: field(LAUNCH_STATUS),
            body_dimensions: field(BODY_DIMENSIONS),
            body_weight: clean_weight(row.get(BODY_WEIGHT).map(String::as_str)),
            body_sim: field(BODY_SIM),
            display_type: field(DISPLAY_TYPE),
            display_size: field(DISPLAY_SIZE),
            display_resolution: field(DISPLAY_RESOLUTION),
            features_sensors: field(FEATURES_SENSORS),
            platform_os: field(PLATFORM_OS),
        }
    }

    /// Parsed launch years, or `None` when the cell has no launch field.
    pub fn launch_years(&self) -> Option<Result<LaunchYears>> {
        self.launch_announced
            .as_deref()
            .map(|text| LaunchYears::parse(self.index, text))
    }

    /// Number of comma separated sensors, `None` when the field is absent.
    pub fn sensor_count(&self) -> Option<usize> {
        self.features_sensors
            .as_deref()
            .map(|sensors| sensors.matches(',').count() + 1)
    }
}

/// Pull the first run of digits out of a raw weight such as `"150 g"`.
///
/// Absent values, the `-` placeholder and text without digits all clean to
/// `None`.
pub fn clean_weight(weight: Option<&str>) -> Option<u32> {
    let weight = weight.filter(|weight| *weight != MISSING_WEIGHT)?;

    let start = weight.find(|c: char| c.is_ascii_digit())?;
    let digits = &weight[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| digits.len());

    digits[..end].parse().ok()
}
