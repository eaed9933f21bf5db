/// Wind profile loading from `Altitude_ft,Direction_deg,Speed_kmh` tables
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::wind_profile::{WindProfile, WindSample};

#[derive(Debug, Deserialize)]
struct WindRow {
    #[serde(rename = "Altitude_ft")]
    altitude_ft: f64,
    #[serde(rename = "Direction_deg")]
    direction_deg: f64,
    #[serde(rename = "Speed_kmh")]
    speed_kmh: f64,
}

impl From<WindRow> for WindSample {
    fn from(row: WindRow) -> Self {
        WindSample::new(row.altitude_ft, row.direction_deg, row.speed_kmh)
    }
}

/// Read a profile from any CSV source with a header row.
///
/// Columns are matched by name; extra columns are ignored.
pub fn load_profile_from_reader<R: Read>(reader: R) -> Result<WindProfile> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    for row in reader.deserialize::<WindRow>() {
        samples.push(WindSample::from(row?));
    }

    debug!(rows = samples.len(), "read wind table");
    WindProfile::new(samples)
}

pub fn load_profile_from_path<P: AsRef<Path>>(path: P) -> Result<WindProfile> {
    let file = std::fs::File::open(path)?;
    load_profile_from_reader(file)
}
