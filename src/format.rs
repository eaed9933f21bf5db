//! Display records for ranked trajectories.

use serde::{Deserialize, Serialize};

use crate::trajectory::ScoredTrajectory;
use crate::wind_profile::WindProfile;

/// One row of the ranking table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub h1: f64,
    #[serde(rename = "Speed_h1")]
    pub speed_h1: f64,
    pub h2: f64,
    #[serde(rename = "Speed_h2")]
    pub speed_h2: f64,
    #[serde(rename = "T1")]
    pub t1: String,
    #[serde(rename = "T2")]
    pub t2: String,
    #[serde(rename = "Climb")]
    pub climb: String,
    #[serde(rename = "Area_km2")]
    pub area_km2: f64,
    pub p0: [f64; 2],
    pub p1: [f64; 2],
    pub p2: [f64; 2],
}

/// Round the exact binary value to `decimals` places, exact ties to even.
///
/// 12.25 becomes 12.2, while 0.15 (stored just below .15) becomes 0.1.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Render a duration in seconds as "M:SS".
///
/// Minutes are floored and seconds truncated, never rounded: 125.9 s is
/// "2:05". Negative input uses floor division, so -1 s is "-1:59".
pub fn format_mmss(duration_s: f64) -> String {
    let remainder = duration_s.rem_euclid(60.0);
    // Subtracting the exact remainder avoids d / 60 rounding up to the next minute
    let minutes = ((duration_s - remainder) / 60.0) as i64;
    let seconds = remainder.floor() as i64;
    format!("{minutes}:{seconds:02}")
}

pub fn format_record(profile: &WindProfile, scored: &ScoredTrajectory) -> ResultRecord {
    let c = &scored.candidate;
    let (_, speed_h1) = profile.direction_and_speed_at(c.h1);
    let (_, speed_h2) = profile.direction_and_speed_at(c.h2);

    ResultRecord {
        h1: c.h1,
        speed_h1: round_to(speed_h1, 1),
        h2: c.h2,
        speed_h2: round_to(speed_h2, 1),
        t1: format_mmss(c.t1),
        t2: format_mmss(c.t2),
        climb: format_mmss(c.climb_time),
        area_km2: round_to(scored.area_km2, 2),
        p0: [scored.p0.x, scored.p0.y],
        p1: [scored.p1.x, scored.p1.y],
        p2: [scored.p2.x, scored.p2.y],
    }
}
