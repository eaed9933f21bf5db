//! Enumeration of altitude pairs and time splits.
//!
//! Every unordered pair of distinct profile altitudes (h1 < h2) is a
//! candidate flight plan: cruise at h1, climb to h2, cruise at h2. The climb
//! is charged against the flight time at the constant climb rate, and the
//! remaining cruise time is distributed between the two legs by a fixed set
//! of split fractions.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{DEFAULT_SPLIT_COUNT, DEFAULT_SPLIT_MAX, DEFAULT_SPLIT_MIN, FT_TO_M};
use crate::wind_profile::WindProfile;

/// Search budget and split grid
#[derive(Debug, Clone, PartialEq)]
pub struct SearchGrid {
    pub total_duration_s: f64,
    pub climb_rate_mps: f64,
    pub split_count: usize,
    pub split_min: f64,
    pub split_max: f64,
}

impl SearchGrid {
    /// Grid with the default nine splits over [0.1, 0.9]
    pub fn new(total_duration_s: f64, climb_rate_mps: f64) -> Self {
        Self {
            total_duration_s,
            climb_rate_mps,
            split_count: DEFAULT_SPLIT_COUNT,
            split_min: DEFAULT_SPLIT_MIN,
            split_max: DEFAULT_SPLIT_MAX,
        }
    }

    pub fn with_splits(mut self, split_count: usize, split_min: f64, split_max: f64) -> Self {
        self.split_count = split_count;
        self.split_min = split_min;
        self.split_max = split_max;
        self
    }
}

/// One flight plan: time at h1, climb, time at h2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub h1: f64,           // ft
    pub h2: f64,           // ft
    pub t1: f64,           // s at h1
    pub t2: f64,           // s at h2
    pub climb_time: f64,   // s
    pub split_fraction: f64,
}

/// Time to change altitude between `h1` and `h2` (feet) at `climb_rate_mps`
pub fn climb_time_s(h1: f64, h2: f64, climb_rate_mps: f64) -> f64 {
    (h2 - h1).abs() * FT_TO_M / climb_rate_mps
}

/// `count` evenly spaced fractions over the closed interval [min, max]
pub fn split_fractions(count: usize, min: f64, max: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            let mut fractions: Vec<f64> = (0..count).map(|i| min + step * i as f64).collect();
            fractions[count - 1] = max;
            fractions
        }
    }
}

/// Unordered pairs (a, b) with a before b in `altitudes`
fn altitude_pairs(altitudes: &[f64]) -> impl Iterator<Item = (f64, f64)> + '_ {
    let n = altitudes.len();
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (altitudes[i], altitudes[j])))
}

/// Lazily enumerate all feasible candidates.
///
/// Pairs whose climb alone uses up the flight time are skipped. Order is
/// deterministic: pairs ascending by h1 then h2, fractions ascending.
pub fn generate<'a>(profile: &'a WindProfile, grid: &SearchGrid) -> impl Iterator<Item = Candidate> + 'a {
    let total_duration_s = grid.total_duration_s;
    let climb_rate_mps = grid.climb_rate_mps;
    let fractions = split_fractions(grid.split_count, grid.split_min, grid.split_max);

    altitude_pairs(profile.distinct_altitudes())
        .filter_map(move |(h1, h2)| {
            let climb_time = climb_time_s(h1, h2, climb_rate_mps);
            let cruise_time = total_duration_s - climb_time;
            // Written so that NaN is rejected too
            if !(cruise_time > 0.0) {
                trace!(h1, h2, climb_time, "climb exceeds flight time, skipping pair");
                return None;
            }
            Some((h1, h2, climb_time, cruise_time))
        })
        .flat_map(move |(h1, h2, climb_time, cruise_time)| {
            fractions.clone().into_iter().map(move |fraction| Candidate {
                h1,
                h2,
                t1: cruise_time * fraction,
                t2: cruise_time * (1.0 - fraction),
                climb_time,
                split_fraction: fraction,
            })
        })
}
