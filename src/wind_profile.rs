//! Altitude-indexed wind profile.
//!
//! A profile is a set of discrete wind observations, one per altitude, as
//! delivered by a sounding or a pilot briefing. Wind between two observed
//! altitudes is linearly interpolated; outside the observed band the nearest
//! boundary observation is held constant.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LandRunError, Result};

/// Wind observed at a single altitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub altitude_ft: f64,
    pub direction_deg: f64, // Bearing the wind blows towards, 0 = north, clockwise
    pub speed_kmh: f64,
}

impl WindSample {
    pub fn new(altitude_ft: f64, direction_deg: f64, speed_kmh: f64) -> Self {
        Self {
            altitude_ft,
            direction_deg,
            speed_kmh,
        }
    }
}

/// Samples sorted ascending by altitude, one per distinct altitude
#[derive(Debug, Clone)]
pub struct WindProfile {
    altitudes: Vec<f64>,
    directions: Vec<f64>,
    speeds: Vec<f64>,
}

impl WindProfile {
    /// Build a profile from raw samples in any order.
    ///
    /// When several samples share an altitude the one appearing last in
    /// `samples` is kept.
    pub fn new(mut samples: Vec<WindSample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(LandRunError::EmptyProfile);
        }

        for (index, s) in samples.iter().enumerate() {
            if !s.altitude_ft.is_finite() || !s.direction_deg.is_finite() || !s.speed_kmh.is_finite() {
                return Err(LandRunError::InvalidSample {
                    index,
                    reason: "values must be finite".to_string(),
                });
            }
            if s.speed_kmh < 0.0 {
                return Err(LandRunError::InvalidSample {
                    index,
                    reason: format!("negative wind speed {}", s.speed_kmh),
                });
            }
        }

        // Stable, so equal altitudes keep their input order
        samples.sort_by(|a, b| a.altitude_ft.total_cmp(&b.altitude_ft));

        let mut altitudes: Vec<f64> = Vec::with_capacity(samples.len());
        let mut directions = Vec::with_capacity(samples.len());
        let mut speeds = Vec::with_capacity(samples.len());
        let mut duplicates = 0usize;

        for s in &samples {
            if altitudes.last() == Some(&s.altitude_ft) {
                let last = altitudes.len() - 1;
                directions[last] = s.direction_deg;
                speeds[last] = s.speed_kmh;
                duplicates += 1;
                continue;
            }
            altitudes.push(s.altitude_ft);
            directions.push(s.direction_deg);
            speeds.push(s.speed_kmh);
        }

        if duplicates > 0 {
            warn!(duplicates, "duplicate altitudes in wind profile, keeping last sample per altitude");
        }

        Ok(Self {
            altitudes,
            directions,
            speeds,
        })
    }

    /// Interpolated (direction_deg, speed_kmh) at an arbitrary altitude
    pub fn direction_and_speed_at(&self, altitude_ft: f64) -> (f64, f64) {
        (
            interpolate(&self.altitudes, &self.directions, altitude_ft),
            interpolate(&self.altitudes, &self.speeds, altitude_ft),
        )
    }

    /// Distinct sampled altitudes, ascending
    pub fn distinct_altitudes(&self) -> &[f64] {
        &self.altitudes
    }

    pub fn len(&self) -> usize {
        self.altitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.altitudes.is_empty()
    }
}

/// Piecewise-linear interpolation, clamped to the boundary values
fn interpolate(x_vals: &[f64], y_vals: &[f64], x: f64) -> f64 {
    let n = x_vals.len();
    if n == 0 {
        return 0.0;
    }

    if x <= x_vals[0] {
        return y_vals[0];
    }

    if x >= x_vals[n - 1] {
        return y_vals[n - 1];
    }

    // Binary search for the bracketing interval
    let mut left = 0;
    let mut right = n - 1;

    while right - left > 1 {
        let mid = (left + right) / 2;
        if x_vals[mid] <= x {
            left = mid;
        } else {
            right = mid;
        }
    }

    let x1 = x_vals[left];
    let x2 = x_vals[right];
    let y1 = y_vals[left];
    let y2 = y_vals[right];

    y1 + (y2 - y1) * (x - x1) / (x2 - x1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_layer_profile() -> WindProfile {
        WindProfile::new(vec![
            WindSample::new(3000.0, 90.0, 20.0),
            WindSample::new(0.0, 10.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_interpolate() {
        let x_vals = vec![0.0, 1.0, 2.0, 3.0];
        let y_vals = vec![0.0, 10.0, 20.0, 30.0];

        assert_eq!(interpolate(&x_vals, &y_vals, 0.5), 5.0);
        assert_eq!(interpolate(&x_vals, &y_vals, 1.5), 15.0);
        assert_eq!(interpolate(&x_vals, &y_vals, 2.5), 25.0);

        assert_eq!(interpolate(&x_vals, &y_vals, -1.0), 0.0);
        assert_eq!(interpolate(&x_vals, &y_vals, 4.0), 30.0);
    }

    #[test]
    fn test_exact_samples_returned_at_sampled_altitudes() {
        let profile = two_layer_profile();
        assert_eq!(profile.direction_and_speed_at(0.0), (10.0, 10.0));
        assert_eq!(profile.direction_and_speed_at(3000.0), (90.0, 20.0));
    }

    #[test]
    fn test_linear_between_samples() {
        let profile = two_layer_profile();
        let (dir, speed) = profile.direction_and_speed_at(1500.0);
        assert!((dir - 50.0).abs() < 1e-12);
        assert!((speed - 15.0).abs() < 1e-12);

        let (dir, speed) = profile.direction_and_speed_at(750.0);
        assert!((dir - 30.0).abs() < 1e-12);
        assert!((speed - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_clamped_outside_range() {
        let profile = two_layer_profile();
        assert_eq!(profile.direction_and_speed_at(-500.0), (10.0, 10.0));
        assert_eq!(profile.direction_and_speed_at(10_000.0), (90.0, 20.0));
    }

    #[test]
    fn test_samples_sorted_by_altitude() {
        let profile = WindProfile::new(vec![
            WindSample::new(2000.0, 0.0, 5.0),
            WindSample::new(500.0, 0.0, 5.0),
            WindSample::new(1000.0, 0.0, 5.0),
        ])
        .unwrap();
        assert_eq!(profile.distinct_altitudes(), &[500.0, 1000.0, 2000.0]);
    }

    #[test]
    fn test_duplicate_altitude_keeps_last() {
        let profile = WindProfile::new(vec![
            WindSample::new(1000.0, 100.0, 30.0),
            WindSample::new(0.0, 0.0, 10.0),
            WindSample::new(1000.0, 200.0, 40.0),
        ])
        .unwrap();
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.direction_and_speed_at(1000.0), (200.0, 40.0));
    }

    #[test]
    fn test_single_sample_is_constant() {
        let profile = WindProfile::new(vec![WindSample::new(1200.0, 45.0, 18.0)]).unwrap();
        assert_eq!(profile.direction_and_speed_at(0.0), (45.0, 18.0));
        assert_eq!(profile.direction_and_speed_at(5000.0), (45.0, 18.0));
    }

    #[test]
    fn test_empty_profile_rejected() {
        assert!(matches!(WindProfile::new(vec![]), Err(LandRunError::EmptyProfile)));
    }

    #[test]
    fn test_invalid_samples_rejected() {
        let err = WindProfile::new(vec![
            WindSample::new(0.0, 0.0, 10.0),
            WindSample::new(f64::NAN, 0.0, 10.0),
        ])
        .unwrap_err();
        assert!(matches!(err, LandRunError::InvalidSample { index: 1, .. }));

        let err = WindProfile::new(vec![WindSample::new(0.0, 0.0, -1.0)]).unwrap_err();
        assert!(matches!(err, LandRunError::InvalidSample { index: 0, .. }));
    }
}
