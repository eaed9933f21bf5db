// CLI API module - plain-data entry point for the land run search
use nalgebra::Vector2;
use serde::Serialize;
use tracing::{debug, info};

use crate::candidates::SearchGrid;
use crate::constants::{
    CLIMB_RATE_RANGE_MPS, DEFAULT_CLIMB_RATE_MPS, DEFAULT_FLIGHT_TIME_MIN, DEFAULT_SPLIT_COUNT,
    DEFAULT_SPLIT_MAX, DEFAULT_SPLIT_MIN, DEFAULT_TOP_K, FLIGHT_TIME_RANGE_MIN,
};
use crate::error::{LandRunError, Result};
use crate::format::{format_record, ResultRecord};
use crate::ranking::{evaluate, evaluate_parallel, rank};
use crate::wind_profile::WindProfile;

// Output format for results
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

// Task parameters
#[derive(Debug, Clone, PartialEq)]
pub struct LandRunInputs {
    pub flight_time_min: u32,  // total task time including climbs
    pub climb_rate_mps: f64,   // constant climb/descent rate
    pub top_k: usize,          // ranked rows to keep
    pub split_count: usize,    // time splits per altitude pair
    pub split_min: f64,        // smallest share of cruise time at h1
    pub split_max: f64,        // largest share of cruise time at h1
    pub parallel: bool,        // score candidates on the rayon pool
}

impl Default for LandRunInputs {
    fn default() -> Self {
        Self {
            flight_time_min: DEFAULT_FLIGHT_TIME_MIN,
            climb_rate_mps: DEFAULT_CLIMB_RATE_MPS,
            top_k: DEFAULT_TOP_K,
            split_count: DEFAULT_SPLIT_COUNT,
            split_min: DEFAULT_SPLIT_MIN,
            split_max: DEFAULT_SPLIT_MAX,
            parallel: false,
        }
    }
}

impl LandRunInputs {
    /// Check every parameter against its accepted range
    pub fn validate(&self) -> Result<()> {
        let (min_time, max_time) = FLIGHT_TIME_RANGE_MIN;
        if !(min_time..=max_time).contains(&self.flight_time_min) {
            return Err(LandRunError::InvalidParameter {
                name: "flight_time_min",
                value: self.flight_time_min as f64,
                reason: format!("must be between {min_time} and {max_time} minutes"),
            });
        }

        let (min_rate, max_rate) = CLIMB_RATE_RANGE_MPS;
        if !(min_rate..=max_rate).contains(&self.climb_rate_mps) {
            return Err(LandRunError::InvalidParameter {
                name: "climb_rate_mps",
                value: self.climb_rate_mps,
                reason: format!("must be between {min_rate} and {max_rate} m/s"),
            });
        }

        if self.top_k == 0 {
            return Err(LandRunError::InvalidParameter {
                name: "top_k",
                value: 0.0,
                reason: "must be at least 1".to_string(),
            });
        }

        if self.split_count == 0 {
            return Err(LandRunError::InvalidParameter {
                name: "split_count",
                value: 0.0,
                reason: "must be at least 1".to_string(),
            });
        }

        if !(self.split_min > 0.0 && self.split_min <= self.split_max && self.split_max < 1.0) {
            return Err(LandRunError::InvalidParameter {
                name: "split_min",
                value: self.split_min,
                reason: format!("split interval [{}, {}] must lie inside (0, 1)", self.split_min, self.split_max),
            });
        }

        Ok(())
    }

    pub fn total_duration_s(&self) -> f64 {
        self.flight_time_min as f64 * 60.0
    }

    pub fn search_grid(&self) -> SearchGrid {
        SearchGrid::new(self.total_duration_s(), self.climb_rate_mps)
            .with_splits(self.split_count, self.split_min, self.split_max)
    }
}

// Search result handed to presentation
#[derive(Debug, Clone, Serialize)]
pub struct LandRunResult {
    pub records: Vec<ResultRecord>,        // descending by area
    pub best_path: Option<[Vector2<f64>; 3]>, // p0, p1, p2 of the best record
    pub candidates_evaluated: usize,
}

impl LandRunResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Land run solver
pub struct LandRunSolver {
    profile: WindProfile,
    inputs: LandRunInputs,
}

impl LandRunSolver {
    pub fn new(profile: WindProfile, inputs: LandRunInputs) -> Result<Self> {
        inputs.validate()?;
        Ok(Self { profile, inputs })
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.inputs.parallel = parallel;
    }

    pub fn profile(&self) -> &WindProfile {
        &self.profile
    }

    pub fn inputs(&self) -> &LandRunInputs {
        &self.inputs
    }

    pub fn solve(&self) -> LandRunResult {
        let grid = self.inputs.search_grid();
        debug!(?grid, "starting land run search");

        let scored = if self.inputs.parallel {
            evaluate_parallel(&self.profile, &grid)
        } else {
            evaluate(&self.profile, &grid)
        };
        let candidates_evaluated = scored.len();

        let ranked = rank(scored, self.inputs.top_k);
        let best_path = ranked.first().map(|best| best.points());
        let records: Vec<ResultRecord> = ranked
            .iter()
            .map(|s| format_record(&self.profile, s))
            .collect();

        match records.first() {
            Some(best) => info!(
                candidates = candidates_evaluated,
                h1 = best.h1,
                h2 = best.h2,
                area_km2 = best.area_km2,
                "land run search finished"
            ),
            None => info!("no feasible altitude combination"),
        }

        LandRunResult {
            records,
            best_path,
            candidates_evaluated,
        }
    }
}

/// Validate `inputs` and run the full search over `profile`
pub fn optimize_land_run(profile: WindProfile, inputs: LandRunInputs) -> Result<LandRunResult> {
    Ok(LandRunSolver::new(profile, inputs)?.solve())
}
