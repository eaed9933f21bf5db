//! # Land Run Engine
//!
//! Finds the pair of flight altitudes and the time split between them that
//! maximize the triangle area of a balloon land run flown in a fixed total
//! time, given an altitude-indexed wind profile and a constant climb rate.

// Re-export the main types and functions
pub use cli_api::{optimize_land_run, LandRunInputs, LandRunResult, LandRunSolver, OutputFormat};
pub use candidates::{generate, Candidate, SearchGrid};
pub use error::{LandRunError, Result};
pub use format::{format_mmss, format_record, ResultRecord};
pub use profile_csv::{load_profile_from_path, load_profile_from_reader};
pub use ranking::{evaluate, evaluate_parallel, rank};
pub use trajectory::{simulate, ScoredTrajectory};
pub use wind::{displacement, wind_vector, DisplacementVector};
pub use wind_profile::{WindProfile, WindSample};

// Module declarations
pub mod cli_api;
pub mod constants;
pub mod candidates;
pub mod error;
pub mod format;
pub mod profile_csv;
pub mod ranking;
pub mod trajectory;
pub mod wind;
pub mod wind_profile;
