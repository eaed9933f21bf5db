/// Physical constants and search defaults used by the land run engine

/// Conversion factor: feet to meters
pub const FT_TO_M: f64 = 0.3048;

/// km/h per m/s; speeds are divided by this
pub const KMH_PER_MPS: f64 = 3.6;

/// Square meters per square kilometer
pub const M2_PER_KM2: f64 = 1_000_000.0;

/// Number of ranked combinations handed to presentation
pub const DEFAULT_TOP_K: usize = 10;

/// Number of time-split fractions tried per altitude pair
pub const DEFAULT_SPLIT_COUNT: usize = 9;

/// Lower bound of the time-split interval (fraction of cruise time spent at h1)
pub const DEFAULT_SPLIT_MIN: f64 = 0.1;

/// Upper bound of the time-split interval
pub const DEFAULT_SPLIT_MAX: f64 = 0.9;

// Task parameters

/// Default total flight time in minutes
pub const DEFAULT_FLIGHT_TIME_MIN: u32 = 45;

/// Accepted flight time range in minutes (inclusive)
pub const FLIGHT_TIME_RANGE_MIN: (u32, u32) = (5, 90);

/// Default climb/descent rate in m/s
pub const DEFAULT_CLIMB_RATE_MPS: f64 = 1.0;

/// Accepted climb rate range in m/s (inclusive)
pub const CLIMB_RATE_RANGE_MPS: (f64, f64) = (0.1, 10.0);
