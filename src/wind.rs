use nalgebra::Vector2;

use crate::constants::KMH_PER_MPS;

/// Planar vector in (east, north) components
pub type DisplacementVector = Vector2<f64>;

/// Drift rate in m/s for a wind blowing towards `direction_deg` at `speed_kmh`.
///
/// Compass convention: 0° is north and bearings increase clockwise, so
/// east = v·sin(θ) and north = v·cos(θ).
pub fn wind_vector(direction_deg: f64, speed_kmh: f64) -> DisplacementVector {
    let speed_mps = speed_kmh / KMH_PER_MPS;
    let direction_rad = direction_deg.to_radians();

    Vector2::new(
        speed_mps * direction_rad.sin(), // east
        speed_mps * direction_rad.cos(), // north
    )
}

/// Drift in meters after `duration_s` in a constant wind
pub fn displacement(direction_deg: f64, speed_kmh: f64, duration_s: f64) -> DisplacementVector {
    wind_vector(direction_deg, speed_kmh) * duration_s
}
