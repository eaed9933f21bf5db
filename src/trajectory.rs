use serde::Serialize;

use crate::candidates::Candidate;
use crate::constants::M2_PER_KM2;
use crate::wind::{displacement, DisplacementVector};
use crate::wind_profile::WindProfile;

/// Candidate together with its path and enclosed area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTrajectory {
    pub candidate: Candidate,
    pub p0: DisplacementVector, // Launch point, always the origin
    pub p1: DisplacementVector, // End of the first leg
    pub p2: DisplacementVector, // End of the second leg
    pub area_km2: f64,
}

impl ScoredTrajectory {
    pub fn points(&self) -> [DisplacementVector; 3] {
        [self.p0, self.p1, self.p2]
    }
}

/// Area of the triangle (p0, p1, p2) in km², from the 2D cross product
pub fn triangle_area_km2(p0: DisplacementVector, p1: DisplacementVector, p2: DisplacementVector) -> f64 {
    let a = p1 - p0;
    let b = p2 - p0;
    0.5 * (a.x * b.y - b.x * a.y).abs() / M2_PER_KM2
}

/// Fly both legs of `candidate` through `profile`.
///
/// Wind is sampled once per leg at the leg altitude. Drift during the climb
/// itself is not included.
pub fn simulate(profile: &WindProfile, candidate: &Candidate) -> ScoredTrajectory {
    let (dir1, speed1) = profile.direction_and_speed_at(candidate.h1);
    let (dir2, speed2) = profile.direction_and_speed_at(candidate.h2);

    let p0 = DisplacementVector::zeros();
    let p1 = p0 + displacement(dir1, speed1, candidate.t1);
    let p2 = p1 + displacement(dir2, speed2, candidate.t2);

    ScoredTrajectory {
        candidate: *candidate,
        p0,
        p1,
        p2,
        area_km2: triangle_area_km2(p0, p1, p2),
    }
}
