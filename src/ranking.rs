use rayon::prelude::*;
use tracing::debug;

use crate::candidates::{generate, Candidate, SearchGrid};
use crate::trajectory::{simulate, ScoredTrajectory};
use crate::wind_profile::WindProfile;

/// Score every feasible candidate, in generation order
pub fn evaluate(profile: &WindProfile, grid: &SearchGrid) -> Vec<ScoredTrajectory> {
    let scored: Vec<ScoredTrajectory> = generate(profile, grid)
        .map(|c| simulate(profile, &c))
        .collect();

    debug!(
        altitudes = profile.len(),
        candidates = scored.len(),
        "evaluated land run candidates"
    );
    scored
}

/// Parallel variant of [`evaluate`]. Output order matches the sequential one.
pub fn evaluate_parallel(profile: &WindProfile, grid: &SearchGrid) -> Vec<ScoredTrajectory> {
    let candidates: Vec<Candidate> = generate(profile, grid).collect();
    let scored: Vec<ScoredTrajectory> = candidates
        .par_iter()
        .map(|c| simulate(profile, c))
        .collect();

    debug!(
        altitudes = profile.len(),
        candidates = scored.len(),
        threads = rayon::current_num_threads(),
        "evaluated land run candidates in parallel"
    );
    scored
}

/// Keep the `k` largest areas, descending.
///
/// The sort is stable, so equal areas stay in generation order. Ordering
/// uses the unrounded area, so two candidates that display the same
/// rounded `Area_km2` are still ordered by their exact areas.
pub fn rank(mut scored: Vec<ScoredTrajectory>, k: usize) -> Vec<ScoredTrajectory> {
    scored.sort_by(|a, b| b.area_km2.total_cmp(&a.area_km2));
    scored.truncate(k);
    scored
}
