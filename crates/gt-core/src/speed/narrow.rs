//! Candidate narrowing from an observed footstep tempo.

use std::collections::BTreeSet;

use gt_catalog::GhostKind;

use crate::speed::profile::GhostProfile;
use crate::speed::tempo::TempoRegression;
use crate::state::SpeedMultiplier;

/// Tolerance either side of the estimated speed, as a fraction.
pub const TEMPO_LEEWAY: f64 = 0.05;

/// Candidates whose profile is incompatible with an observed average tempo.
///
/// The tempo is regressed back to a 100%-multiplier speed and rescaled by
/// the active multiplier; a candidate is excluded only when every marker in
/// its profile misses the leeway window around that speed. The caller folds
/// the result into the manual exclusions, keeping it reversible on its own.
pub fn narrow_by_tempo(
    profiles: &[GhostProfile],
    regression: &TempoRegression,
    average_bpm: f64,
    multiplier: SpeedMultiplier,
) -> BTreeSet<GhostKind> {
    let adjusted = regression.speed_from_tempo(average_bpm) / multiplier.factor();
    let lo = adjusted * (1.0 - TEMPO_LEEWAY);
    let hi = adjusted * (1.0 + TEMPO_LEEWAY);

    profiles
        .iter()
        .filter(|profile| !profile.markers.iter().any(|marker| marker.overlaps(lo, hi)))
        .map(|profile| profile.kind)
        .collect()
}
