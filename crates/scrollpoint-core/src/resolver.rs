#![forbid(unsafe_code)]

//! Nearest-checkpoint resolution.
//!
//! Maps a progress value to the index of the checkpoint whose
//! `target_progress` is closest by absolute distance. The registry is a
//! fixed set of at most a handful of entries, so a linear scan is both
//! sufficient and the simplest thing that is obviously correct; ties break
//! toward the lowest index, which keeps resolution deterministic at exact
//! midpoints.

use crate::registry::CheckpointRegistry;

/// Resolve the index of the checkpoint nearest to `progress`.
///
/// Total over any finite `progress`; values outside `[0.0, 1.0]` are
/// clamped before the scan. The registry is non-empty by construction, so
/// a valid index is always returned.
#[must_use]
pub fn resolve_nearest(progress: f32, registry: &CheckpointRegistry) -> usize {
    let progress = progress.clamp(0.0, 1.0);

    let mut best_index = 0;
    let mut best_distance = f32::INFINITY;
    for (index, entry) in registry.all().iter().enumerate() {
        let distance = (progress - entry.target_progress).abs();
        // Strict comparison: the first (lowest) index wins ties.
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    best_index
}
