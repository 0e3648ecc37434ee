use crate::{PlateLoad, Reps, Settings, Weight};

/// Fractions of the working weight, ending with the working set itself.
pub const WARMUP_PERCENTAGES: [f64; 6] = [0.40, 0.55, 0.70, 0.80, 0.90, 1.00];
/// Reps of the warm-up sets preceding the working set.
pub const WARMUP_REPS: [u32; 5] = [5, 3, 3, 2, 1];

#[derive(Debug, Clone, PartialEq)]
pub struct WarmupStep {
    pub weight: f64,
    pub reps: u32,
    pub plate_load: PlateLoad,
}

/// Ramp from an empty-ish bar up to the working set.
///
/// Weights are rounded to what can be loaded in the configured unit. Steps
/// below the bar weight are kept and carry a [`PlateLoad::BelowBar`].
#[must_use]
pub fn build_warmup_ramp(
    target_weight: Weight,
    target_reps: Reps,
    settings: &Settings,
) -> Vec<WarmupStep> {
    let target_weight = f64::from(target_weight);

    WARMUP_PERCENTAGES
        .iter()
        .zip(WARMUP_REPS.iter().copied().chain([u32::from(target_reps)]))
        .map(|(percentage, reps)| {
            let weight = settings.unit.round_to_plateable(target_weight * percentage);
            WarmupStep {
                weight,
                reps,
                plate_load: settings.plate_load(weight),
            }
        })
        .collect()
}
