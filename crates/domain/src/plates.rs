use crate::rounding::round2;

/// Tolerance for deciding whether a plate still fits on the remaining load.
const FIT_EPSILON: f64 = 1e-6;

/// A residual below this is treated as an exact match.
pub const MATCH_TOLERANCE: f64 = 0.01;

/// Lightest plate the solver takes into account.
pub const MIN_PLATE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub enum PlateLoad {
    Plan(PlatePlan),
    /// The target is lighter than the bar, `per_side` is negative.
    BelowBar { per_side: f64 },
    /// Target or bar weight is not a finite number.
    Invalid,
}

impl PlateLoad {
    #[must_use]
    pub fn plan(&self) -> Option<&PlatePlan> {
        match self {
            PlateLoad::Plan(plan) => Some(plan),
            PlateLoad::BelowBar { .. } | PlateLoad::Invalid => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatePlan {
    pub bar_weight: f64,
    /// Plates for one side, heaviest first.
    pub entries: Vec<PlateCount>,
    pub residual_per_side: f64,
}

impl PlatePlan {
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.residual_per_side.abs() < MATCH_TOLERANCE
    }

    #[must_use]
    pub fn plates_per_side(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.denomination * f64::from(e.count_per_side))
            .sum()
    }

    /// Weight of the loaded bar.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.bar_weight + 2.0 * self.plates_per_side()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateCount {
    pub denomination: f64,
    pub count_per_side: u32,
}

/// Decompose the load per side into the available plates, heaviest first.
///
/// The greedy choice is not optimal for every set of denominations. With
/// gaps in the small plates a residual may remain even if some other
/// combination would match exactly.
#[must_use]
pub fn solve_plate_load(target_weight: f64, bar_weight: f64, denominations: &[f64]) -> PlateLoad {
    let per_side = (target_weight - bar_weight) / 2.0;

    if !per_side.is_finite() {
        return PlateLoad::Invalid;
    }

    if per_side < 0.0 {
        return PlateLoad::BelowBar { per_side };
    }

    let mut plates = denominations
        .iter()
        .copied()
        .filter(|p| p.is_finite() && *p >= MIN_PLATE)
        .collect::<Vec<_>>();
    plates.sort_by(|a, b| b.total_cmp(a));
    plates.dedup();

    let mut remaining = per_side;
    let mut entries = vec![];

    for denomination in plates {
        let count = ((remaining + FIT_EPSILON) / denomination).floor();
        if count >= 1.0 {
            remaining = round2(remaining - count * denomination);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let count_per_side = count as u32;
            entries.push(PlateCount {
                denomination,
                count_per_side,
            });
        }
    }

    PlateLoad::Plan(PlatePlan {
        bar_weight,
        entries,
        residual_per_side: remaining,
    })
}
