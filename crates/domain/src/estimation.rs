//! Estimation of the one-repetition maximum (e1RM) from a single set.

/// Brzycki diverges at this number of reps.
pub const BRZYCKI_LIMIT: u32 = 37;

/// Estimated one-repetition maximum as the mean of the Epley and Brzycki
/// formulas.
///
/// A single repetition is an actual maximum, so the weight itself is
/// returned for `reps == 1`.
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> Result<f64, EstimationError> {
    RepMaxEstimate::new(weight, reps).map(|estimate| estimate.blended())
}

/// Both estimators for one set, as shown by the rep-max calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepMaxEstimate {
    pub weight: f64,
    pub reps: u32,
    pub epley: f64,
    pub brzycki: f64,
}

impl RepMaxEstimate {
    pub fn new(weight: f64, reps: u32) -> Result<Self, EstimationError> {
        if !(weight.is_finite() && weight > 0.0) {
            return Err(EstimationError::InvalidWeight(weight));
        }

        if reps == 0 || reps >= BRZYCKI_LIMIT {
            return Err(EstimationError::InvalidReps(reps));
        }

        let r = f64::from(reps);

        Ok(Self {
            weight,
            reps,
            epley: weight * (1.0 + r / 30.0),
            brzycki: weight * 36.0 / (37.0 - r),
        })
    }

    /// Mean of both formulas, except for singles where the weight is
    /// returned unchanged (the plain mean would give 101.67 for 100 x 1).
    #[must_use]
    pub fn blended(&self) -> f64 {
        if self.reps == 1 {
            self.weight
        } else {
            (self.epley + self.brzycki) / 2.0
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum EstimationError {
    #[error("Weight must be a positive number ({0})")]
    InvalidWeight(f64),
    #[error("Reps must be in the range 1 to 36 ({0})")]
    InvalidReps(u32),
}
