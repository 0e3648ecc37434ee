use std::collections::BTreeMap;

use derive_more::{Deref, Into};

use crate::{EstimationError, Name, ReadError, TrainingSet, UpdateError};

pub trait BestsRepository {
    fn read_bests(&self) -> Result<Bests, ReadError>;
    fn replace_bests(&self, bests: Bests) -> Result<Bests, UpdateError>;
}

/// A new set counts as a reps PR only if its weight is at least this share
/// of the heaviest weight previously logged for the exercise.
pub const REPS_PR_WEIGHT_RATIO: f64 = 0.98;

/// Best values per exercise. Values only ever increase.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BestRecord {
    pub e1rm: f64,
    pub reps_pr: u32,
}

#[derive(Deref, Into, Debug, Default, Clone, PartialEq)]
pub struct Bests(BTreeMap<Name, BestRecord>);

impl Bests {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn record(&self, exercise: &Name) -> BestRecord {
        self.0.get(exercise).copied().unwrap_or_default()
    }
}

impl From<BTreeMap<Name, BestRecord>> for Bests {
    fn from(value: BTreeMap<Name, BestRecord>) -> Self {
        Self(value)
    }
}

impl FromIterator<(Name, BestRecord)> for Bests {
    fn from_iter<I: IntoIterator<Item = (Name, BestRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrOutcome {
    pub e1rm: f64,
    pub e1rm_pr: bool,
    pub reps_pr: bool,
}

impl PrOutcome {
    #[must_use]
    pub fn is_pr(&self) -> bool {
        self.e1rm_pr || self.reps_pr
    }
}

/// Compare a new set against the bests of its exercise and raise them where
/// the set exceeds them.
///
/// `history` holds the previously logged sets. The new set is ignored if it is
/// already part of it.
pub fn register_set(
    history: &[TrainingSet],
    bests: &mut Bests,
    new_set: &TrainingSet,
) -> Result<PrOutcome, EstimationError> {
    let e1rm = new_set.e1rm()?;
    let mut record = bests.record(&new_set.exercise);

    let e1rm_pr = e1rm > record.e1rm;
    if e1rm_pr {
        record.e1rm = e1rm;
    }

    let top_weight = top_weight(history, &new_set.exercise, new_set);
    let reps = u32::from(new_set.reps);
    let reps_pr =
        reps > record.reps_pr && f64::from(new_set.weight) >= top_weight * REPS_PR_WEIGHT_RATIO;
    if reps_pr {
        record.reps_pr = reps;
    }

    bests.0.insert(new_set.exercise.clone(), record);

    Ok(PrOutcome {
        e1rm,
        e1rm_pr,
        reps_pr,
    })
}

fn top_weight(history: &[TrainingSet], exercise: &Name, new_set: &TrainingSet) -> f64 {
    history
        .iter()
        .filter(|s| s.id != new_set.id && s.exercise == *exercise)
        .map(|s| f64::from(s.weight))
        .fold(0.0, f64::max)
}
