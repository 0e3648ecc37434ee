use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, EstimationError, Name, ReadError, estimate_one_rep_max,
    rounding::round_to,
};

/// A single logged set.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub id: SetID,
    pub timestamp: DateTime<Utc>,
    pub day_name: String,
    pub exercise: Name,
    pub weight: Weight,
    pub reps: Reps,
    pub rpe: Option<RPE>,
    pub unit: Unit,
    pub exercise_type: ExerciseType,
}

impl TrainingSet {
    pub fn e1rm(&self) -> Result<f64, EstimationError> {
        estimate_one_rep_max(f64::from(self.weight), u32::from(self.reps))
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.weight) * f64::from(u32::from(self.reps))
    }

    /// Time of the set on the local wall clock.
    #[must_use]
    pub fn local_time(&self) -> NaiveDateTime {
        self.timestamp.with_timezone(&Local).naive_local()
    }
}

pub trait TrainingSetRepository {
    fn read_sets(&self) -> Result<Vec<TrainingSet>, ReadError>;
    fn create_set(&self, set: TrainingSet) -> Result<TrainingSet, CreateError>;
    /// Delete all sets logged on the given UTC day and return their number.
    fn delete_sets_on(&self, date: NaiveDate) -> Result<usize, DeleteError>;
}

#[derive(Deref, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetID(Uuid);

impl SetID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl fmt::Display for SetID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub const MAX: f64 = 10_000.0;

    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !(value.is_finite() && value > 0.0 && value < Self::MAX) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f64>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be greater than 0 and less than 10000")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Rate of perceived exertion, stored in tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RPE(u8);

impl RPE {
    pub const FIVE: RPE = RPE(50);
    pub const SIX: RPE = RPE(60);
    pub const SEVEN: RPE = RPE(70);
    pub const EIGHT: RPE = RPE(80);
    pub const NINE: RPE = RPE(90);
    pub const TEN: RPE = RPE(100);

    pub fn new(value: f64) -> Result<Self, RPEError> {
        if !(5.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0).round() as u8;

        if v % 5 != 0 || (f64::from(v) - value * 10.0).abs() > 1e-9 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }
}

impl From<RPE> for f64 {
    fn from(value: RPE) -> Self {
        f64::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for RPE {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f64>() {
            Ok(parsed_value) => RPE::new(parsed_value),
            Err(_) => Err(RPEError::ParseError),
        }
    }
}

impl fmt::Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f64::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 5.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    #[default]
    Kg,
    Lb,
}

impl Unit {
    /// Round to the smallest load step that can be built from common plates.
    #[must_use]
    pub fn round_to_plateable(self, weight: f64) -> f64 {
        match self {
            Unit::Kg => round_to(weight * 2.0, 0) / 2.0,
            Unit::Lb => round_to(weight, 0),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ExerciseType {
    #[default]
    Main,
    Accessory,
}
