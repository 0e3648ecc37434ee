//! JSON layout of the persisted data.
//!
//! The field names are shared with data written by earlier versions of the
//! app and must not change.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub id: String,
    #[serde(rename = "dateISO")]
    pub date_iso: DateTime<Utc>,
    #[serde(default)]
    pub day: String,
    pub exercise: String,
    pub weight: f64,
    pub reps: u32,
    #[serde(default)]
    pub rpe: Option<f64>,
    pub unit: String,
    #[serde(rename = "type")]
    pub exercise_type: String,
}

impl From<domain::TrainingSet> for TrainingSet {
    fn from(value: domain::TrainingSet) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::TrainingSet> for TrainingSet {
    fn from(value: &domain::TrainingSet) -> Self {
        Self {
            id: value.id.to_string(),
            date_iso: value.timestamp,
            day: value.day_name.clone(),
            exercise: value.exercise.to_string(),
            weight: f64::from(value.weight),
            reps: u32::from(value.reps),
            rpe: value.rpe.map(f64::from),
            unit: value.unit.to_string(),
            exercise_type: value.exercise_type.to_string(),
        }
    }
}

impl TryFrom<TrainingSet> for domain::TrainingSet {
    type Error = TrainingSetError;

    fn try_from(value: TrainingSet) -> Result<Self, Self::Error> {
        Ok(Self {
            // Sets logged without crypto support carry an ID that is no UUID.
            id: Uuid::parse_str(&value.id).map_or_else(|_| domain::SetID::random(), From::from),
            timestamp: value.date_iso,
            day_name: value.day,
            exercise: domain::Name::new(&value.exercise)?,
            weight: domain::Weight::new(value.weight)?,
            reps: domain::Reps::new(value.reps)?,
            rpe: value.rpe.map(domain::RPE::new).transpose()?,
            unit: value.unit.parse().map_err(TrainingSetError::InvalidUnit)?,
            exercise_type: value
                .exercise_type
                .parse()
                .map_err(TrainingSetError::InvalidExerciseType)?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TrainingSetError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidWeight(#[from] domain::WeightError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
    #[error(transparent)]
    InvalidRPE(#[from] domain::RPEError),
    #[error("invalid unit: {0}")]
    InvalidUnit(strum::ParseError),
    #[error("invalid exercise type: {0}")]
    InvalidExerciseType(strum::ParseError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub unit: String,
    pub rest: RestTimes,
    pub bar: f64,
    pub plates: Vec<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(domain::Settings::default())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestTimes {
    pub main: u32,
    pub accessory: u32,
}

impl From<domain::Settings> for Settings {
    fn from(value: domain::Settings) -> Self {
        Self {
            unit: value.unit.to_string(),
            rest: RestTimes {
                main: value.rest.main,
                accessory: value.rest.accessory,
            },
            bar: value.bar_weight,
            plates: value.plates,
        }
    }
}

impl TryFrom<Settings> for domain::Settings {
    type Error = strum::ParseError;

    fn try_from(value: Settings) -> Result<Self, Self::Error> {
        let mut settings = domain::Settings {
            unit: value.unit.parse()?,
            rest: domain::RestTimes {
                main: positive_or(value.rest.main, domain::RestTimes::DEFAULT_MAIN),
                accessory: positive_or(
                    value.rest.accessory,
                    domain::RestTimes::DEFAULT_ACCESSORY,
                ),
            },
            ..domain::Settings::default()
        };
        if value.bar.is_finite() && value.bar > 0.0 {
            settings.bar_weight = value.bar;
        }
        settings.set_plates(value.plates);
        Ok(settings)
    }
}

fn positive_or(seconds: u32, default: u32) -> u32 {
    if seconds > 0 { seconds } else { default }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BestRecord {
    /// Missing if a non-finite estimate was stored.
    #[serde(rename = "e1RM", default)]
    pub e1rm: Option<f64>,
    #[serde(rename = "repsPR", default)]
    pub reps_pr: u32,
}

pub type Bests = BTreeMap<String, BestRecord>;

#[must_use]
pub fn bests_from_domain(bests: &domain::Bests) -> Bests {
    bests
        .iter()
        .map(|(name, record)| {
            (
                name.to_string(),
                BestRecord {
                    e1rm: Some(record.e1rm),
                    reps_pr: record.reps_pr,
                },
            )
        })
        .collect()
}

pub fn bests_to_domain(bests: Bests) -> Result<domain::Bests, domain::NameError> {
    bests
        .into_iter()
        .map(|(name, record)| {
            Ok((
                domain::Name::new(&name)?,
                domain::BestRecord {
                    e1rm: record.e1rm.filter(|e1rm| e1rm.is_finite()).unwrap_or(0.0),
                    reps_pr: record.reps_pr,
                },
            ))
        })
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub days: Vec<ProgramDay>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgramDay {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<ProgramExercise>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgramExercise {
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: String,
}

impl From<&domain::Program> for Program {
    fn from(value: &domain::Program) -> Self {
        Self {
            days: value
                .days
                .iter()
                .map(|day| ProgramDay {
                    name: day.name.to_string(),
                    exercises: day
                        .exercises
                        .iter()
                        .map(|exercise| ProgramExercise {
                            name: exercise.name.to_string(),
                            exercise_type: exercise.exercise_type.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl From<domain::Program> for Program {
    fn from(value: domain::Program) -> Self {
        Self::from(&value)
    }
}

impl TryFrom<Program> for domain::Program {
    type Error = ProgramError;

    fn try_from(value: Program) -> Result<Self, Self::Error> {
        Ok(Self {
            days: value
                .days
                .into_iter()
                .map(|day| {
                    Ok(domain::ProgramDay {
                        name: domain::Name::new(&day.name)?,
                        exercises: day
                            .exercises
                            .into_iter()
                            .map(|exercise| {
                                Ok(domain::ProgramExercise {
                                    name: domain::Name::new(&exercise.name)?,
                                    exercise_type: exercise
                                        .exercise_type
                                        .parse()
                                        .map_err(ProgramError::InvalidExerciseType)?,
                                })
                            })
                            .collect::<Result<Vec<_>, ProgramError>>()?,
                    })
                })
                .collect::<Result<Vec<_>, ProgramError>>()?,
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ProgramError {
    #[error("invalid program JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error("invalid exercise type: {0}")]
    InvalidExerciseType(strum::ParseError),
}

/// Parse a program from JSON text. The document must contain a `days` array.
pub fn import_program(json: &str) -> Result<domain::Program, ProgramError> {
    domain::Program::try_from(serde_json::from_str::<Program>(json)?)
}

pub fn export_program(program: &domain::Program) -> Result<String, ProgramError> {
    Ok(serde_json::to_string_pretty(&Program::from(program))?)
}
