use std::collections::BTreeSet;

use crate::{ExerciseType, Name, ReadError, UpdateError};

pub trait ProgramService {
    fn get_program(&self) -> Result<Program, ReadError>;
    fn replace_program(&self, program: Program) -> Result<Program, UpdateError>;

    fn reset_program(&self) -> Result<Program, UpdateError> {
        self.replace_program(Program::starter())
    }
}

pub trait ProgramRepository {
    fn read_program(&self) -> Result<Program, ReadError>;
    fn replace_program(&self, program: Program) -> Result<Program, UpdateError>;
}

/// Training days with their exercises, in the order they are performed.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub days: Vec<ProgramDay>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramDay {
    pub name: Name,
    pub exercises: Vec<ProgramExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramExercise {
    pub name: Name,
    pub exercise_type: ExerciseType,
}

impl Program {
    /// Two-day upper/lower split offered to new users.
    #[must_use]
    pub fn starter() -> Self {
        Self {
            days: vec![
                day(
                    "Upper",
                    &[
                        ("Bench Press", ExerciseType::Main),
                        ("Barbell Row", ExerciseType::Main),
                        ("Incline DB Press", ExerciseType::Accessory),
                        ("Lateral Raise", ExerciseType::Accessory),
                    ],
                ),
                day(
                    "Lower",
                    &[
                        ("Back Squat", ExerciseType::Main),
                        ("Romanian Deadlift", ExerciseType::Main),
                        ("Leg Press", ExerciseType::Accessory),
                        ("Calf Raise", ExerciseType::Accessory),
                    ],
                ),
            ],
        }
    }

    #[must_use]
    pub fn day(&self, index: usize) -> Option<&ProgramDay> {
        self.days.get(index)
    }

    /// Distinct main exercises of all days, in program order.
    #[must_use]
    pub fn main_exercises(&self) -> Vec<Name> {
        let mut seen = BTreeSet::new();
        self.days
            .iter()
            .flat_map(|d| &d.exercises)
            .filter(|e| e.exercise_type == ExerciseType::Main)
            .filter(|e| seen.insert(e.name.clone()))
            .map(|e| e.name.clone())
            .collect()
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::starter()
    }
}

fn day(name: &str, exercises: &[(&str, ExerciseType)]) -> ProgramDay {
    ProgramDay {
        name: Name::new(name).unwrap_or_else(|_| unreachable!()),
        exercises: exercises
            .iter()
            .map(|(name, exercise_type)| ProgramExercise {
                name: Name::new(name).unwrap_or_else(|_| unreachable!()),
                exercise_type: *exercise_type,
            })
            .collect(),
    }
}
