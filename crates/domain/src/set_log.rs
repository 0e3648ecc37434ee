use chrono::{Duration, NaiveDate, Utc};

use crate::{
    Bests, CreateError, DeleteError, EstimationError, ExerciseType, ExportError, Name,
    PrOutcome, RPE, ReadError, Reps, StorageError, TrainingSet, UpdateError, Weight,
    WeeklyValue, export_csv, weekly_best_e1rm, weekly_volume,
};

pub trait SetLogService {
    fn get_sets(&self) -> Result<Vec<TrainingSet>, ReadError>;
    fn get_bests(&self) -> Result<Bests, ReadError>;
    /// Store a new set, update the bests of its exercise and report whether
    /// it is a PR.
    fn log_set(&self, new_set: NewSet) -> Result<LoggedSet, LogSetError>;
    fn clear_sets_on(&self, date: NaiveDate) -> Result<usize, DeleteError>;

    fn clear_sets_today(&self) -> Result<usize, DeleteError> {
        self.clear_sets_on(Utc::now().date_naive())
    }

    fn get_filtered_sets(&self, filter: &SetFilter) -> Result<Vec<TrainingSet>, ReadError> {
        Ok(filter
            .apply(&self.get_sets()?)
            .into_iter()
            .cloned()
            .collect())
    }

    fn export_sets(&self, filter: &SetFilter) -> Result<String, ExportError> {
        Ok(export_csv(filter.apply(&self.get_sets()?))?)
    }

    fn get_weekly_best_e1rm(
        &self,
        exercise: &Name,
        week_count: usize,
    ) -> Result<Vec<WeeklyValue>, ReadError> {
        Ok(weekly_best_e1rm(&self.get_sets()?, exercise, week_count))
    }

    fn get_weekly_volume(&self, week_count: usize) -> Result<Vec<WeeklyValue>, ReadError> {
        Ok(weekly_volume(&self.get_sets()?, week_count))
    }
}

/// Input of a set to be logged. Identifier, time and unit are assigned on
/// logging.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSet {
    pub day_name: String,
    pub exercise: Name,
    pub weight: Weight,
    pub reps: Reps,
    pub rpe: Option<RPE>,
    pub exercise_type: ExerciseType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedSet {
    pub set: TrainingSet,
    pub pr: PrOutcome,
    /// Rest to take before the next set.
    pub rest: Duration,
}

#[derive(thiserror::Error, Debug)]
pub enum LogSetError {
    #[error(transparent)]
    Estimation(#[from] EstimationError),
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for LogSetError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => LogSetError::Storage(storage),
            ReadError::Other(other) => LogSetError::Other(other),
        }
    }
}

impl From<CreateError> for LogSetError {
    fn from(value: CreateError) -> Self {
        match value {
            CreateError::Conflict => LogSetError::Conflict,
            CreateError::Storage(storage) => LogSetError::Storage(storage),
            CreateError::Other(other) => LogSetError::Other(other),
        }
    }
}

impl From<UpdateError> for LogSetError {
    fn from(value: UpdateError) -> Self {
        match value {
            UpdateError::Storage(storage) => LogSetError::Storage(storage),
            UpdateError::Other(other) => LogSetError::Other(other),
        }
    }
}

/// Selection of logged sets shown in the log view and exported to CSV.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SetFilter {
    pub exercise: Option<Name>,
    /// First local day to include.
    pub from: Option<NaiveDate>,
    /// Last local day to include.
    pub to: Option<NaiveDate>,
}

impl SetFilter {
    #[must_use]
    pub fn matches(&self, set: &TrainingSet) -> bool {
        if let Some(exercise) = &self.exercise {
            if set.exercise != *exercise {
                return false;
            }
        }

        let date = set.local_time().date();

        if self.from.is_some_and(|from| date < from) {
            return false;
        }

        if self.to.is_some_and(|to| date > to) {
            return false;
        }

        true
    }

    /// Matching sets, newest first.
    #[must_use]
    pub fn apply<'a>(&self, sets: &'a [TrainingSet]) -> Vec<&'a TrainingSet> {
        let mut result = sets.iter().filter(|s| self.matches(s)).collect::<Vec<_>>();
        result.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        result
    }
}

/// Remove all sets logged on the given UTC calendar day.
///
/// Returns the number of removed sets.
pub fn remove_sets_on(sets: &mut Vec<TrainingSet>, date: NaiveDate) -> usize {
    let len = sets.len();
    sets.retain(|s| s.timestamp.date_naive() != date);
    len - sets.len()
}

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{ExerciseType, Reps, SetID, Unit, Weight};

    use super::*;

    fn local(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn set(id: u128, exercise: &str, time: NaiveDateTime) -> TrainingSet {
        TrainingSet {
            id: id.into(),
            timestamp: Local
                .from_local_datetime(&time)
                .earliest()
                .unwrap()
                .with_timezone(&Utc),
            day_name: "Upper".to_string(),
            exercise: Name::new(exercise).unwrap(),
            weight: Weight::new(60.0).unwrap(),
            reps: Reps::new(8).unwrap(),
            rpe: None,
            unit: Unit::Kg,
            exercise_type: ExerciseType::Main,
        }
    }

    fn sets() -> Vec<TrainingSet> {
        vec![
            set(1, "Bench Press", local(2024, 3, 4, 7)),
            set(2, "Barbell Row", local(2024, 3, 4, 8)),
            set(3, "Bench Press", local(2024, 3, 6, 23)),
            set(4, "Bench Press", local(2024, 3, 8, 0)),
        ]
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[rstest]
    #[case::everything(SetFilter::default(), vec![4, 3, 2, 1])]
    #[case::exercise(
        SetFilter { exercise: Some(Name::new("Bench Press").unwrap()), ..SetFilter::default() },
        vec![4, 3, 1]
    )]
    #[case::from(
        SetFilter { from: Some(date(2024, 3, 6)), ..SetFilter::default() },
        vec![4, 3]
    )]
    #[case::to_includes_whole_day(
        SetFilter { to: Some(date(2024, 3, 6)), ..SetFilter::default() },
        vec![3, 2, 1]
    )]
    #[case::range_and_exercise(
        SetFilter {
            exercise: Some(Name::new("Barbell Row").unwrap()),
            from: Some(date(2024, 3, 4)),
            to: Some(date(2024, 3, 4)),
        },
        vec![2]
    )]
    #[case::empty_range(
        SetFilter { from: Some(date(2024, 3, 9)), ..SetFilter::default() },
        vec![]
    )]
    fn test_set_filter_apply(#[case] filter: SetFilter, #[case] expected: Vec<u128>) {
        let sets = sets();
        assert_eq!(
            filter
                .apply(&sets)
                .into_iter()
                .map(|s| s.id)
                .collect::<Vec<_>>(),
            expected.into_iter().map(SetID::from).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_remove_sets_on() {
        let mut sets = sets();
        let date = sets[0].timestamp.date_naive();
        let expected = sets
            .iter()
            .filter(|s| s.timestamp.date_naive() != date)
            .cloned()
            .collect::<Vec<_>>();

        let removed = remove_sets_on(&mut sets, date);

        assert_eq!(removed, 4 - expected.len());
        assert_eq!(sets, expected);
    }

    #[test]
    fn test_remove_sets_on_other_day() {
        let mut sets = sets();

        assert_eq!(remove_sets_on(&mut sets, date(2020, 1, 1)), 0);
        assert_eq!(sets.len(), 4);
    }
}
