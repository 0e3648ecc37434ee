use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, Local, NaiveDateTime};
use log::warn;

use crate::{Name, TrainingSet, WeekLabel};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyValue {
    pub week: WeekLabel,
    pub value: f64,
}

/// Best e1RM per week for one exercise.
///
/// Only weeks containing sets of the exercise are included. The result is
/// sorted by week and limited to the last `week_count` weeks with data.
#[must_use]
pub fn weekly_best_e1rm(
    history: &[TrainingSet],
    exercise: &Name,
    week_count: usize,
) -> Vec<WeeklyValue> {
    let mut best: BTreeMap<WeekLabel, f64> = BTreeMap::new();

    for set in history.iter().filter(|s| s.exercise == *exercise) {
        let e1rm = match set.e1rm() {
            Ok(e1rm) => e1rm,
            Err(err) => {
                warn!("ignoring set {} in e1RM trend: {err}", set.id);
                continue;
            }
        };
        best.entry(WeekLabel::from_datetime(set.local_time()))
            .and_modify(|value| *value = value.max(e1rm))
            .or_insert(e1rm);
    }

    let skip = best.len().saturating_sub(week_count);
    best.into_iter()
        .skip(skip)
        .map(|(week, value)| WeeklyValue { week, value })
        .collect()
}

/// Total volume (weight x reps) of all exercises for the last `week_count`
/// weeks up to today.
#[must_use]
pub fn weekly_volume(history: &[TrainingSet], week_count: usize) -> Vec<WeeklyValue> {
    weekly_volume_at(history, week_count, Local::now().naive_local())
}

/// Total volume per week for `week_count` weeks ending in the week of `now`.
///
/// Every week is included, weeks without sets have a volume of zero.
#[must_use]
pub fn weekly_volume_at(
    history: &[TrainingSet],
    week_count: usize,
    now: NaiveDateTime,
) -> Vec<WeeklyValue> {
    let mut volume: BTreeMap<WeekLabel, f64> = BTreeMap::new();

    for set in history {
        *volume
            .entry(WeekLabel::from_datetime(set.local_time()))
            .or_default() += set.volume();
    }

    (0..week_count)
        .rev()
        .filter_map(|i| {
            #[allow(clippy::cast_possible_wrap)]
            now.checked_sub_signed(Duration::weeks(i as i64))
        })
        .map(|date| {
            let week = WeekLabel::from_datetime(date);
            WeeklyValue {
                week,
                value: volume.get(&week).copied().unwrap_or_default(),
            }
        })
        .collect()
}

/// Sorted names of all exercises in the history.
#[must_use]
pub fn exercise_names(history: &[TrainingSet]) -> Vec<Name> {
    history
        .iter()
        .map(|s| s.exercise.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
