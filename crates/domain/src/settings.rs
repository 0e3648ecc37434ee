use chrono::Duration;

use crate::{
    ExerciseType, MIN_PLATE, PlateLoad, ReadError, Reps, Unit, UpdateError, WarmupStep, Weight,
    build_warmup_ramp, solve_plate_load,
};

/// Plates offered for selection, per side.
pub const AVAILABLE_PLATES: [f64; 7] = [25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25];

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, ReadError>;
    fn replace_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;

    /// Plates per side for the target weight. Without `bar_weight` the
    /// configured bar is used.
    fn get_plate_load(
        &self,
        target_weight: Weight,
        bar_weight: Option<f64>,
    ) -> Result<PlateLoad, ReadError> {
        let settings = self.get_settings()?;
        Ok(solve_plate_load(
            f64::from(target_weight),
            bar_weight.unwrap_or(settings.bar_weight),
            &settings.plates,
        ))
    }

    fn get_warmup_ramp(
        &self,
        target_weight: Weight,
        target_reps: Reps,
    ) -> Result<Vec<WarmupStep>, ReadError> {
        Ok(build_warmup_ramp(
            target_weight,
            target_reps,
            &self.get_settings()?,
        ))
    }

    fn get_rest_duration(&self, exercise_type: ExerciseType) -> Result<Duration, ReadError> {
        Ok(self.get_settings()?.rest_duration(exercise_type))
    }
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, ReadError>;
    fn replace_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub unit: Unit,
    pub rest: RestTimes,
    pub bar_weight: f64,
    /// Plates per side, heaviest first.
    pub plates: Vec<f64>,
}

impl Settings {
    pub const DEFAULT_BAR_WEIGHT: f64 = 20.0;

    #[must_use]
    pub fn rest_duration(&self, exercise_type: ExerciseType) -> Duration {
        Duration::seconds(i64::from(match exercise_type {
            ExerciseType::Main => self.rest.main,
            ExerciseType::Accessory => self.rest.accessory,
        }))
    }

    pub fn set_plates(&mut self, plates: impl IntoIterator<Item = f64>) {
        let mut plates = plates
            .into_iter()
            .filter(|p| p.is_finite() && *p >= MIN_PLATE)
            .collect::<Vec<_>>();
        plates.sort_by(|a, b| b.total_cmp(a));
        plates.dedup();
        self.plates = plates;
    }

    /// Keep the current bar weight if the input is not a positive number.
    pub fn set_bar_weight(&mut self, input: &str) {
        if let Some(bar_weight) = parse_positive(input) {
            self.bar_weight = bar_weight;
        }
    }

    #[must_use]
    pub fn plate_load(&self, target_weight: f64) -> PlateLoad {
        solve_plate_load(target_weight, self.bar_weight, &self.plates)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit: Unit::Kg,
            rest: RestTimes::default(),
            bar_weight: Self::DEFAULT_BAR_WEIGHT,
            plates: AVAILABLE_PLATES.to_vec(),
        }
    }
}

/// Rest between sets in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestTimes {
    pub main: u32,
    pub accessory: u32,
}

impl RestTimes {
    pub const DEFAULT_MAIN: u32 = 180;
    pub const DEFAULT_ACCESSORY: u32 = 90;

    /// Fields that are not a positive number of seconds fall back to the
    /// defaults.
    #[must_use]
    pub fn from_input(main: &str, accessory: &str) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seconds = |input: &str, default: u32| {
            parse_positive(input)
                .map(|s| s.round() as u32)
                .filter(|s| *s > 0)
                .unwrap_or(default)
        };
        Self {
            main: seconds(main, Self::DEFAULT_MAIN),
            accessory: seconds(accessory, Self::DEFAULT_ACCESSORY),
        }
    }
}

impl Default for RestTimes {
    fn default() -> Self {
        Self {
            main: Self::DEFAULT_MAIN,
            accessory: Self::DEFAULT_ACCESSORY,
        }
    }
}

fn parse_positive(input: &str) -> Option<f64> {
    input
        .replace(',', ".")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
