use chrono::{NaiveDate, Utc};
use log::{debug, error};

use crate::{
    Bests, BestsRepository, DeleteError, LogSetError, LoggedSet, NewSet, Program,
    ProgramRepository, ProgramService, ReadError, SetID, SetLogService, Settings,
    SettingsRepository, SettingsService, TrainingSet, TrainingSetRepository, UpdateError,
    register_set,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> SetLogService for Service<R>
where
    R: TrainingSetRepository + BestsRepository + SettingsRepository,
{
    fn get_sets(&self) -> Result<Vec<TrainingSet>, ReadError> {
        log_on_error!(self.repository.read_sets(), ReadError, "get", "sets")
    }

    fn get_bests(&self) -> Result<Bests, ReadError> {
        log_on_error!(self.repository.read_bests(), ReadError, "get", "bests")
    }

    fn log_set(&self, new_set: NewSet) -> Result<LoggedSet, LogSetError> {
        log_on_error!(self.store_set(new_set), LogSetError, "log", "set")
    }

    fn clear_sets_on(&self, date: NaiveDate) -> Result<usize, DeleteError> {
        log_on_error!(
            self.repository.delete_sets_on(date),
            DeleteError,
            "clear",
            "sets"
        )
    }
}

impl<R> Service<R>
where
    R: TrainingSetRepository + BestsRepository + SettingsRepository,
{
    fn store_set(&self, new_set: NewSet) -> Result<LoggedSet, LogSetError> {
        let settings = self.repository.read_settings()?;
        let history = self.repository.read_sets()?;
        let mut bests = self.repository.read_bests()?;

        let set = TrainingSet {
            id: SetID::random(),
            timestamp: Utc::now(),
            day_name: new_set.day_name,
            exercise: new_set.exercise,
            weight: new_set.weight,
            reps: new_set.reps,
            rpe: new_set.rpe,
            unit: settings.unit,
            exercise_type: new_set.exercise_type,
        };

        let pr = register_set(&history, &mut bests, &set)?;
        // Stored bests must cover every stored set.
        self.repository.replace_bests(bests)?;
        let set = self.repository.create_set(set)?;

        if pr.is_pr() {
            debug!("new PR for {}: e1RM {:.1}", set.exercise, pr.e1rm);
        }

        Ok(LoggedSet {
            rest: settings.rest_duration(set.exercise_type),
            set,
            pr,
        })
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Result<Settings, ReadError> {
        log_on_error!(
            self.repository.read_settings(),
            ReadError,
            "get",
            "settings"
        )
    }

    fn replace_settings(&self, settings: Settings) -> Result<Settings, UpdateError> {
        log_on_error!(
            self.repository.replace_settings(settings),
            UpdateError,
            "replace",
            "settings"
        )
    }
}

impl<R: ProgramRepository> ProgramService for Service<R> {
    fn get_program(&self) -> Result<Program, ReadError> {
        log_on_error!(self.repository.read_program(), ReadError, "get", "program")
    }

    fn replace_program(&self, program: Program) -> Result<Program, UpdateError> {
        log_on_error!(
            self.repository.replace_program(program),
            UpdateError,
            "replace",
            "program"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use assert_approx_eq::assert_approx_eq;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use crate::{
        CreateError, ExerciseType, Name, PlateLoad, RPE, Reps, StorageError, Unit, Weight,
        remove_sets_on,
    };

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        sets: RefCell<Vec<TrainingSet>>,
        bests: RefCell<Bests>,
        settings: RefCell<Settings>,
        program: RefCell<Option<Program>>,
        unavailable: bool,
        read_only_bests: bool,
    }

    impl FakeRepository {
        fn check(&self) -> Result<(), StorageError> {
            if self.unavailable {
                Err(StorageError::Unavailable)
            } else {
                Ok(())
            }
        }
    }

    impl TrainingSetRepository for FakeRepository {
        fn read_sets(&self) -> Result<Vec<TrainingSet>, ReadError> {
            self.check()?;
            Ok(self.sets.borrow().clone())
        }

        fn create_set(&self, set: TrainingSet) -> Result<TrainingSet, CreateError> {
            self.check()?;
            if self.sets.borrow().iter().any(|s| s.id == set.id) {
                return Err(CreateError::Conflict);
            }
            self.sets.borrow_mut().push(set.clone());
            Ok(set)
        }

        fn delete_sets_on(&self, date: NaiveDate) -> Result<usize, DeleteError> {
            self.check()?;
            Ok(remove_sets_on(&mut self.sets.borrow_mut(), date))
        }
    }

    impl BestsRepository for FakeRepository {
        fn read_bests(&self) -> Result<Bests, ReadError> {
            self.check()?;
            Ok(self.bests.borrow().clone())
        }

        fn replace_bests(&self, bests: Bests) -> Result<Bests, UpdateError> {
            self.check()?;
            if self.read_only_bests {
                return Err(StorageError::Unavailable.into());
            }
            *self.bests.borrow_mut() = bests.clone();
            Ok(bests)
        }
    }

    impl SettingsRepository for FakeRepository {
        fn read_settings(&self) -> Result<Settings, ReadError> {
            self.check()?;
            Ok(self.settings.borrow().clone())
        }

        fn replace_settings(&self, settings: Settings) -> Result<Settings, UpdateError> {
            self.check()?;
            *self.settings.borrow_mut() = settings.clone();
            Ok(settings)
        }
    }

    impl ProgramRepository for FakeRepository {
        fn read_program(&self) -> Result<Program, ReadError> {
            self.check()?;
            Ok(self.program.borrow().clone().unwrap_or_default())
        }

        fn replace_program(&self, program: Program) -> Result<Program, UpdateError> {
            self.check()?;
            *self.program.borrow_mut() = Some(program.clone());
            Ok(program)
        }
    }

    fn new_set(exercise: &str, weight: f64, reps: u32, exercise_type: ExerciseType) -> NewSet {
        NewSet {
            day_name: "Lower".to_string(),
            exercise: Name::new(exercise).unwrap(),
            weight: Weight::new(weight).unwrap(),
            reps: Reps::new(reps).unwrap(),
            rpe: Some(RPE::EIGHT),
            exercise_type,
        }
    }

    #[test]
    fn test_log_set() {
        let service = Service::new(FakeRepository::default());

        let logged = service
            .log_set(new_set("Back Squat", 100.0, 5, ExerciseType::Main))
            .unwrap();

        assert!(logged.pr.e1rm_pr);
        assert!(logged.pr.reps_pr);
        assert_approx_eq!(logged.pr.e1rm, 114.583_333, 1e-5);
        assert_eq!(logged.rest, Duration::seconds(180));
        assert_eq!(logged.set.unit, Unit::Kg);
        assert_eq!(service.get_sets().unwrap(), vec![logged.set.clone()]);

        let bests = service.get_bests().unwrap();
        let record = bests.record(&Name::new("Back Squat").unwrap());
        assert_approx_eq!(record.e1rm, 114.583_333, 1e-5);
        assert_eq!(record.reps_pr, 5);
    }

    #[test]
    fn test_log_set_repeated() {
        let service = Service::new(FakeRepository::default());

        service
            .log_set(new_set("Back Squat", 100.0, 5, ExerciseType::Main))
            .unwrap();
        let logged = service
            .log_set(new_set("Back Squat", 100.0, 5, ExerciseType::Main))
            .unwrap();

        assert!(!logged.pr.is_pr());
        assert_eq!(service.get_sets().unwrap().len(), 2);
    }

    #[test]
    fn test_log_set_uses_settings() {
        let repository = FakeRepository::default();
        *repository.settings.borrow_mut() = Settings {
            unit: Unit::Lb,
            ..Settings::default()
        };
        let service = Service::new(repository);

        let logged = service
            .log_set(new_set("Calf Raise", 135.0, 12, ExerciseType::Accessory))
            .unwrap();

        assert_eq!(logged.set.unit, Unit::Lb);
        assert_eq!(logged.rest, Duration::seconds(90));
    }

    #[test]
    fn test_log_set_unestimable() {
        let service = Service::new(FakeRepository::default());

        assert!(matches!(
            service.log_set(new_set("Calf Raise", 40.0, 40, ExerciseType::Accessory)),
            Err(LogSetError::Estimation(_))
        ));
        assert!(service.get_sets().unwrap().is_empty());
        assert!(service.get_bests().unwrap().is_empty());
    }

    #[test]
    fn test_log_set_storage_unavailable() {
        let service = Service::new(FakeRepository {
            unavailable: true,
            ..FakeRepository::default()
        });

        assert!(matches!(
            service.log_set(new_set("Back Squat", 100.0, 5, ExerciseType::Main)),
            Err(LogSetError::Storage(StorageError::Unavailable))
        ));
    }

    #[test]
    fn test_log_set_bests_not_stored() {
        let service = Service::new(FakeRepository {
            read_only_bests: true,
            ..FakeRepository::default()
        });

        assert!(matches!(
            service.log_set(new_set("Back Squat", 100.0, 5, ExerciseType::Main)),
            Err(LogSetError::Storage(StorageError::Unavailable))
        ));
        assert!(service.get_sets().unwrap().is_empty());
        assert!(service.get_bests().unwrap().is_empty());
    }

    #[test]
    fn test_clear_sets_today() {
        let service = Service::new(FakeRepository::default());
        service
            .log_set(new_set("Back Squat", 100.0, 5, ExerciseType::Main))
            .unwrap();

        assert_eq!(service.clear_sets_today().unwrap(), 1);
        assert!(service.get_sets().unwrap().is_empty());
        assert!(!service.get_bests().unwrap().is_empty());
    }

    #[test]
    fn test_get_weekly_best_e1rm() {
        let service = Service::new(FakeRepository::default());
        service
            .log_set(new_set("Back Squat", 100.0, 5, ExerciseType::Main))
            .unwrap();
        service
            .log_set(new_set("Back Squat", 80.0, 5, ExerciseType::Main))
            .unwrap();

        let trend = service
            .get_weekly_best_e1rm(&Name::new("Back Squat").unwrap(), 8)
            .unwrap();

        assert_eq!(trend.len(), 1);
        assert_approx_eq!(trend[0].value, 114.583_333, 1e-5);
    }

    #[test]
    fn test_get_weekly_volume() {
        let service = Service::new(FakeRepository::default());
        service
            .log_set(new_set("Back Squat", 100.0, 5, ExerciseType::Main))
            .unwrap();

        let volume = service.get_weekly_volume(4).unwrap();

        assert_eq!(volume.len(), 4);
        assert_approx_eq!(volume[3].value, 500.0);
    }

    #[test]
    fn test_export_sets() {
        let service = Service::new(FakeRepository::default());
        service
            .log_set(new_set("Back Squat", 100.0, 5, ExerciseType::Main))
            .unwrap();

        let csv = service.export_sets(&crate::SetFilter::default()).unwrap();

        assert_eq!(csv.lines().count(), 2);
        assert!(csv.ends_with("\"Back Squat\",\"100\",\"5\",\"8\",\"kg\",\"114.6\"\n"));
    }

    #[test]
    fn test_get_plate_load() {
        let service = Service::new(FakeRepository::default());

        let load = service
            .get_plate_load(Weight::new(60.0).unwrap(), Some(15.0))
            .unwrap();

        assert_approx_eq!(load.plan().unwrap().total_weight(), 60.0);
        assert_approx_eq!(load.plan().unwrap().bar_weight, 15.0);
        assert!(matches!(
            service
                .get_plate_load(Weight::new(15.0).unwrap(), None)
                .unwrap(),
            PlateLoad::BelowBar { .. }
        ));
    }

    #[test]
    fn test_get_warmup_ramp() {
        let service = Service::new(FakeRepository::default());

        let steps = service
            .get_warmup_ramp(Weight::new(100.0).unwrap(), Reps::new(3).unwrap())
            .unwrap();

        assert_eq!(steps.len(), 6);
        assert_eq!(steps[5].reps, 3);
    }

    #[test]
    fn test_get_rest_duration() {
        let service = Service::new(FakeRepository::default());
        let mut settings = service.get_settings().unwrap();
        settings.rest.accessory = 75;
        service.replace_settings(settings).unwrap();

        assert_eq!(
            service.get_rest_duration(ExerciseType::Accessory).unwrap(),
            Duration::seconds(75)
        );
    }

    #[test]
    fn test_reset_program() {
        let service = Service::new(FakeRepository::default());
        service.replace_program(Program { days: vec![] }).unwrap();

        assert!(service.get_program().unwrap().days.is_empty());
        assert_eq!(service.reset_program().unwrap(), Program::starter());
        assert_eq!(service.get_program().unwrap(), Program::starter());
    }
}
