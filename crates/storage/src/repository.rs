use chrono::NaiveDate;
use log::debug;

use crate::{Key, KeyValueStore, domain, records};

/// Domain repositories on top of a key-value store.
pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read_records(&self) -> Result<Vec<domain::TrainingSet>, domain::StorageError> {
        self.store
            .get::<Vec<records::TrainingSet>>(Key::Sets)?
            .unwrap_or_default()
            .into_iter()
            .map(domain::TrainingSet::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| corrupted(Key::Sets, &err))
    }

    fn write_records(&self, sets: &[domain::TrainingSet]) -> Result<(), domain::StorageError> {
        self.store.set(
            Key::Sets,
            &sets
                .iter()
                .map(records::TrainingSet::from)
                .collect::<Vec<_>>(),
        )
    }
}

fn corrupted(key: Key, err: &dyn std::error::Error) -> domain::StorageError {
    domain::StorageError::Corrupted {
        key: key.to_string(),
        reason: err.to_string(),
    }
}

impl<S: KeyValueStore> domain::TrainingSetRepository for Repository<S> {
    fn read_sets(&self) -> Result<Vec<domain::TrainingSet>, domain::ReadError> {
        Ok(self.read_records()?)
    }

    fn create_set(
        &self,
        set: domain::TrainingSet,
    ) -> Result<domain::TrainingSet, domain::CreateError> {
        let mut sets = self.read_records()?;
        if sets.iter().any(|s| s.id == set.id) {
            return Err(domain::CreateError::Conflict);
        }
        sets.push(set.clone());
        self.write_records(&sets)?;
        Ok(set)
    }

    fn delete_sets_on(&self, date: NaiveDate) -> Result<usize, domain::DeleteError> {
        let mut sets = self.read_records()?;
        let removed = domain::remove_sets_on(&mut sets, date);
        if removed > 0 {
            self.write_records(&sets)?;
        }
        debug!("removed {removed} sets of {date}");
        Ok(removed)
    }
}

impl<S: KeyValueStore> domain::BestsRepository for Repository<S> {
    fn read_bests(&self) -> Result<domain::Bests, domain::ReadError> {
        let bests = self
            .store
            .get::<records::Bests>(Key::Bests)?
            .unwrap_or_default();
        Ok(records::bests_to_domain(bests).map_err(|err| corrupted(Key::Bests, &err))?)
    }

    fn replace_bests(&self, bests: domain::Bests) -> Result<domain::Bests, domain::UpdateError> {
        self.store
            .set(Key::Bests, &records::bests_from_domain(&bests))?;
        Ok(bests)
    }
}

impl<S: KeyValueStore> domain::SettingsRepository for Repository<S> {
    fn read_settings(&self) -> Result<domain::Settings, domain::ReadError> {
        match self.store.get::<records::Settings>(Key::Settings)? {
            Some(settings) => Ok(domain::Settings::try_from(settings)
                .map_err(|err| corrupted(Key::Settings, &err))?),
            None => Ok(domain::Settings::default()),
        }
    }

    fn replace_settings(
        &self,
        settings: domain::Settings,
    ) -> Result<domain::Settings, domain::UpdateError> {
        self.store
            .set(Key::Settings, &records::Settings::from(settings.clone()))?;
        Ok(settings)
    }
}

impl<S: KeyValueStore> domain::ProgramRepository for Repository<S> {
    fn read_program(&self) -> Result<domain::Program, domain::ReadError> {
        match self.store.get::<records::Program>(Key::Program)? {
            Some(program) => Ok(domain::Program::try_from(program)
                .map_err(|err| corrupted(Key::Program, &err))?),
            None => Ok(domain::Program::starter()),
        }
    }

    fn replace_program(
        &self,
        program: domain::Program,
    ) -> Result<domain::Program, domain::UpdateError> {
        self.store
            .set(Key::Program, &records::Program::from(&program))?;
        Ok(program)
    }
}
