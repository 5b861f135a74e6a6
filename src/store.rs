use std::{collections::BTreeMap, fmt::Debug, fs, io, path::Path};

use chrono::{DateTime, Local};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    core::{scenario::Scenario, summary::Summary},
    prelude::*,
};

/// Saved scenarios keyed by their names.
#[derive(Default, Serialize, Deserialize)]
#[must_use]
pub struct Store {
    #[serde(default)]
    scenarios: BTreeMap<String, Entry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct Entry {
    #[builder(default = Local::now())]
    pub created_at: DateTime<Local>,

    pub scenario: Scenario,

    /// Result at the time of saving. The per-day table is not stored, re-run the scenario to get it.
    pub summary: Summary,
}

impl Store {
    #[instrument(name = "reading the store…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("failed to parse `{}`", path.display())),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(error).with_context(|| format!("failed to read `{}`", path.display())),
        }
    }

    #[instrument(skip(self), name = "writing the store…")]
    pub fn write_to<P: AsRef<Path> + Debug>(&self, path: P) -> Result {
        let path = path.as_ref();
        fs::write(path, toml::to_string(self)?)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        Ok(())
    }

    /// Insert or replace the entry, returning the replaced one.
    pub fn insert(&mut self, name: &str, entry: Entry) -> Result<Option<Entry>> {
        let name = name.trim();
        ensure!(!name.is_empty(), "scenario name must not be empty");
        Ok(self.scenarios.insert(name.to_string(), entry))
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.scenarios.get(name.trim())
    }

    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.scenarios.remove(name.trim())
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn newest_first(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.scenarios
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
            .sorted_by(|(_, lhs), (_, rhs)| rhs.created_at.cmp(&lhs.created_at))
    }
}
