use super::tables::{self, SoluteRecord};
use crate::core::models::hsp::HspVector;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// On-disk table file: `[solvents.<name>]` entries with `d`, `p`, `h` and
/// `[solutes.<name>]` entries adding `ro`.
#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    solvents: BTreeMap<String, HspVector>,
    #[serde(default)]
    solutes: BTreeMap<String, SoluteEntry>,
}

#[derive(Debug, Deserialize)]
struct SoluteEntry {
    d: f64,
    p: f64,
    h: f64,
    ro: f64,
}

#[derive(Debug, Deserialize)]
struct SolventRow {
    name: String,
    d: f64,
    p: f64,
    h: f64,
}

/// Read-only name → parameter lookup for solvents and solutes.
///
/// Constructed once at startup (from the built-in tables, optionally merged
/// with user files) and never mutated afterwards, so it can be shared across
/// concurrent evaluations without locking.
#[derive(Debug, Clone, Default)]
pub struct ParameterRepository {
    solvents: BTreeMap<String, HspVector>,
    solutes: BTreeMap<String, SoluteRecord>,
}

impl ParameterRepository {
    /// Repository over the built-in reference tables.
    pub fn builtin() -> Self {
        let solvents = tables::SOLVENTS
            .entries()
            .map(|(name, hsp)| (name.to_string(), *hsp))
            .collect();
        let solutes = tables::SOLUTES
            .entries()
            .map(|(name, record)| (name.to_string(), *record))
            .collect();
        Self { solvents, solutes }
    }

    /// In-memory construction for tests and embedders. Duplicate names
    /// collapse to the first occurrence.
    pub fn from_entries(
        solvents: impl IntoIterator<Item = (String, HspVector)>,
        solutes: impl IntoIterator<Item = (String, SoluteRecord)>,
    ) -> Self {
        let mut repository = Self::default();
        for (name, hsp) in solvents {
            repository.insert_solvent(name, hsp);
        }
        for (name, record) in solutes {
            repository.solutes.entry(name).or_insert(record);
        }
        repository
    }

    /// Merges a TOML table file over the current entries. File entries win
    /// over existing ones, so users can shadow built-in parameters.
    pub fn merge_toml(&mut self, path: &Path) -> Result<(), TableLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: TableFile = toml::from_str(&content).map_err(|e| TableLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        for (name, hsp) in file.solvents {
            self.solvents.insert(name, hsp);
        }
        for (name, entry) in file.solutes {
            self.solutes.insert(
                name,
                SoluteRecord {
                    hsp: HspVector::new(entry.d, entry.p, entry.h),
                    ro: entry.ro,
                },
            );
        }
        Ok(())
    }

    /// Imports solvents from a CSV file with a `name,d,p,h` header.
    /// Rows repeating an already-known name are dropped (first occurrence
    /// wins). Returns the number of rows read.
    pub fn load_solvents_csv(&mut self, path: &Path) -> Result<usize, TableLoadError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| TableLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut rows = 0;
        for result in reader.deserialize::<SolventRow>() {
            let row = result.map_err(|e| TableLoadError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            rows += 1;
            self.insert_solvent(row.name, HspVector::new(row.d, row.p, row.h));
        }
        Ok(rows)
    }

    pub fn solvent(&self, name: &str) -> Option<&HspVector> {
        self.solvents.get(name)
    }

    pub fn solute(&self, name: &str) -> Option<&SoluteRecord> {
        self.solutes.get(name)
    }

    /// Case-insensitive substring search over solvent names, in name order.
    /// An empty query matches every solvent.
    pub fn search_solvents(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.solvents
            .keys()
            .filter(|name| name.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    pub fn solvents(&self) -> impl Iterator<Item = (&str, &HspVector)> {
        self.solvents.iter().map(|(name, hsp)| (name.as_str(), hsp))
    }

    pub fn solutes(&self) -> impl Iterator<Item = (&str, &SoluteRecord)> {
        self.solutes
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn solvent_count(&self) -> usize {
        self.solvents.len()
    }

    pub fn solute_count(&self) -> usize {
        self.solutes.len()
    }

    fn insert_solvent(&mut self, name: String, hsp: HspVector) {
        if self.solvents.contains_key(&name) {
            debug!("Duplicate solvent entry '{}' dropped.", name);
            return;
        }
        self.solvents.insert(name, hsp);
    }
}
