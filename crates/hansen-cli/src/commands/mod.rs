pub mod eval;
pub mod solutes;
pub mod solvents;

use crate::error::Result;
use hansen_core::core::registry::repository::ParameterRepository;
use std::path::Path;
use tracing::info;

/// Builds the repository from the built-in tables, optionally merged with a
/// user TOML table file.
pub fn load_repository(tables: Option<&Path>) -> Result<ParameterRepository> {
    let mut repository = ParameterRepository::builtin();
    if let Some(path) = tables {
        repository.merge_toml(path)?;
        info!("Merged user table file {}.", path.display());
    }
    Ok(repository)
}
