//! # Solubility Module
//!
//! The computational core: Hansen distance, relative energy difference,
//! temperature correction, and the per-solvent evaluator built on top of
//! them.
//!
//! - [`metrics`] - the pure formulas
//! - [`scoring`] - the [`scoring::Evaluator`] producing per-solvent records
//! - [`curve`] - solubility-versus-temperature sampling for display

pub mod curve;
pub mod metrics;
pub mod scoring;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SolubilityError {
    #[error("interaction radius (Ro) must be positive, got {0}")]
    NonPositiveRadius(f64),
}
