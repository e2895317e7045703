//! # Core Module
//!
//! Fundamental building blocks for Hansen solubility screening: the data
//! models, the static parameter tables with their repository front-end, and
//! the solubility mathematics.
//!
//! - **Data Models** ([`models`]) - HSP vectors, solutes, solvents, and
//!   per-solvent evaluation records
//! - **Parameter Registry** ([`registry`]) - built-in reference tables and
//!   user-supplied table loading (TOML/CSV)
//! - **Solubility Calculations** ([`solubility`]) - Hansen distance, RED,
//!   classification thresholds, and temperature correction

pub mod models;
pub mod registry;
pub mod solubility;
