//! # Parameter Registry Module
//!
//! The read-only reference tables and their lookup front-end.
//!
//! - [`tables`] - compile-time solvent/solute maps
//! - [`repository`] - [`repository::ParameterRepository`], built once at
//!   startup and shared read-only across requests; supports merging
//!   user-supplied TOML table files and CSV solvent imports over the
//!   built-ins

pub mod repository;
pub mod tables;
