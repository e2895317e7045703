//! # Workflows Module
//!
//! The highest-level, user-facing layer. [`evaluate::run`] takes an
//! [`evaluate::EvaluationRequest`] and a [`crate::core::registry::repository::ParameterRepository`]
//! and returns everything a caller needs to present the result: per-solvent
//! records, 3D plot data, and temperature curves.

pub mod evaluate;
