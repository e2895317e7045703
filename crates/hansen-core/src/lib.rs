//! # Hansen Core Library
//!
//! A library for Hansen Solubility Parameter (HSP) compatibility screening:
//! given a solute and a set of candidate solvents, it computes the Hansen
//! distance, the relative energy difference (RED), a solubility
//! classification, and the data needed to render the result in 3D.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers to keep the pure science separate
//! from orchestration and presentation:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`HspVector`,
//!   `Solute`, `Solvent`), the read-only parameter repository, and the pure
//!   solubility mathematics (`metrics`, `scoring`, `curve`).
//!
//! - **[`viz`]: Plot Assembly.** Translates evaluation results into a
//!   structured, serializable point/surface description consumed by an
//!   external 3D renderer. No rendering happens here.
//!
//! - **[`workflows`]: The Public API.** Ties repository, evaluator, curves,
//!   and plot assembly together into a single `evaluate` entry point that
//!   callers (such as the `hansen` CLI) drive with an [`workflows::evaluate::EvaluationRequest`].
//!
//! Every evaluation is a bounded, synchronous, in-memory computation; the
//! repository is read-only after construction and may be shared freely
//! across threads.

pub mod core;
pub mod viz;
pub mod workflows;
