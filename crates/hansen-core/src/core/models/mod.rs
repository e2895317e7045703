//! # Core Models Module
//!
//! Value types shared by the whole library.
//!
//! - [`hsp`] - the three-component Hansen vector and the substances built
//!   around it (`Solute`, `Solvent`)
//! - [`evaluation`] - classification bands and the per-solvent evaluation
//!   record produced by the scorer
//!
//! All of these are plain, immutable data: they are created per calculation
//! request and discarded once a response has been produced.

pub mod evaluation;
pub mod hsp;
