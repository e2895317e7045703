//! # Visualization Module
//!
//! Assembles evaluation results into a structured, serializable point and
//! surface description for an external 3D renderer. The renderer itself is a
//! black box to this library: everything here is plain data.

pub mod plot;
