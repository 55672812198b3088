//! # Junction Core
//!
//! The physics core of an interactive PN-junction diode simulator.
//!
//! This library provides:
//! - A doping-level parameter table mapping Light/Moderate/Heavy doping to
//!   fixed device parameters
//! - A diode current solver with two fidelity modes: the ideal Shockley law,
//!   and a non-ideal law with series resistance, surface leakage, and soft
//!   avalanche/Zener breakdown
//! - A depletion-region width model
//! - An I-V curve sampler for plotting both modes side by side
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`device`] - Doping levels and diode parameter sets
//! - [`solver`] - Current and depletion-width computation
//! - [`sweep`] - I-V characteristic sampling
//!
//! Everything here is a pure function of its arguments: no hidden state, no
//! I/O, no allocation outside the sweep. The host UI (canvas rendering,
//! particle animation, controls) owns all mutable state and may call any of
//! these functions once per animation frame without drift.
//!
//! ## Usage
//!
//! ```
//! use junction_core::{diode_current, DiodeParams, DopingLevel, SimulationMode};
//!
//! let params = DiodeParams::for_doping(DopingLevel::Moderate);
//! let i = diode_current(0.7, &params, SimulationMode::NonIdeal);
//! assert!(i > 0.0);
//! ```
//!
//! ## Simulation Method
//!
//! The ideal mode evaluates the Shockley equation directly. The non-ideal
//! forward branch splits the applied voltage across the junction and the
//! series resistance, which makes the current equation transcendental in the
//! junction voltage; it is solved with a capped Newton-Raphson iteration
//! (see [`solver`]). Reverse bias adds a linear surface-leakage
//! term and, past the breakdown knee, an exponential soft-breakdown term.

pub mod device;
pub mod error;
pub mod solver;
pub mod sweep;

// Re-export main types for convenience
pub use device::{DiodeParams, DopingLevel};
pub use error::{JunctionError, Result};
pub use solver::{depletion_factor, diode_current, SimulationMode};
pub use sweep::{sample_curve, CurvePoint, IvCurves};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmDiodeSim;

/// Thermal voltage at room temperature (volts).
pub const THERMAL_VOLTAGE: f64 = 0.026;
