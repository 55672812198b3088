//! Diode current and depletion-width computation.
//!
//! ## Current law
//!
//! Ideal mode is the bare Shockley equation:
//!
//! ```text
//! I = Is * (exp(V / (n * Vt)) - 1)        V >= 0
//! I = -Is                                  V < 0
//! ```
//!
//! Non-ideal forward bias splits the applied voltage across the junction and
//! the series resistance, `V = Vd + I(Vd) * Rs`, which is transcendental in
//! `Vd` and is solved by Newton-Raphson on
//!
//! ```text
//! f(Vd)  = Vd + Is*Rs*(exp(Vd/(n*Vt)) - 1) - V
//! f'(Vd) = 1 + Is*Rs*exp(Vd/(n*Vt)) / (n*Vt)
//! ```
//!
//! Non-ideal reverse bias sums three components: linear surface leakage, the
//! Shockley reverse term, and a soft-breakdown term that switches on past the
//! breakdown knee.
//!
//! All formulas are total over the real line; out-of-range intermediate
//! values are clamped rather than reported as errors, so the host UI can call
//! these functions every animation frame without a failure path.

mod current;
mod depletion;

pub use current::{diode_current, solve_junction_voltage, ForwardSolve, SimulationMode};
pub use depletion::depletion_factor;

/// Convergence tolerance on the junction-voltage update (volts).
pub const CONVERGENCE_TOLERANCE: f64 = 1e-5;

/// Maximum Newton-Raphson iterations for the forward solve.
///
/// A hard cap: on non-convergence the last iterate is used as-is, trading
/// precision for guaranteed bounded latency.
pub const MAX_ITERATIONS: usize = 10;

/// Upper limit for arguments passed to `exp()`.
///
/// `f64::exp` overflows to infinity near 709.8; clamping below that keeps
/// every output finite for any finite input voltage.
pub const EXP_ARG_LIMIT: f64 = 500.0;

/// Surface-leakage conductance in reverse bias (siemens).
pub const SURFACE_LEAKAGE_CONDUCTANCE: f64 = 1e-8;

/// Exponential sharpness of the soft-breakdown knee (per volt).
pub const BREAKDOWN_SHARPNESS: f64 = 2.0;

/// Display-oriented gain on the soft-breakdown term.
///
/// Deliberately exaggerated so the knee is legible on the plotted curve;
/// changing it changes the demo's reference output.
pub const BREAKDOWN_GAIN: f64 = 1000.0;
