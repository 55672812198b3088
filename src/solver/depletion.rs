//! Depletion-region width model.
//!
//! The depletion region narrows under forward bias and widens under reverse
//! bias, proportionally to `sqrt(Vbi - V)`. The core reports a dimensionless
//! scale factor; the rendering collaborator multiplies it into a base pixel
//! width.

/// Margin below `Vbi` at which the effective voltage is capped (volts).
///
/// Keeps the radicand positive as the forward bias approaches the built-in
/// potential.
pub const VEFF_MARGIN: f64 = 0.05;

/// Smallest factor ever reported.
pub const MIN_FACTOR: f64 = 0.1;

/// Largest factor ever reported.
pub const MAX_FACTOR: f64 = 3.0;

/// Dimensionless depletion-width scale factor, always in `[0.1, 3.0]`.
///
/// `sqrt(Vbi - Veff) / sqrt(Vbi)` with the effective voltage capped at
/// `Vbi - 0.05`, so the factor is 1.0 at equilibrium, shrinks toward the
/// floor as forward bias approaches `Vbi`, and grows with reverse bias up
/// to the ceiling. Monotonically non-increasing in the applied voltage.
pub fn depletion_factor(voltage: f64, vbi: f64) -> f64 {
    let v_eff = voltage.min(vbi - VEFF_MARGIN);
    let factor = (vbi - v_eff).sqrt() / vbi.sqrt();
    factor.clamp(MIN_FACTOR, MAX_FACTOR)
}
