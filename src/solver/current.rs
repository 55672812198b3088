//! Diode current in both fidelity modes.
//!
//! Ideal mode is the textbook Shockley law. Non-ideal mode adds series
//! resistance in forward bias (solved iteratively) and, in reverse bias,
//! surface leakage plus a soft avalanche/Zener breakdown term.

use std::fmt;
use std::str::FromStr;

use crate::device::DiodeParams;
use crate::error::{JunctionError, Result};

use super::{
    BREAKDOWN_GAIN, BREAKDOWN_SHARPNESS, CONVERGENCE_TOLERANCE, EXP_ARG_LIMIT, MAX_ITERATIONS,
    SURFACE_LEAKAGE_CONDUCTANCE,
};

/// Which current law to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimulationMode {
    /// Bare Shockley law; flat `-Is` in reverse bias, no breakdown.
    ///
    /// The missing breakdown is a deliberate pedagogical simplification,
    /// not an omission.
    #[default]
    Ideal,
    /// Series resistance, surface leakage, and soft breakdown.
    NonIdeal,
}

impl FromStr for SimulationMode {
    type Err = JunctionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ideal" => Ok(SimulationMode::Ideal),
            "nonideal" | "non-ideal" => Ok(SimulationMode::NonIdeal),
            _ => Err(JunctionError::UnknownSimulationMode {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationMode::Ideal => write!(f, "ideal"),
            SimulationMode::NonIdeal => write!(f, "non-ideal"),
        }
    }
}

/// `exp(x)` with the argument capped at [`EXP_ARG_LIMIT`].
///
/// Keeps extreme voltages from overflowing to infinity; monotonicity is
/// preserved up to the cap.
#[inline]
fn exp_clamped(x: f64) -> f64 {
    x.min(EXP_ARG_LIMIT).exp()
}

/// Shockley current at a given junction voltage.
#[inline]
fn shockley(v: f64, params: &DiodeParams) -> f64 {
    params.is * (exp_clamped(v / params.n_vt()) - 1.0)
}

/// Outcome of the forward-bias junction-voltage solve.
///
/// [`diode_current`] discards everything but the junction voltage; the full
/// record exists so tests and diagnostic hosts can observe convergence
/// instead of guessing from the current value.
#[derive(Debug, Clone, Copy)]
pub struct ForwardSolve {
    /// Voltage across the junction itself (terminal voltage minus the
    /// series-resistance drop), volts.
    pub junction_voltage: f64,
    /// Newton-Raphson iterations actually used.
    pub iterations: usize,
    /// Whether the update shrank below tolerance within the iteration cap.
    /// When false, `junction_voltage` is the last iterate, best-effort.
    pub converged: bool,
    /// Whether the result was clipped back to the applied voltage.
    /// The junction cannot see more than the terminal voltage under this
    /// single-resistor model, so numerical overshoot is clipped.
    pub clamped: bool,
}

/// Solve `V = Vd + I(Vd)*Rs` for the junction voltage `Vd` at forward bias.
///
/// Newton-Raphson on `f(Vd) = Vd + Is*Rs*(exp(Vd/(n*Vt)) - 1) - V` with the
/// applied voltage as initial guess, capped at [`MAX_ITERATIONS`]. Never
/// fails: non-convergence returns the last iterate, a known precision
/// trade-off in exchange for bounded per-call latency.
pub fn solve_junction_voltage(voltage: f64, params: &DiodeParams) -> ForwardSolve {
    let n_vt = params.n_vt();
    let is_rs = params.is * params.rs;

    let mut vd = voltage;
    let mut iterations = 0;
    let mut converged = false;

    for iter in 0..MAX_ITERATIONS {
        let e = exp_clamped(vd / n_vt);
        let f = vd + is_rs * (e - 1.0) - voltage;
        let f_prime = 1.0 + is_rs * e / n_vt;
        let next = vd - f / f_prime;
        let step = (next - vd).abs();

        vd = next;
        iterations = iter + 1;

        if step < CONVERGENCE_TOLERANCE {
            converged = true;
            break;
        }
    }

    let clamped = vd > voltage;
    if clamped {
        vd = voltage;
    }

    ForwardSolve {
        junction_voltage: vd,
        iterations,
        converged,
        clamped,
    }
}

/// Non-ideal reverse-bias current: surface leakage + Shockley reverse term
/// + soft breakdown past the knee.
fn reverse_current(voltage: f64, params: &DiodeParams) -> f64 {
    let leakage = voltage * SURFACE_LEAKAGE_CONDUCTANCE;
    let diffusion = shockley(voltage, params);

    let breakdown = if voltage < params.breakdown_voltage {
        // Overdrive past the knee, positive volts
        let overdrive = params.breakdown_voltage - voltage;
        -params.is * (exp_clamped(overdrive * BREAKDOWN_SHARPNESS) - 1.0) * BREAKDOWN_GAIN
    } else {
        0.0
    };

    leakage + diffusion + breakdown
}

/// Diode terminal current (amperes) at an applied voltage.
///
/// Pure and total over all finite voltages: there is no failure path, and
/// zero bias yields exactly zero current in both modes.
pub fn diode_current(voltage: f64, params: &DiodeParams, mode: SimulationMode) -> f64 {
    match mode {
        SimulationMode::Ideal => {
            if voltage >= 0.0 {
                shockley(voltage, params)
            } else {
                -params.is
            }
        }
        SimulationMode::NonIdeal => {
            if voltage >= 0.0 {
                let solve = solve_junction_voltage(voltage, params);
                shockley(solve.junction_voltage, params)
            } else {
                reverse_current(voltage, params)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DopingLevel;
    use crate::THERMAL_VOLTAGE;
    use approx::assert_relative_eq;

    fn moderate() -> DiodeParams {
        DiodeParams::for_doping(DopingLevel::Moderate)
    }

    #[test]
    fn test_ideal_forward_matches_shockley() {
        let p = moderate();
        for v in [0.1, 0.3, 0.5, 0.7, 1.0] {
            let expected = p.is * ((v / (p.n * THERMAL_VOLTAGE)).exp() - 1.0);
            assert_relative_eq!(
                diode_current(v, &p, SimulationMode::Ideal),
                expected,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_ideal_reverse_is_flat_saturation() {
        let p = moderate();
        for v in [-0.1, -1.0, -5.0, -50.0] {
            assert_eq!(diode_current(v, &p, SimulationMode::Ideal), -p.is);
        }
    }

    #[test]
    fn test_zero_bias_is_exactly_zero() {
        let p = moderate();
        assert_eq!(diode_current(0.0, &p, SimulationMode::Ideal), 0.0);
        assert_eq!(diode_current(0.0, &p, SimulationMode::NonIdeal), 0.0);
    }

    #[test]
    fn test_forward_solve_converges_at_typical_bias() {
        let p = moderate();
        let solve = solve_junction_voltage(0.7, &p);
        assert!(solve.converged);
        assert!(solve.iterations <= 10);
        assert!(solve.junction_voltage <= 0.7);
        // The junction sees less than the terminal once Rs drops voltage
        assert!(solve.junction_voltage > 0.0);
    }

    #[test]
    fn test_forward_solve_zero_bias_is_trivial() {
        let p = moderate();
        let solve = solve_junction_voltage(0.0, &p);
        assert!(solve.converged);
        assert_eq!(solve.iterations, 1);
        assert_eq!(solve.junction_voltage, 0.0);
        assert!(!solve.clamped);
    }

    #[test]
    fn test_forward_solve_without_rs_reduces_to_shockley() {
        let p = DiodeParams::new(1e-11, 1.2, 0.7, 0.0, -20.0).unwrap();
        let solve = solve_junction_voltage(0.55, &p);
        assert!(solve.converged);
        assert_eq!(solve.junction_voltage, 0.55);
        assert_relative_eq!(
            diode_current(0.55, &p, SimulationMode::NonIdeal),
            diode_current(0.55, &p, SimulationMode::Ideal),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_series_resistance_limits_forward_current() {
        let p = moderate();
        let ideal = diode_current(0.7, &p, SimulationMode::Ideal);
        let non_ideal = diode_current(0.7, &p, SimulationMode::NonIdeal);
        assert!(non_ideal > 0.0);
        assert!(non_ideal < ideal);
    }

    #[test]
    fn test_non_ideal_forward_is_monotonic() {
        let p = moderate();
        let mut prev = diode_current(0.0, &p, SimulationMode::NonIdeal);
        for step in 1..=100 {
            let v = step as f64 * 0.05;
            let i = diode_current(v, &p, SimulationMode::NonIdeal);
            assert!(i >= prev, "current decreased between {} and {} V", v - 0.05, v);
            prev = i;
        }
        assert!(
            diode_current(5.0, &p, SimulationMode::NonIdeal)
                > diode_current(0.0, &p, SimulationMode::NonIdeal)
        );
    }

    #[test]
    fn test_reverse_leakage_before_breakdown() {
        let p = moderate();
        // Well before the -20V knee: leakage plus ~-Is, no breakdown term
        let i = diode_current(-5.0, &p, SimulationMode::NonIdeal);
        let expected = -5.0 * 1e-8 - p.is;
        assert_relative_eq!(i, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_soft_breakdown_knee() {
        let p = DiodeParams::for_doping(DopingLevel::Heavy);
        assert_eq!(p.breakdown_voltage, -4.5);

        let before = diode_current(-4.4, &p, SimulationMode::NonIdeal);
        let after = diode_current(-4.6, &p, SimulationMode::NonIdeal);
        let deep = diode_current(-5.0, &p, SimulationMode::NonIdeal);

        assert!(after < before);
        assert!(after.abs() > 1.4 * before.abs());
        assert!(deep.abs() > 4.0 * before.abs());
    }

    #[test]
    fn test_breakdown_is_continuous_at_the_knee() {
        let p = DiodeParams::for_doping(DopingLevel::Heavy);
        let at_knee = diode_current(p.breakdown_voltage, &p, SimulationMode::NonIdeal);
        let just_past = diode_current(p.breakdown_voltage - 1e-9, &p, SimulationMode::NonIdeal);
        assert_relative_eq!(at_knee, just_past, max_relative = 1e-6);
    }

    #[test]
    fn test_outputs_finite_for_extreme_voltages() {
        let p = moderate();
        for v in [-1000.0, -100.0, 100.0, 1000.0] {
            assert!(diode_current(v, &p, SimulationMode::Ideal).is_finite());
            assert!(diode_current(v, &p, SimulationMode::NonIdeal).is_finite());
        }
    }

    #[test]
    fn test_mode_round_trip() {
        for mode in [SimulationMode::Ideal, SimulationMode::NonIdeal] {
            let parsed: SimulationMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert_eq!("nonideal".parse::<SimulationMode>().unwrap(), SimulationMode::NonIdeal);
        assert!("spice".parse::<SimulationMode>().is_err());
    }
}
