//! I-V characteristic sampling.
//!
//! Sweeps the applied voltage over a fixed range and evaluates the current
//! solver once per mode per step, producing the paired point series the
//! curve plot renders. The sweep depends only on the parameter set, so hosts
//! recompute it on doping change, not on voltage change.

use crate::device::DiodeParams;
use crate::solver::{diode_current, SimulationMode};

/// First sampled voltage (volts).
pub const SWEEP_START: f64 = -5.0;

/// Last sampled voltage (volts), inclusive.
pub const SWEEP_STOP: f64 = 5.0;

/// Voltage step between samples (volts).
pub const SWEEP_STEP: f64 = 0.1;

/// Number of samples per series.
pub const SWEEP_POINTS: usize = 101;

/// One sampled point of the I-V characteristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Applied voltage, volts.
    pub voltage: f64,
    /// Terminal current, milliamps (amperes scaled by 1000 for display).
    pub current_ma: f64,
}

/// The sampled characteristic for both fidelity modes.
#[derive(Debug, Clone, PartialEq)]
pub struct IvCurves {
    /// Ideal Shockley-law series.
    pub ideal: Vec<CurvePoint>,
    /// Non-ideal series with Rs, leakage, and breakdown.
    pub non_ideal: Vec<CurvePoint>,
}

/// Sample both I-V curves over [-5.0, 5.0] at 0.1V steps.
///
/// Each series holds exactly [`SWEEP_POINTS`] points, strictly increasing in
/// voltage. Step voltages are rounded to two decimals before evaluation so
/// accumulated floating-point drift never shifts a sample off its nominal
/// grid position.
pub fn sample_curve(params: &DiodeParams) -> IvCurves {
    let mut ideal = Vec::with_capacity(SWEEP_POINTS);
    let mut non_ideal = Vec::with_capacity(SWEEP_POINTS);

    for step in 0..SWEEP_POINTS {
        let raw = SWEEP_START + step as f64 * SWEEP_STEP;
        let voltage = (raw * 100.0).round() / 100.0;

        ideal.push(CurvePoint {
            voltage,
            current_ma: diode_current(voltage, params, SimulationMode::Ideal) * 1000.0,
        });
        non_ideal.push(CurvePoint {
            voltage,
            current_ma: diode_current(voltage, params, SimulationMode::NonIdeal) * 1000.0,
        });
    }

    IvCurves { ideal, non_ideal }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DopingLevel;
    use approx::assert_relative_eq;

    #[test]
    fn test_sweep_span_and_count() {
        let curves = sample_curve(&DiodeParams::default());
        assert_eq!(curves.ideal.len(), SWEEP_POINTS);
        assert_eq!(curves.non_ideal.len(), SWEEP_POINTS);
        assert_eq!(curves.ideal[0].voltage, -5.0);
        assert_eq!(curves.ideal[SWEEP_POINTS - 1].voltage, 5.0);
    }

    #[test]
    fn test_voltages_land_on_the_grid() {
        let curves = sample_curve(&DiodeParams::default());
        for (step, point) in curves.non_ideal.iter().enumerate() {
            let nominal = (step as f64 - 50.0) / 10.0;
            assert_eq!(point.voltage, nominal, "sample {} off grid", step);
        }
    }

    #[test]
    fn test_voltages_strictly_increasing_and_paired() {
        let curves = sample_curve(&DiodeParams::default());
        for step in 1..SWEEP_POINTS {
            assert!(curves.ideal[step].voltage > curves.ideal[step - 1].voltage);
        }
        for step in 0..SWEEP_POINTS {
            assert_eq!(curves.ideal[step].voltage, curves.non_ideal[step].voltage);
        }
    }

    #[test]
    fn test_currents_are_scaled_to_milliamps() {
        let p = DiodeParams::default();
        let curves = sample_curve(&p);
        // Midpoint of the sweep is exactly zero bias
        assert_eq!(curves.ideal[50].voltage, 0.0);
        assert_eq!(curves.ideal[50].current_ma, 0.0);
        assert_eq!(curves.non_ideal[50].current_ma, 0.0);

        // Reverse end of the ideal series is -Is in milliamps
        assert_relative_eq!(
            curves.ideal[0].current_ma,
            -p.is * 1000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_sweep_is_deterministic() {
        let p = DiodeParams::for_doping(DopingLevel::Heavy);
        assert_eq!(sample_curve(&p), sample_curve(&p));
    }

    #[test]
    fn test_heavy_doping_breakdown_visible_in_sweep() {
        let curves = sample_curve(&DiodeParams::for_doping(DopingLevel::Heavy));
        // Knee at -4.5V: the -5.0V sample dives well below the -4.4V one
        let at_edge = curves.non_ideal[0].current_ma;
        let before_knee = curves.non_ideal[6].current_ma;
        assert_eq!(curves.non_ideal[6].voltage, -4.4);
        assert!(at_edge < before_knee);
        assert!(at_edge.abs() > 4.0 * before_knee.abs());
    }
}
