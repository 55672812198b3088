//! Diode device parameters and the doping-level table.
//!
//! A [`DopingLevel`] selects one fixed [`DiodeParams`] set. Lighter doping
//! models a wider, more lightly doped junction: higher series resistance and
//! a deeper avalanche knee. Heavier doping models a Zener-like device: low
//! series resistance and sharp breakdown close to 0V.
//!
//! Parameter sets are immutable values. When the host changes doping it
//! derives a fresh `DiodeParams` rather than mutating one in place.

use std::fmt;
use std::str::FromStr;

use crate::error::{JunctionError, Result};
use crate::THERMAL_VOLTAGE;

/// Doping level of the simulated junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DopingLevel {
    /// Lightly doped: wide depletion region, gentle avalanche onset.
    Light,
    /// Typical silicon rectifier.
    #[default]
    Moderate,
    /// Heavily doped: narrow junction, Zener-like sharp breakdown.
    Heavy,
}

impl FromStr for DopingLevel {
    type Err = JunctionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(DopingLevel::Light),
            "moderate" => Ok(DopingLevel::Moderate),
            "heavy" => Ok(DopingLevel::Heavy),
            _ => Err(JunctionError::UnknownDopingLevel {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DopingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DopingLevel::Light => write!(f, "light"),
            DopingLevel::Moderate => write!(f, "moderate"),
            DopingLevel::Heavy => write!(f, "heavy"),
        }
    }
}

/// Parameters for a diode model.
#[derive(Debug, Clone, PartialEq)]
pub struct DiodeParams {
    /// Saturation current (Is), amperes. Always > 0.
    pub is: f64,
    /// Ideality factor (n), dimensionless. Always >= 1.
    pub n: f64,
    /// Built-in potential (Vbi), volts. Always > 0.
    pub vbi: f64,
    /// Series resistance (Rs), ohms. Always >= 0.
    pub rs: f64,
    /// Breakdown voltage, volts. Always < 0; reverse current accelerates
    /// once the applied voltage drops below this knee.
    pub breakdown_voltage: f64,
}

impl Default for DiodeParams {
    fn default() -> Self {
        Self::for_doping(DopingLevel::Moderate)
    }
}

impl DiodeParams {
    /// Look up the fixed parameter set for a doping level.
    ///
    /// Total function: every level maps to exactly one parameter set, and
    /// every returned set satisfies the field invariants by construction.
    pub fn for_doping(doping: DopingLevel) -> Self {
        match doping {
            DopingLevel::Light => Self {
                is: 1e-12,
                n: 1.3,
                vbi: 0.6,
                rs: 50.0,
                breakdown_voltage: -100.0,
            },
            DopingLevel::Moderate => Self {
                is: 1e-11,
                n: 1.2,
                vbi: 0.7,
                rs: 10.0,
                breakdown_voltage: -20.0,
            },
            DopingLevel::Heavy => Self {
                is: 1e-10,
                n: 1.1,
                vbi: 0.8,
                rs: 2.0,
                breakdown_voltage: -4.5,
            },
        }
    }

    /// Create a custom parameter set, validating the device invariants.
    ///
    /// The preset table never fails; this is for hosts that let the user
    /// supply arbitrary parameters.
    pub fn new(is: f64, n: f64, vbi: f64, rs: f64, breakdown_voltage: f64) -> Result<Self> {
        if !(is > 0.0) {
            return Err(JunctionError::invalid_parameter(
                "is",
                is,
                "saturation current must be positive",
            ));
        }
        if !(n >= 1.0) {
            return Err(JunctionError::invalid_parameter(
                "n",
                n,
                "ideality factor must be at least 1",
            ));
        }
        if !(vbi > 0.0) {
            return Err(JunctionError::invalid_parameter(
                "vbi",
                vbi,
                "built-in potential must be positive",
            ));
        }
        if !(rs >= 0.0) {
            return Err(JunctionError::invalid_parameter(
                "rs",
                rs,
                "series resistance cannot be negative",
            ));
        }
        if !(breakdown_voltage < 0.0) {
            return Err(JunctionError::invalid_parameter(
                "breakdown_voltage",
                breakdown_voltage,
                "breakdown voltage must be negative",
            ));
        }
        Ok(Self {
            is,
            n,
            vbi,
            rs,
            breakdown_voltage,
        })
    }

    /// Thermal voltage times ideality factor.
    pub fn n_vt(&self) -> f64 {
        self.n * THERMAL_VOLTAGE
    }
}
