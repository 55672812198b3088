//! Error types for the junction simulator core.
//!
//! The physics functions themselves are total: every formula is defined (with
//! explicit clamps) over the whole real input range, so evaluating current or
//! depletion width can never fail. Errors only arise at the boundary where a
//! host supplies data the core does not control: custom parameter sets and
//! doping names parsed from strings.

use thiserror::Error;

/// Result type alias using [`JunctionError`].
pub type Result<T> = std::result::Result<T, JunctionError>;

/// Unified error type for all junction_core operations.
#[derive(Error, Debug)]
pub enum JunctionError {
    /// A custom parameter set violates a device invariant
    #[error("Invalid parameter '{param}' = {value}: {message}")]
    InvalidParameter {
        param: &'static str,
        value: f64,
        message: &'static str,
    },

    /// A doping-level name did not match any known level
    #[error("Unknown doping level '{name}' (expected 'light', 'moderate', or 'heavy')")]
    UnknownDopingLevel { name: String },

    /// A simulation-mode name did not match any known mode
    #[error("Unknown simulation mode '{name}' (expected 'ideal' or 'non-ideal')")]
    UnknownSimulationMode { name: String },
}

impl JunctionError {
    /// Create an invalid-parameter error
    pub fn invalid_parameter(param: &'static str, value: f64, message: &'static str) -> Self {
        Self::InvalidParameter {
            param,
            value,
            message,
        }
    }
}
