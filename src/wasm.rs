//! WASM bindings for Junction Core.
//!
//! This module provides JavaScript-friendly bindings for the browser UI that
//! owns the interactive state (applied voltage, doping, mode, play/pause).
//! The wrapper holds only the current parameter set and mode; every physics
//! call remains a pure function of its arguments.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmDiodeSim } from 'junction_core';
//!
//! await init();
//!
//! const sim = new WasmDiodeSim();
//! sim.set_doping('heavy');
//! sim.set_mode('non-ideal');
//!
//! // Per animation frame:
//! const amps = sim.current(slider.value);
//! const widthScale = sim.depletion_factor(slider.value);
//!
//! // On doping change:
//! const volts = sim.sweep_voltages();
//! const idealMa = sim.sweep_ideal_ma();
//! const nonIdealMa = sim.sweep_non_ideal_ma();
//! ```

use wasm_bindgen::prelude::*;

use crate::device::{DiodeParams, DopingLevel};
use crate::solver::{depletion_factor, diode_current, SimulationMode};
use crate::sweep::sample_curve;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible diode simulator core.
///
/// Wraps a [`DiodeParams`] and a [`SimulationMode`] so the JavaScript host
/// can make per-frame calls without re-marshalling the parameter set.
#[wasm_bindgen]
pub struct WasmDiodeSim {
    params: DiodeParams,
    mode: SimulationMode,
}

impl Default for WasmDiodeSim {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmDiodeSim {
    /// Create a simulator with moderate doping and the ideal current law.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmDiodeSim {
        WasmDiodeSim {
            params: DiodeParams::default(),
            mode: SimulationMode::default(),
        }
    }

    /// Select the doping level: `'light'`, `'moderate'`, or `'heavy'`.
    ///
    /// Rebuilds the parameter set from the preset table.
    #[wasm_bindgen]
    pub fn set_doping(&mut self, doping: &str) -> Result<(), JsValue> {
        let level: DopingLevel = doping
            .parse()
            .map_err(|e: crate::JunctionError| JsValue::from_str(&e.to_string()))?;
        self.params = DiodeParams::for_doping(level);
        Ok(())
    }

    /// Select the current law: `'ideal'` or `'non-ideal'`.
    #[wasm_bindgen]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        self.mode = mode
            .parse()
            .map_err(|e: crate::JunctionError| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Terminal current (amperes) at an applied voltage, in the active mode.
    #[wasm_bindgen]
    pub fn current(&self, voltage: f64) -> f64 {
        diode_current(voltage, &self.params, self.mode)
    }

    /// Depletion-width scale factor at an applied voltage, in `[0.1, 3.0]`.
    #[wasm_bindgen]
    pub fn depletion_factor(&self, voltage: f64) -> f64 {
        depletion_factor(voltage, self.params.vbi)
    }

    /// Sampled sweep voltages (volts), 101 values from -5.0 to 5.0.
    #[wasm_bindgen]
    pub fn sweep_voltages(&self) -> Vec<f64> {
        sample_curve(&self.params)
            .ideal
            .iter()
            .map(|p| p.voltage)
            .collect()
    }

    /// Ideal-mode sweep currents (milliamps), paired with `sweep_voltages`.
    #[wasm_bindgen]
    pub fn sweep_ideal_ma(&self) -> Vec<f64> {
        sample_curve(&self.params)
            .ideal
            .iter()
            .map(|p| p.current_ma)
            .collect()
    }

    /// Non-ideal-mode sweep currents (milliamps), paired with `sweep_voltages`.
    #[wasm_bindgen]
    pub fn sweep_non_ideal_ma(&self) -> Vec<f64> {
        sample_curve(&self.params)
            .non_ideal
            .iter()
            .map(|p| p.current_ma)
            .collect()
    }

    /// Built-in potential of the active parameter set (volts).
    #[wasm_bindgen(getter)]
    pub fn vbi(&self) -> f64 {
        self.params.vbi
    }

    /// Breakdown voltage of the active parameter set (volts).
    #[wasm_bindgen(getter)]
    pub fn breakdown_voltage(&self) -> f64 {
        self.params.breakdown_voltage
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the thermal voltage constant (volts).
#[wasm_bindgen]
pub fn thermal_voltage() -> f64 {
    crate::THERMAL_VOLTAGE
}
