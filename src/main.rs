//! Junction - PN-junction diode simulator core, command line front end.
//!
//! Prints the sampled I-V characteristic as CSV, or a single operating
//! point, for a chosen doping level. The graphical hosts (canvas plot,
//! particle view) consume the same library calls.
//!
//! # Usage
//!
//! ```bash
//! junction --doping heavy > curve.csv
//! junction --doping moderate --voltage 0.7
//! ```

use clap::Parser;
use junction_core::{
    depletion_factor, diode_current, sample_curve, DiodeParams, DopingLevel, Result,
    SimulationMode,
};

/// PN-junction diode simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Doping level: light, moderate, or heavy
    #[arg(short, long, default_value = "moderate")]
    doping: String,

    /// Evaluate a single operating point instead of sweeping the curve
    #[arg(short, long)]
    voltage: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let doping: DopingLevel = args.doping.parse()?;
    let params = DiodeParams::for_doping(doping);

    match args.voltage {
        Some(voltage) => {
            let ideal = diode_current(voltage, &params, SimulationMode::Ideal);
            let non_ideal = diode_current(voltage, &params, SimulationMode::NonIdeal);
            let width = depletion_factor(voltage, params.vbi);

            println!("doping:           {}", doping);
            println!("voltage:          {:.3} V", voltage);
            println!("ideal current:    {:.6e} A", ideal);
            println!("non-ideal current: {:.6e} A", non_ideal);
            println!("depletion factor: {:.3}", width);
        }
        None => {
            let curves = sample_curve(&params);

            println!("voltage,ideal_ma,non_ideal_ma");
            for (ideal, non_ideal) in curves.ideal.iter().zip(&curves.non_ideal) {
                println!(
                    "{:.2},{:.6e},{:.6e}",
                    ideal.voltage, ideal.current_ma, non_ideal.current_ma
                );
            }
        }
    }

    Ok(())
}
