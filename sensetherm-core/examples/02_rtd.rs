//! Platinum RTD Example
//!
//! Converts resistance readings from standard and custom-calibrated platinum
//! elements.
//!
//! ## What You'll Learn
//!
//! - Using the PT100 / PT500 / PT1000 presets
//! - Supplying Callendar-Van Dusen coefficients from a calibration certificate
//! - Tuning the bisection used below 0 °C
//! - The ratio-fit shortcut and its accuracy
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_rtd
//! ```

use sensetherm_core::rtd::fit::{temperature_from_ratio, MAX_FIT_ERROR_C};
use sensetherm_core::{Bisection, CallendarVanDusen, PlatinumRtd, Rtd, TemperatureUnit};

fn main() {
    println!("SenseTherm RTD Example");
    println!("======================\n");

    // Presets
    for sensor in [PlatinumRtd::Pt100, PlatinumRtd::Pt500, PlatinumRtd::Pt1000] {
        println!("{:?} (R0 = {} Ω):", sensor, sensor.r0());
        for t in [-200.0, -40.0, 0.0, 100.0, 850.0] {
            if let Ok(ohms) = sensor.resistance(t, TemperatureUnit::Celsius) {
                println!("  {:>7.1} °C -> {:>10.4} Ω", t, ohms);
            }
        }
    }
    println!();

    // Certificate coefficients for an individual element
    let calibrated = Rtd::new(100.012, CallendarVanDusen::new(3.9079e-3, -5.781e-7, -4.21e-12));
    println!("Calibrated element:");
    for ohms in [60.0, 100.012, 150.0] {
        match calibrated.temperature(ohms, TemperatureUnit::Fahrenheit) {
            Ok(t) => println!("  {:>8.3} Ω -> {:>9.3} °F", ohms, t),
            Err(e) => println!("  {:>8.3} Ω -> error: {}", ohms, e),
        }
    }
    println!();

    // Tighter solver below 0 °C
    let tight = Bisection { max_iterations: 60, relative_tolerance: 1e-10 };
    let ohms = 39.7232;
    if let (Ok(default), Ok(precise)) = (
        Rtd::standard(100.0).temperature(ohms, TemperatureUnit::Celsius),
        Rtd::standard(100.0).temperature_with(ohms, TemperatureUnit::Celsius, &tight),
    ) {
        println!("Bisection at {ohms} Ω: default {default:.5} °C, tight {precise:.8} °C");
    }

    // Ratio fit
    if let Ok(fit) = temperature_from_ratio(ohms, 100.0, TemperatureUnit::Celsius) {
        println!("Ratio fit at {ohms} Ω: {fit:.5} °C (within {MAX_FIT_ERROR_C} °C)");
    }

    // Quadratic-only coefficients stop at the ice point
    let quadratic = Rtd::new(100.0, CallendarVanDusen::new(3.9083e-3, -5.775e-7, 0.0));
    if let Err(e) = quadratic.temperature(80.0, TemperatureUnit::Celsius) {
        println!("Quadratic-only model below R0: {e}");
    }
}
