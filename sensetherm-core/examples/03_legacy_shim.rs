//! Legacy Sentinel Example
//!
//! Shows the `compat` entry points that return the domain zero on failure,
//! next to the typed API they wrap.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_legacy_shim
//! ```

use sensetherm_core::compat;
use sensetherm_core::{PlatinumRtd, TemperatureUnit, ThermocoupleType};

fn main() {
    println!("SenseTherm Legacy Shim Example");
    println!("==============================\n");

    let j = ThermocoupleType::J;

    // Both calls fail, but only the typed API says why
    for volts in [0.0, 80e-3] {
        let legacy = compat::tc_volts_to_fahrenheit(j, volts);
        let typed = j.volts_to_temperature(volts, TemperatureUnit::Fahrenheit);
        println!("Type J {:>6.1} mV: legacy {legacy} °F, typed {typed:?}", volts * 1e3);
    }

    // A reference of exactly 0 °F means "not set" to legacy callers
    let legacy = compat::tc_volts_to_fahrenheit_referenced(j, 5e-3, 0.0);
    let typed = j.volts_to_temperature_referenced(5e-3, 0.0, TemperatureUnit::Fahrenheit);
    println!("Type J 5 mV at 0 °F reference: legacy {legacy}, typed {typed:?}");
    println!();

    // RTD
    println!("PT100 at -150 °C: {:.6} Ω", compat::platinum_celsius_to_ohms(PlatinumRtd::Pt100, -150.0));
    println!("PT100 at 10 Ω:    {} °C", compat::platinum_ohms_to_celsius(PlatinumRtd::Pt100, 10.0));
    println!();

    // Numeric helpers with status codes
    let x = [30.0, 10.0, 20.0];
    let y = [300.0, 100.0, 200.0];
    let (index, code) = compat::sort_indices(&x, 'a');
    println!("sort_indices -> {index:?} (code {code})");
    for q in [15.0, 5.0, 35.0] {
        let (v, code) = compat::linear_lookup(&x, &y, q);
        println!("linear_lookup({q}) -> {v} (code {code})");
    }
    let (slope, intercept, r, code) = compat::linear_fit(&x, &y);
    println!("linear_fit -> y = {slope}x + {intercept}, r = {r} (code {code})");
}
