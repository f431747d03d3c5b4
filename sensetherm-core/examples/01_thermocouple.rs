//! Thermocouple Conversion Example
//!
//! Converts raw junction EMF readings to temperature for several letter
//! types, with and without cold-junction compensation.
//!
//! ## What You'll Learn
//!
//! - Converting between EMF and temperature in either unit
//! - Compensating for a reference junction that is not at the ice point
//! - Reading the error variants and their coarse status
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_thermocouple
//! ```

use sensetherm_core::{ConversionStatus, TemperatureUnit, ThermocoupleType};

fn main() {
    println!("SenseTherm Thermocouple Example");
    println!("===============================\n");

    // Valid input ranges per type
    println!("Supported types:");
    for tc in ThermocoupleType::ALL {
        let (lo_v, hi_v) = tc.voltage_range();
        let (lo_c, hi_c) = tc.temperature_range(TemperatureUnit::Celsius);
        println!(
            "  Type {}: {:>8.3} to {:>7.3} mV, {:>6.1} to {:>6.1} °C",
            tc,
            lo_v * 1e3,
            hi_v * 1e3,
            lo_c,
            hi_c
        );
    }
    println!();

    // Type K reading against an ice bath
    let k = ThermocoupleType::K;
    let readings = [-5.891e-3, 1.0e-3, 4.096e-3, 10.0e-3, 41.276e-3];
    println!("Type K, ice-point reference:");
    for volts in readings {
        match k.volts_to_temperature(volts, TemperatureUnit::Celsius) {
            Ok(t) => println!("  {:>8.3} mV -> {:>9.3} °C", volts * 1e3, t),
            Err(e) => println!("  {:>8.3} mV -> error: {}", volts * 1e3, e),
        }
    }
    println!();

    // Same junction with the terminal block at 23.5 °C
    let cold_junction = 23.5;
    println!("Type K, reference junction at {cold_junction} °C:");
    for volts in readings {
        match k.volts_to_temperature_referenced(volts, cold_junction, TemperatureUnit::Celsius) {
            Ok(t) => println!("  {:>8.3} mV -> {:>9.3} °C", volts * 1e3, t),
            Err(e) => println!("  {:>8.3} mV -> error: {}", volts * 1e3, e),
        }
    }
    println!();

    // Failure modes
    println!("Error handling:");
    let cases = [
        ("open junction", k.volts_to_temperature(0.0, TemperatureUnit::Fahrenheit)),
        ("over range", k.volts_to_temperature(60e-3, TemperatureUnit::Fahrenheit)),
        (
            "bad reference",
            k.volts_to_temperature_referenced(1e-3, 3000.0, TemperatureUnit::Fahrenheit),
        ),
    ];
    for (label, result) in cases {
        let status = ConversionStatus::of(&result);
        match result {
            Ok(t) => println!("  {label}: {t:.3} °F"),
            Err(e) => println!("  {label}: {e} ({status:?})"),
        }
    }
    println!();

    // Type B reads the warmer root for small EMFs
    let b = ThermocoupleType::B;
    let volts = -0.0015e-3;
    if b.in_dead_zone(volts) {
        if let Ok(t) = b.volts_to_temperature(volts, TemperatureUnit::Fahrenheit) {
            println!("Type B {:.4} mV is double valued; reported as {t:.1} °F", volts * 1e3);
        }
    }
}
