//! Basic example demonstrating a demand forecast
//!
//! Run with: cargo run --example basic -p demand-facade

use demand_facade::prelude::*;

fn main() -> Result<()> {
    println!("=== demand-facade Basic Example ===\n");

    // Two years of monthly demand with a seasonal shape and mild growth
    let cycle = [
        100.0, 110.0, 105.0, 120.0, 102.0, 115.0, 108.0, 125.0, 104.0, 118.0, 110.0, 128.0,
    ];
    let mut history: Vec<f64> = cycle.to_vec();
    history.extend(cycle.iter().map(|v| v + 6.0));

    println!("History ({} points): {:?}\n", history.len(), history);

    // 1. Forecast the next half year with default smoothing weights
    println!("1. Six-month forecast");
    let options = ForecastOptions::default().with_periods(6);
    let result = forecast(&history, &options)?;
    println!(
        "   Forecast: {:?}",
        result
            .forecast
            .iter()
            .map(|v| format!("{v:.1}"))
            .collect::<Vec<_>>()
    );
    println!("   Method: {}\n", result.parameters.method);

    // 2. Forecast a full year so the accuracy report aligns a complete cycle
    println!("2. Twelve-month forecast with accuracy report");
    let result = forecast(&history, &ForecastOptions::default())?;
    if let Some(metrics) = result.metrics {
        println!(
            "   MAE: {:.3}  MSE: {:.3}  RMSE: {:.3}",
            metrics.mae, metrics.mse, metrics.rmse
        );
    }
    println!("   Warnings: {:?}\n", result.warnings);

    // 3. Thin history still forecasts, flagged as reduced confidence
    println!("3. Forecast from five points of history");
    let thin = &history[..5];
    let result = forecast(thin, &ForecastOptions::default().with_periods(3))?;
    println!(
        "   Forecast: {:?}",
        result
            .forecast
            .iter()
            .map(|v| format!("{v:.1}"))
            .collect::<Vec<_>>()
    );
    println!("   Warnings: {:?}", result.warnings);

    println!("\n=== Example Complete ===");
    Ok(())
}
