use std::process;

use colored::Colorize;
use slog::error;

use crate::fourier;
use crate::utils;

/// Built-in demo signal: one period of a 2 Hz wave sampled at 8 Hz.
pub const TEST_SIGNAL: [f64; 8] = [0.0, 0.707, 1.0, 0.707, 0.0, -0.707, -1.0, -0.707];

/// Parses a comma-separated list of sample values.
fn parse_samples(raw: &str) -> Result<Vec<f64>, String> {
    raw.split(',')
        .map(|part| {
            let trimmed = part.trim();
            trimmed
                .parse::<f64>()
                .map_err(|_| format!("invalid sample value: '{}'", trimmed))
        })
        .collect()
}

/// Runs the `analyze` subcommand: computes and prints the magnitude
/// spectrum of the given samples, or of the built-in test signal.
pub fn analyze(samples_arg: Option<&str>) {
    let samples = match samples_arg {
        Some(raw) => match parse_samples(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                println!("{}", format!("Error: {}", e).yellow());
                process::exit(1);
            }
        },
        None => TEST_SIGNAL.to_vec(),
    };

    let magnitudes = match fourier::analyze_frequency(&samples) {
        Ok(m) => m,
        Err(e) => {
            let logger = utils::get_logger();
            error!(logger, "Frequency analysis failed. {}", e);
            println!(
                "{}",
                format!("Error: {} (pad or truncate the signal to a power-of-two length)", e)
                    .yellow()
            );
            process::exit(1);
        }
    };

    println!("Frequency magnitudes ({} bins):", magnitudes.len());
    for (bin, magnitude) in magnitudes.iter().enumerate() {
        println!("  bin {:>3}: {:.6}", bin, magnitude);
    }

    if let Some(bin) = fourier::dominant_bin(&magnitudes) {
        println!("{}", format!("Dominant bin: {}", bin).green());
    }
}
