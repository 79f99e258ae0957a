use std::process;

use clap::{Arg, Command};

pub mod command_handlers;
pub mod fourier;
pub mod utils;

fn main() {
    let matches = Command::new("spectra-scan")
        .about("Frequency analysis using the radix-2 Cooley-Tukey FFT")
        .subcommand(
            Command::new("analyze")
                .about("Print the magnitude spectrum of a signal")
                .arg(
                    Arg::new("samples")
                        .help("Comma-separated sample values (power-of-two count); defaults to the built-in 2 Hz test signal")
                        .required(false),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("analyze", sub_matches)) => {
            let samples = sub_matches.get_one::<String>("samples").map(String::as_str);
            command_handlers::analyze(samples);
        }
        _ => {
            println!("Expected 'analyze' subcommand");
            process::exit(1);
        }
    }
}
