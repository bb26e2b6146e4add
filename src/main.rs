// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use phpprobe::cli::Cli;
use phpprobe::config::ConfigParameter;
use phpprobe::input;
use phpprobe::scanner::Scanner;
use phpprobe::scanstate::ScanState;
use simple_logger::SimpleLogger;
use std::io::ErrorKind;
use std::str::FromStr;
use std::sync::Arc;

fn human_readable_time(millis: u64) -> String {
    chrono::DateTime::from_timestamp((millis / 1000) as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit 1; --help and --version exit 0.
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let level = LevelFilter::from_str(&cli.log_level).unwrap_or(LevelFilter::Warn);
    let _ = SimpleLogger::new().with_level(level).init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config = ConfigParameter::new();
    config.set_timeout(cli.timeout);
    config.set_suppress_stats(cli.suppress_stats);

    let targets = match input::read_targets(&cli.input_file) {
        Ok(targets) => targets,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            eprintln!("Error: File '{}' not found.", cli.input_file);
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: Could not read '{}': {}", cli.input_file, err);
            std::process::exit(1);
        }
    };

    let state = Arc::new(ScanState::new());
    state.set_targets_total(targets.len() as u64);
    state.mark_start();

    let scanner = Scanner::new(Arc::clone(&state), &config);

    for target in &targets {
        println!("Checking {}...", target);
        let report = scanner.scan_target(target).await;
        if report.detected() {
            state.add_detected();
            println!("PHP Version: {}", report.result_text().green());
        } else {
            state.add_not_found();
            println!("PHP Version: {}", report.result_text().red());
        }
    }

    state.mark_end();

    if !config.suppress_stats() {
        println!();
        println!(
            "{} targets, {} requests ({} failed). Started at {}. {} ms. Detected: {}. Not found: {}.",
            state.targets_total(),
            state.requests(),
            state.request_failures(),
            human_readable_time(state.start_time()),
            state.elapsed_millis(),
            state.detected(),
            state.not_found()
        );
    }
}
