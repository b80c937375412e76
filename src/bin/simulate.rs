//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 100 one-hour runs
//!   cargo run --bin simulate -- -n 20 -d 600    # 20 ten-minute runs
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use deepmine::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              DEEPMINE BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Duration:       {:.0}s", config.duration_seconds);
    println!("  Clicks/sec:     {:.1}", config.clicks_per_second);
    println!("  Upgrades:       {}", config.buy_upgrades);
    println!("  Gacha:          {}", config.simulate_gacha);
    println!("  Dungeon:        {}", config.simulate_dungeon);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-d" | "--duration" => {
                if i + 1 < args.len() {
                    config.duration_seconds = args[i + 1].parse().unwrap_or(3600.0);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--clicks" => {
                if i + 1 < args.len() {
                    config.clicks_per_second = args[i + 1].parse().unwrap_or(4.0);
                    i += 1;
                }
            }
            "--no-upgrades" => {
                config.buy_upgrades = false;
            }
            "--no-gacha" => {
                config.simulate_gacha = false;
            }
            "--no-dungeon" => {
                config.simulate_dungeon = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            _ => {}
        }
        i += 1;
    }

    config
}
