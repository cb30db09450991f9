//! Boss encounter balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 500 runs per boss
//!   cargo run --bin simulate -- -n 100 --boss marsh_king
//!   cargo run --bin simulate -- --seed 42 --policy merciful

use angler::minigames::Difficulty;
use angler::simulator::{run_simulation, SimConfig, SimPolicy};
use angler::utils::logging;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);
    logging::init_stderr_logging("warn");

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("simulate: {}", e);
            std::process::exit(1);
        }
    };

    if args.iter().any(|a| a == "--json") {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "-n" | "--runs" => {
                if let Some(v) = value {
                    config.num_runs = v.parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if let Some(v) = value {
                    config.seed = v.parse().ok();
                    i += 1;
                }
            }
            "-b" | "--boss" => {
                if let Some(v) = value {
                    config.boss = Some(v.clone());
                    i += 1;
                }
            }
            "-p" | "--policy" => {
                if let Some(v) = value {
                    config.policy = SimPolicy::parse(v).unwrap_or(config.policy);
                    i += 1;
                }
            }
            "-d" | "--difficulty" => {
                if let Some(v) = value {
                    config.difficulty = Difficulty::parse(v).unwrap_or(config.difficulty);
                    i += 1;
                }
            }
            "--strength" => {
                if let Some(v) = value {
                    config.stats.strength = v.parse().unwrap_or(config.stats.strength);
                    i += 1;
                }
            }
            "--max-turns" => {
                if let Some(v) = value {
                    config.max_turns = v.parse().unwrap_or(config.max_turns);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Angler Boss Encounter Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>          Encounters per boss (default: 500)");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    -b, --boss <ID>         Only simulate one boss");
    println!("    -p, --policy <P>        aggressive or merciful (default: aggressive)");
    println!("    -d, --difficulty <D>    easy, normal or hard (default: normal)");
    println!("    --strength <N>          Player strength (default: 5)");
    println!("    --max-turns <N>         Turn cap per encounter (default: 200)");
    println!("    -v, --verbose           Print every run");
    println!("    --json                  Print the report as JSON");
    println!("    -h, --help              Show this help");
}
