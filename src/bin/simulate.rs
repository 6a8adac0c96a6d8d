//! Headless cultivation simulator.
//!
//! Drives `game_tick` once per simulated second and reports how far a fresh
//! character gets.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # One simulated day
//!   cargo run --bin simulate -- -t 3600 -s 42    # One hour, reproducible
//!   cargo run --bin simulate -- --json            # Machine-readable report

use cultivation::core::constants::{CHECK_INTERVAL_SECONDS, DEFAULT_CHARACTER_NAME};
use cultivation::{game_tick, Character, CharacterSummary, TickEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_SECONDS: u64 = 86_400;

struct SimConfig {
    seconds: u64,
    seed: Option<u64>,
    name: String,
    json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seconds: DEFAULT_SECONDS,
            seed: None,
            name: DEFAULT_CHARACTER_NAME.to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct BreakthroughRecord {
    second: u64,
    tier: String,
    ability: String,
}

#[derive(Debug, Serialize)]
struct SimReport {
    seconds: u64,
    seed: Option<u64>,
    breakthroughs: Vec<BreakthroughRecord>,
    rare_items: Vec<String>,
    narrative_events: u32,
    level_ups: u32,
    summary: CharacterSummary,
}

impl SimReport {
    fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Simulated {} seconds\n\n", self.seconds));
        out.push_str("Breakthroughs:\n");
        if self.breakthroughs.is_empty() {
            out.push_str("  (none)\n");
        }
        for b in &self.breakthroughs {
            out.push_str(&format!(
                "  {:>8}s  {:<26} learned {}\n",
                b.second, b.tier, b.ability
            ));
        }
        out.push_str(&format!("\nLevel ups:        {}\n", self.level_ups));
        out.push_str(&format!("Narrative events: {}\n", self.narrative_events));
        out.push_str(&format!("Rare items:       {}\n", self.rare_items.len()));
        for name in &self.rare_items {
            out.push_str(&format!("  {}\n", name));
        }
        out.push('\n');
        out.push_str(&self.summary.to_string());
        out
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Some(config) => config,
        None => return ExitCode::SUCCESS,
    };

    let report = run(&config);

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to encode report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report.to_text());
    }
    ExitCode::SUCCESS
}

fn run(config: &SimConfig) -> SimReport {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut character = Character::new(config.name.clone(), &mut rng);

    let mut breakthroughs = Vec::new();
    let mut rare_items = Vec::new();
    let mut narrative_events = 0;
    let mut level_ups = 0;

    let mut second = 0;
    while second < config.seconds {
        let step = CHECK_INTERVAL_SECONDS.min(config.seconds - second);
        second += step;
        character.record_play_time(step as f64);

        for event in game_tick(&mut character, step, &mut rng).events {
            match event {
                TickEvent::BreakthroughAchieved {
                    to, ability_name, ..
                } => breakthroughs.push(BreakthroughRecord {
                    second,
                    tier: to.name().to_string(),
                    ability: ability_name,
                }),
                TickEvent::RareItemFound { item_name, .. } => rare_items.push(item_name),
                TickEvent::NarrativeEvent { .. } => narrative_events += 1,
                TickEvent::LeveledUp { levels, .. } => level_ups += levels,
                TickEvent::PowerGained { .. } => {}
            }
        }
    }

    SimReport {
        seconds: config.seconds,
        seed: config.seed,
        breakthroughs,
        rare_items,
        narrative_events,
        level_ups,
        summary: character.detailed_summary(),
    }
}

/// Returns `None` when only help was requested.
fn parse_args(args: &[String]) -> Option<SimConfig> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-t" | "--seconds" => {
                if i + 1 < args.len() {
                    config.seconds = args[i + 1].parse().unwrap_or(DEFAULT_SECONDS);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-n" | "--name" => {
                if i + 1 < args.len() {
                    config.name = args[i + 1].clone();
                    i += 1;
                }
            }
            "--json" => {
                config.json = true;
            }
            "-h" | "--help" => {
                print_help();
                return None;
            }
            _ => {}
        }
        i += 1;
    }

    Some(config)
}

fn print_help() {
    println!("Cultivation Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -t, --seconds <N>   Seconds of training to simulate (default: 86400)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -n, --name <NAME>   Character name (default: Daoist)");
    println!("        --json          Print the report as JSON");
    println!("    -h, --help          Show this help");
}
