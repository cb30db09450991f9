//! Headless balance simulator for boss encounters.
//!
//! Runs many seeded encounters per boss through the real controller, with an
//! action policy choosing menu options and an autopilot console answering
//! every minigame, then reports the outcome distribution and pacing.

mod config;
mod report;
mod runner;

pub use config::{SimConfig, SimPolicy};
pub use report::{BossReport, RunStats, SimReport};
pub use runner::{run_simulation, simulate_encounter};
