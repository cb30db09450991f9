//! Angler - boss encounter engine for a terminal fishing game.
//!
//! This module exposes the engine for the binaries, the simulator and the
//! integration tests.

pub mod bosses;
pub mod combat;
pub mod config;
pub mod console;
pub mod core;
pub mod encounter;
pub mod error;
pub mod minigames;
pub mod outcome;
pub mod profile;
pub mod simulator;
pub mod utils;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
