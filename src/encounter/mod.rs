//! Encounter controller: context, turn loop, menu frames and the
//! admission/settlement wrapper around one fight.

#![allow(unused_imports)]

pub mod context;
pub mod logic;
pub mod session;
pub mod types;
pub mod view;

pub use context::EncounterContext;
pub use logic::{roll_flee, Encounter};
pub use session::{admit, play_admitted, play_boss};
pub use types::{ActionResult, BossTurnReport, EncounterState, PlayerAction};
