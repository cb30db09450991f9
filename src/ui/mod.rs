//! Terminal rendering for the encounter screen.

pub mod encounter_scene;
