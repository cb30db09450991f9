//! Boss catalog and attack pattern library.

#![allow(unused_imports)]

pub mod attacks;
pub mod data;
pub mod dialogue;

pub use attacks::{AttackDescriptor, AttackPattern};
pub use data::{all_bosses, find_boss, BossDefinition, BossRewards};
pub use dialogue::{BossDialogue, DialogueState};
