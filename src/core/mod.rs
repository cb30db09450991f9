//! Balance constants and shared combat math.

#![allow(unused_imports)]

pub mod combat_math;
pub mod constants;

pub use combat_math::*;
pub use constants::*;
