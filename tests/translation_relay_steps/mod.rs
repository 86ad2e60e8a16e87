//! Step definitions for translation relay BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
