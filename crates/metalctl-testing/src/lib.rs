//! Testing infrastructure for metalctlv2 integration tests.
//!
//! - `TestWorld`: isolated config file and entity documents per test
//! - `fixtures`: API dumps covering the interesting rendering cases
//! - `assertions`: checks on table and JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
