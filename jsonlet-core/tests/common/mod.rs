//! Test infrastructure for the jsonlet parser
//!
//! Provides fixture loading and the expected-outcome model.

mod loader;

pub use loader::{load_fixtures_by_name, Expectation, TestCase};
