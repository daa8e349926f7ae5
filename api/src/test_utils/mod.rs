//! Test utilities
//!
//! In-memory port implementations and test fixtures for unit testing.
//!
//! AppState holds services over `dyn` repositories, so HTTP tests in
//! `integration_tests` run the real router against these in-memory stores.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
