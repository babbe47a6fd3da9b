// tests/support/mod.rs
// Shared mocks and helpers for the integration test binaries. Individual test
// crates use different subsets, so silence dead_code noise here.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
