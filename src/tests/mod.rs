//! Crate-level tests, grouped by concern


mod generation_tests;
mod boundary_tests;
