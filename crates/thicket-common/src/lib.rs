//! Common utilities for the thicket parser.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated stderr output for recoveries

pub mod warning;
