#![warn(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    rust_2018_idioms
)]
#![allow(clippy::module_name_repetitions)]

//! Drops and recreates the tables used by database benchmarks, either a single
//! YCSB-style key/value table or the TPC-DS schema.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod properties;
pub mod provision;
pub mod schema;
