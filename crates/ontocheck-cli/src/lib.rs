//! # ontocheck CLI library
//!
//! Command-line front end: loads data and schema graphs from JSON files and
//! runs the validator or the type-closure builder over them.

pub mod commands;

pub use commands::*;
