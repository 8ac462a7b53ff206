//! Core library for the `linkseed` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, random payload generation, payload delivery,
//! and run metrics. The primary user-facing interface is the `linkseed`
//! command-line application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod error;
pub mod generate;
pub mod http;
pub mod metrics;
