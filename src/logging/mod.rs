// file: src/logging/mod.rs
// version: 1.0.0
// guid: a865b8e0-3ab3-422f-af86-6cd5b13462b0

//! Logging setup for the command line front end

pub mod logger;

pub use logger::init_logger;
