//! Command-line front end for the wext build configuration synthesizer.
//!
//! The heavy lifting lives in `wext-config`; this crate parses flags into a
//! [`wext_config::BuildRequest`], runs synthesis, and emits the resulting
//! configuration as JSON for the external bundling engine.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
