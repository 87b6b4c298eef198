//! # Dwell CLI Library
//!
//! Command definitions and handlers for the dwell command-line tool.

pub mod cli;
pub mod clients;
