//! Error types and error handling for the front end.
//!
//! This module defines the fatal errors raised by the pipeline stages:
//!
//! - Error structures with source position information
//! - One variant per failure class (lexing, parsing, undeclared identifiers)
//! - Error names and suggestions used by the driver when displaying errors
//!
//! Type mismatches are not errors in this sense: the type checker collects
//! them into a report instead of aborting.

pub mod errors;
