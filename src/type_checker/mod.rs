//! Type checking module.
//!
//! This module checks that every assignment stores a value of the type its
//! target was declared with:
//!
//! - Declarations fill a flat symbol table, in source order
//! - Expression types are inferred from their int and float leaves
//! - Mismatches are collected into a report instead of aborting
//! - Use of an undeclared identifier is a fatal error

pub mod report;
pub mod type_checker;
