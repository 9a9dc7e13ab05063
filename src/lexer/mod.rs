//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, integer and float literals
//! - Token spans for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
