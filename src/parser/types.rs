//! Type parsing.
//!
//! Declarations start with a type keyword. Only the two primitive types
//! exist, so a type is exactly one keyword token.

use crate::{ast::types::PrimitiveType, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Parses `int` or `float`.
pub fn parse_type(parser: &mut Parser) -> Result<PrimitiveType, Error> {
    let ty = match parser.current_token_kind() {
        TokenKind::IntType => PrimitiveType::Int,
        TokenKind::FloatType => PrimitiveType::Float,
        _ => return Err(parser.unexpected()),
    };

    parser.advance();
    Ok(ty)
}
