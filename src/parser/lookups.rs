use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence levels, weakest first. Note that the logical operators bind
/// tighter than the relational ones.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Logical,
    Additive,
    Multiplicative,
    Unary,
    Index,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Node, Error>;
pub type LEDHandler = fn(&mut Parser, Node, BindingPower) -> Result<Node, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.led(TokenKind::EqualEqual, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::NotEqual, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::GreaterEqual, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Smaller, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::SmallerEqual, BindingPower::Relational, parse_binary_expr);

    // Logical
    parser.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Minus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Mul, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Div, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Mod, BindingPower::Multiplicative, parse_binary_expr);

    // Array reference
    parser.led(TokenKind::LBrace, BindingPower::Index, parse_array_ref_expr);

    // Literals, symbols and prefixes
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Float, parse_primary_expr);
    parser.nud(TokenKind::Id, parse_primary_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::LParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::IntType, parse_declaration_stmt);
    parser.stmt(TokenKind::FloatType, parse_declaration_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::LCurly, parse_block_stmt);
}

// Tables keyed by the token that starts (or continues) a construct
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
