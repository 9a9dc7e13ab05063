use crate::{ast::ast::Node, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected());
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the current level, keep folding it into lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser.get_bp_lookup().get(&token_kind).unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected());
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

fn number_parse_error(parser: &Parser) -> Error {
    Error::new(
        ErrorImpl::NumberParseError {
            token: parser.current_token().value.clone(),
        },
        parser.get_position(),
    )
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let parsed = parser.current_token().value.parse::<i64>();
            match parsed {
                Ok(value) => {
                    parser.advance();
                    Ok(Node::integer(value))
                }
                Err(_) => Err(number_parse_error(parser)),
            }
        }
        TokenKind::Float => {
            let parsed = parser.current_token().value.parse::<f64>();
            match parsed {
                Ok(value) => {
                    parser.advance();
                    Ok(Node::float(value))
                }
                Err(_) => Err(number_parse_error(parser)),
            }
        }
        TokenKind::Id => Ok(Node::id(&parser.advance().value)),
        _ => Err(parser.unexpected()),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Node, bp: BindingPower) -> Result<Node, Error> {
    let operator_token = parser.advance();

    // Same binding power on the right makes the operators left-associative
    let right = parse_expr(parser, bp)?;

    Ok(Node::bin_op(&operator_token.value, left, right))
}

/// `-expr` and `!expr`. The operand is parsed at unary strength, so
/// `-x * y` negates `x` only.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Node, Error> {
    let operator_token = parser.advance();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Node::unary_op(&operator_token.value, operand))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::LParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RParen)?;

    Ok(expr)
}

/// `variable [ expr ]`. Only identifiers and array references can be indexed.
pub fn parse_array_ref_expr(parser: &mut Parser, left: Node, _bp: BindingPower) -> Result<Node, Error> {
    if !left.is_lvalue() {
        return Err(parser.unexpected());
    }

    parser.expect(TokenKind::LBrace)?;
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RBrace)?;

    Ok(Node::array_ref(left, index))
}
