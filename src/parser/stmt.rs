use crate::{
    ast::ast::{BlockStmt, Node},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

/// Parses one statement: a registered statement form, an assignment, or an
/// expression followed by `;`.
pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let token_kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return handler(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;

    if parser.current_token_kind() == TokenKind::Equal {
        if !expr.is_lvalue() {
            return Err(parser.unexpected());
        }

        parser.advance();
        let value = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Semi)?;

        return Ok(Node::assignment(expr, value));
    }

    parser.expect(TokenKind::Semi)?;

    Ok(Node::statement(expr))
}

/// `type variable (, variable)* ;`
pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let type_name = parse_type(parser)?;

    let mut targets = vec![parse_variable(parser)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        targets.push(parse_variable(parser)?);
    }

    parser.expect(TokenKind::Semi)?;

    Ok(Node::declaration(type_name, targets))
}

/// An identifier followed by any number of `[ expr ]` suffixes.
pub fn parse_variable(parser: &mut Parser) -> Result<Node, Error> {
    let mut variable = Node::id(&parser.expect(TokenKind::Id)?.value);

    while parser.current_token_kind() == TokenKind::LBrace {
        parser.advance();
        let index = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::RBrace)?;
        variable = Node::array_ref(variable, index);
    }

    Ok(variable)
}

/// `if ( expr ) block [else block]`
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::If)?;

    parser.expect(TokenKind::LParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RParen)?;

    let then_branch = parse_block(parser)?;

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_block(parser)?
    } else {
        BlockStmt::empty()
    };

    Ok(Node::if_statement(condition, then_branch, else_branch))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Node, Error> {
    Ok(Node::Block(parse_block(parser)?))
}

/// `{ statement+ }`. An empty block is rejected at the `}`.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.expect(TokenKind::LCurly)?;

    let mut statements = vec![parse_stmt(parser)?];
    while parser.current_token_kind() != TokenKind::RCurly {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::RCurly)?;

    Ok(BlockStmt::new(statements))
}
