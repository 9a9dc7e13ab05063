//! The `Parser` cursor and the `parse` entry point.
//!
//! Expressions go through the Pratt loop in `expr.rs`, driven by the handler
//! and binding power tables registered in `lookups.rs`. Statements dispatch
//! on their first token through a third table.

use std::{collections::HashMap, rc::Rc};

use tracing::{debug, trace};

use crate::{
    ast::ast::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Cursor over a token vector plus the dispatch tables.
///
/// Reading past the last token yields a synthesized `EOF` token positioned at
/// the end of the input, so the lexer never has to emit one.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    file: Rc<String>,
    eof: Token,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// An empty-table parser; `create_token_lookups` fills the tables.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let end = tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(|| Position(0, Rc::clone(&file)));

        Parser {
            tokens,
            pos: 0,
            eof: MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ),
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Steps past the current token and hands it back. Stays put at EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn unexpected(&self) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                kind: token.kind,
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    }

    /// Consumes the current token if it is `expected_kind`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected())
        } else {
            Ok(self.advance())
        }
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers an infix handler and the operator's binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a prefix handler. The binding power table is left alone
    /// because `-` is both a prefix and an additive infix operator.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }
}

/// Parses a whole program into its root block.
///
/// A program is one or more statements. Parsing stops at the first error;
/// no partial tree is returned.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<BlockStmt, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    let mut statements = vec![];

    // An empty input still reaches `parse_stmt`, which rejects the EOF
    loop {
        let statement = parse_stmt(&mut parser)?;
        trace!(statement = %statement, "parsed statement");
        statements.push(statement);

        if !parser.has_tokens() {
            break;
        }
    }

    debug!(file = %parser.get_file(), statements = statements.len(), "parsed program");
    Ok(BlockStmt::new(statements))
}
