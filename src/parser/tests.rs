//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Expressions and operator precedence
//! - Assignments and declarations
//! - If/else statements and nested blocks
//! - Error cases

use std::rc::Rc;

use crate::{
    ast::{ast::{BlockStmt, Node}, types::PrimitiveType},
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::tokenize, tokens::{Token, TokenKind}},
    Position, Span,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<BlockStmt, Error> {
    let tokens = tokenize(source, Some("test.cb".to_string())).unwrap();
    parse(tokens, Rc::new("test.cb".to_string()))
}

fn parse_ok(source: &str) -> BlockStmt {
    parse_source(source).unwrap()
}

fn expr_program(expr: Node) -> BlockStmt {
    BlockStmt::new(vec![Node::statement(expr)])
}

fn unexpected_kind(source: &str) -> TokenKind {
    match parse_source(source).unwrap_err().get_internal_error() {
        ErrorImpl::UnexpectedToken { kind, .. } => *kind,
        other => panic!("Expected unexpected token error, got {:?}", other),
    }
}

fn token(kind: TokenKind, value: &str) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: Span {
            start: Position::null(),
            end: Position::null(),
        },
    }
}

#[test]
fn test_parse_hand_built_tokens() {
    let tokens = vec![
        token(TokenKind::Integer, "1"),
        token(TokenKind::Plus, "+"),
        token(TokenKind::Integer, "1"),
        token(TokenKind::Semi, ";"),
    ];

    let result = parse(tokens, Rc::new("test.cb".to_string())).unwrap();

    assert_eq!(
        result,
        expr_program(Node::bin_op("+", Node::integer(1), Node::integer(1)))
    );
}

#[test]
fn test_parse_op_order() {
    assert_eq!(
        parse_ok("1 + 5 * 20;"),
        expr_program(Node::bin_op(
            "+",
            Node::integer(1),
            Node::bin_op("*", Node::integer(5), Node::integer(20))
        ))
    );
}

#[test]
fn test_parse_parens() {
    assert_eq!(
        parse_ok("(1 + 5) * 20;"),
        expr_program(Node::bin_op(
            "*",
            Node::bin_op("+", Node::integer(1), Node::integer(5)),
            Node::integer(20)
        ))
    );
}

#[test]
fn test_parse_relational_is_lowest() {
    assert_eq!(
        parse_ok("3 * 5 + 3 == 18;"),
        expr_program(Node::bin_op(
            "==",
            Node::bin_op(
                "+",
                Node::bin_op("*", Node::integer(3), Node::integer(5)),
                Node::integer(3)
            ),
            Node::integer(18)
        ))
    );
}

#[test]
fn test_parse_logical_between_relational_and_additive() {
    assert_eq!(
        parse_ok("a == b && c;"),
        expr_program(Node::bin_op(
            "==",
            Node::id("a"),
            Node::bin_op("&&", Node::id("b"), Node::id("c"))
        ))
    );
    assert_eq!(
        parse_ok("a + b || c;"),
        expr_program(Node::bin_op(
            "||",
            Node::bin_op("+", Node::id("a"), Node::id("b")),
            Node::id("c")
        ))
    );
}

#[test]
fn test_parse_left_associativity() {
    assert_eq!(
        parse_ok("1 - 2 - 3;"),
        expr_program(Node::bin_op(
            "-",
            Node::bin_op("-", Node::integer(1), Node::integer(2)),
            Node::integer(3)
        ))
    );
    assert_eq!(
        parse_ok("a < b >= c;"),
        expr_program(Node::bin_op(
            ">=",
            Node::bin_op("<", Node::id("a"), Node::id("b")),
            Node::id("c")
        ))
    );
    assert_eq!(
        parse_ok("8 / 4 % 3;"),
        expr_program(Node::bin_op(
            "%",
            Node::bin_op("/", Node::integer(8), Node::integer(4)),
            Node::integer(3)
        ))
    );
}

#[test]
fn test_parse_unary_binds_tightest() {
    assert_eq!(
        parse_ok("-x * y;"),
        expr_program(Node::bin_op(
            "*",
            Node::unary_op("-", Node::id("x")),
            Node::id("y")
        ))
    );
    assert_eq!(
        parse_ok("!a && b;"),
        expr_program(Node::bin_op(
            "&&",
            Node::unary_op("!", Node::id("a")),
            Node::id("b")
        ))
    );
    assert_eq!(
        parse_ok("1 - -2;"),
        expr_program(Node::bin_op(
            "-",
            Node::integer(1),
            Node::unary_op("-", Node::integer(2))
        ))
    );
}

#[test]
fn test_parse_unary_over_group_and_array_ref() {
    assert_eq!(
        parse_ok("-(x * y);"),
        expr_program(Node::unary_op(
            "-",
            Node::bin_op("*", Node::id("x"), Node::id("y"))
        ))
    );
    assert_eq!(
        parse_ok("-arr[1];"),
        expr_program(Node::unary_op(
            "-",
            Node::array_ref(Node::id("arr"), Node::integer(1))
        ))
    );
}

#[test]
fn test_parse_simple_id() {
    assert_eq!(parse_ok("x;"), expr_program(Node::id("x")));
}

#[test]
fn test_parse_mixed_expression() {
    assert_eq!(
        parse_ok("x * (y + 10);"),
        expr_program(Node::bin_op(
            "*",
            Node::id("x"),
            Node::bin_op("+", Node::id("y"), Node::integer(10))
        ))
    );
}

#[test]
fn test_parse_arrayref_expression() {
    assert_eq!(
        parse_ok("arr[1];"),
        expr_program(Node::array_ref(Node::id("arr"), Node::integer(1)))
    );
    assert_eq!(
        parse_ok("grid[i + 1][j];"),
        expr_program(Node::array_ref(
            Node::array_ref(
                Node::id("grid"),
                Node::bin_op("+", Node::id("i"), Node::integer(1))
            ),
            Node::id("j")
        ))
    );
}

#[test]
fn test_parse_float_expression() {
    assert_eq!(
        parse_ok("1.0 + 2;"),
        expr_program(Node::bin_op("+", Node::float(1.0), Node::integer(2)))
    );
    assert_eq!(parse_ok("44.;"), expr_program(Node::float(44.0)));
}

#[test]
fn test_parse_assignment() {
    assert_eq!(
        parse_ok("x = 1 + 2;"),
        BlockStmt::new(vec![Node::assignment(
            Node::id("x"),
            Node::bin_op("+", Node::integer(1), Node::integer(2))
        )])
    );
    assert_eq!(
        parse_ok("birds[0] = duck;"),
        BlockStmt::new(vec![Node::assignment(
            Node::array_ref(Node::id("birds"), Node::integer(0)),
            Node::id("duck")
        )])
    );
}

#[test]
fn test_parse_declarations() {
    assert_eq!(
        parse_ok("int a; float b, c[3], d;"),
        BlockStmt::new(vec![
            Node::declaration(PrimitiveType::Int, vec![Node::id("a")]),
            Node::declaration(
                PrimitiveType::Float,
                vec![
                    Node::id("b"),
                    Node::array_ref(Node::id("c"), Node::integer(3)),
                    Node::id("d"),
                ]
            ),
        ])
    );
}

#[test]
fn test_parse_if_without_else() {
    assert_eq!(
        parse_ok("if (x > 0) { x = 1; }"),
        BlockStmt::new(vec![Node::if_statement(
            Node::bin_op(">", Node::id("x"), Node::integer(0)),
            BlockStmt::new(vec![Node::assignment(Node::id("x"), Node::integer(1))]),
            BlockStmt::empty()
        )])
    );
}

#[test]
fn test_parse_if_else() {
    assert_eq!(
        parse_ok("if (duck) { birds[1] = goose; } else { birds[1] = wildcat; }"),
        BlockStmt::new(vec![Node::if_statement(
            Node::id("duck"),
            BlockStmt::new(vec![Node::assignment(
                Node::array_ref(Node::id("birds"), Node::integer(1)),
                Node::id("goose")
            )]),
            BlockStmt::new(vec![Node::assignment(
                Node::array_ref(Node::id("birds"), Node::integer(1)),
                Node::id("wildcat")
            )])
        )])
    );
}

#[test]
fn test_parse_nested_blocks() {
    assert_eq!(
        parse_ok("a; { b; { c; } } d;"),
        BlockStmt::new(vec![
            Node::statement(Node::id("a")),
            Node::block(vec![
                Node::statement(Node::id("b")),
                Node::block(vec![Node::statement(Node::id("c"))]),
            ]),
            Node::statement(Node::id("d")),
        ])
    );
}

#[test]
fn test_parse_is_deterministic() {
    let source = "int x; float y[2]; if (x == 1 || !y[0]) { x = -x * 3 % 2; } else { { y[1] = 4.5; } }";

    let first = parse_ok(source);
    let second = parse_ok(source);

    assert_eq!(first, second);
    assert_eq!(first, first.clone());
}

#[test]
fn test_rendered_program_reparses_to_same_tree() {
    let source = "int x; float y[2]; if (x == 1 || !y[0]) { x = -x * 3 % 2; } else { { y[1] = 4.5; } } x - (1 - 2);";

    let ast = parse_ok(source);
    let rendered = ast.to_string();

    assert_eq!(parse_ok(&rendered), ast);
}

#[test]
fn test_rendered_float_literals_reparse() {
    let ast = parse_ok("x = 10000000000000000.0;\ny = 0.0000001 * 3.;");
    let rendered = ast.to_string();

    assert_eq!(rendered, "x = 10000000000000000.0;\ny = (0.0000001 * 3.0);\n");
    assert_eq!(parse_ok(&rendered), ast);
}

#[test]
fn test_parse_missing_semicolon() {
    assert_eq!(unexpected_kind("x = 1"), TokenKind::EOF);
    assert_eq!(unexpected_kind("x y;"), TokenKind::Id);
}

#[test]
fn test_parse_empty_program() {
    assert_eq!(unexpected_kind(""), TokenKind::EOF);
}

#[test]
fn test_parse_empty_block() {
    assert_eq!(unexpected_kind("{ }"), TokenKind::RCurly);
    assert_eq!(unexpected_kind("if (x) { }"), TokenKind::RCurly);
}

#[test]
fn test_parse_unclosed_block() {
    assert_eq!(unexpected_kind("{ x;"), TokenKind::EOF);
    assert_eq!(unexpected_kind("x; }"), TokenKind::RCurly);
}

#[test]
fn test_parse_assignment_to_non_lvalue() {
    assert_eq!(unexpected_kind("1 = 2;"), TokenKind::Equal);
    assert_eq!(unexpected_kind("a + b = 2;"), TokenKind::Equal);
    assert_eq!(unexpected_kind("x = y = 2;"), TokenKind::Equal);
}

#[test]
fn test_parse_index_of_non_lvalue() {
    assert_eq!(unexpected_kind("1[0];"), TokenKind::LBrace);
    assert_eq!(unexpected_kind("(a + b)[0];"), TokenKind::LBrace);
}

#[test]
fn test_parse_bad_declarations() {
    assert_eq!(unexpected_kind("int ;"), TokenKind::Semi);
    assert_eq!(unexpected_kind("int 5;"), TokenKind::Integer);
    assert_eq!(unexpected_kind("float a b;"), TokenKind::Id);
    assert_eq!(unexpected_kind("int a = 1;"), TokenKind::Equal);
}

#[test]
fn test_parse_if_requires_parens_and_blocks() {
    assert_eq!(unexpected_kind("if x { y; }"), TokenKind::Id);
    assert_eq!(unexpected_kind("if (x) y;"), TokenKind::Id);
    assert_eq!(unexpected_kind("if (x) { y; } else z;"), TokenKind::Id);
    assert_eq!(unexpected_kind("else { y; }"), TokenKind::Else);
}

#[test]
fn test_parse_unclosed_paren() {
    assert_eq!(unexpected_kind("(1 + 2;"), TokenKind::Semi);
}

#[test]
fn test_parse_error_position() {
    let error = parse_source("x = 1;\ny = ;").unwrap_err();

    assert_eq!(error.get_position().0, 11);
    assert_eq!(*error.get_position().1, "test.cb");
}

#[test]
fn test_parse_integer_overflow() {
    let error = parse_source("x = 99999999999999999999;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string()
        }
    );
}
