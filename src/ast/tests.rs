//! Unit tests for the AST model: structural equality and rendering.

use super::{ast::{BlockStmt, Node}, types::PrimitiveType};

#[test]
fn test_equal_trees_compare_equal() {
    let build = || {
        Node::bin_op(
            "+",
            Node::integer(1),
            Node::bin_op("*", Node::id("x"), Node::float(2.5)),
        )
    };

    assert_eq!(build(), build());
}

#[test]
fn test_different_variants_are_unequal() {
    assert_ne!(Node::integer(1), Node::float(1.0));
    assert_ne!(Node::id("x"), Node::array_ref(Node::id("x"), Node::integer(0)));
    assert_ne!(
        Node::statement(Node::id("x")),
        Node::block(vec![Node::id("x")])
    );
}

#[test]
fn test_different_fields_are_unequal() {
    assert_ne!(
        Node::bin_op("+", Node::integer(1), Node::integer(2)),
        Node::bin_op("-", Node::integer(1), Node::integer(2))
    );
    assert_ne!(
        Node::unary_op("-", Node::integer(1)),
        Node::unary_op("!", Node::integer(1))
    );
    assert_ne!(
        Node::declaration(PrimitiveType::Int, vec![Node::id("a")]),
        Node::declaration(PrimitiveType::Float, vec![Node::id("a")])
    );
}

#[test]
fn test_sequence_length_mismatch_is_unequal() {
    let short = BlockStmt::new(vec![Node::statement(Node::id("a"))]);
    let long = BlockStmt::new(vec![
        Node::statement(Node::id("a")),
        Node::statement(Node::id("b")),
    ]);

    assert_ne!(short, long);
    assert_ne!(long, short);
    assert_ne!(
        Node::declaration(PrimitiveType::Int, vec![Node::id("a")]),
        Node::declaration(PrimitiveType::Int, vec![Node::id("a"), Node::id("b")])
    );
}

#[test]
fn test_empty_else_is_an_empty_block() {
    let if_statement = Node::if_statement(
        Node::id("x"),
        BlockStmt::new(vec![Node::statement(Node::integer(1))]),
        BlockStmt::empty(),
    );

    match if_statement {
        Node::IfStatement { else_branch, .. } => {
            assert!(else_branch.is_empty());
            assert_eq!(else_branch, BlockStmt::new(vec![]));
        }
        _ => panic!("Expected if statement"),
    }
}

#[test]
fn test_base_name_of_lvalues() {
    let nested = Node::array_ref(
        Node::array_ref(Node::id("grid"), Node::integer(1)),
        Node::integer(2),
    );

    assert_eq!(Node::id("x").base_name(), Some("x"));
    assert_eq!(nested.base_name(), Some("grid"));
    assert!(nested.is_lvalue());
    assert_eq!(Node::integer(3).base_name(), None);
    assert!(!Node::bin_op("+", Node::id("a"), Node::id("b")).is_lvalue());
}

#[test]
fn test_render_expressions() {
    let expr = Node::bin_op(
        "+",
        Node::integer(1),
        Node::bin_op("*", Node::unary_op("-", Node::id("x")), Node::float(20.0)),
    );

    assert_eq!(expr.to_string(), "(1 + (-x * 20.0))");
    assert_eq!(
        Node::array_ref(Node::id("birds"), Node::integer(0)).to_string(),
        "birds[0]"
    );
}

#[test]
fn test_render_floats_without_exponent() {
    assert_eq!(Node::float(1e16).to_string(), "10000000000000000.0");
    assert_eq!(Node::float(1e-7).to_string(), "0.0000001");
    assert_eq!(Node::float(2000.0).to_string(), "2000.0");
    assert_eq!(Node::float(4.5).to_string(), "4.5");
}

#[test]
fn test_render_program() {
    let program = BlockStmt::new(vec![
        Node::declaration(
            PrimitiveType::Float,
            vec![Node::id("duck"), Node::array_ref(Node::id("birds"), Node::integer(2))],
        ),
        Node::if_statement(
            Node::id("duck"),
            BlockStmt::new(vec![Node::assignment(Node::id("duck"), Node::float(1.0))]),
            BlockStmt::new(vec![Node::block(vec![Node::statement(Node::id("duck"))])]),
        ),
    ]);

    let expected = "float duck, birds[2];\n\
                    if (duck) {\n    duck = 1.0;\n} else {\n    {\n        duck;\n    }\n}\n";

    assert_eq!(program.to_string(), expected);
}
