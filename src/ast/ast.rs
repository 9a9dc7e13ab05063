use std::{fmt::{self, Display}, slice::Iter};

use super::types::PrimitiveType;

const INDENT: &str = "    ";

/// A sequence of statements. The program root is a block, and so are both
/// branches of an if statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub statements: Vec<Node>,
}

impl BlockStmt {
    pub fn new(statements: Vec<Node>) -> Self {
        BlockStmt { statements }
    }

    pub fn empty() -> Self {
        BlockStmt { statements: vec![] }
    }

    pub fn iter(&self) -> Iter<'_, Node> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    fn fmt_statements(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", INDENT.repeat(depth))?;
            statement.fmt_indented(f, depth)?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn fmt_braced(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{{")?;
        self.fmt_statements(f, depth + 1)?;
        write!(f, "{}}}", INDENT.repeat(depth))
    }
}

impl<'a> IntoIterator for &'a BlockStmt {
    type Item = &'a Node;
    type IntoIter = Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Renders the block as source, one statement per line, without braces.
impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_statements(f, 0)
    }
}

/// A node of the syntax tree.
///
/// Every node owns its children, so the tree has no sharing. Equality is
/// structural: same variant, equal fields, sequences of equal length compared
/// element by element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A nested `{ ... }` block.
    Block(BlockStmt),
    /// An expression used as a statement.
    Statement { expr: Box<Node> },
    /// `int a, b[3];` - targets are `Id` or `ArrayRef` nodes.
    Declaration {
        type_name: PrimitiveType,
        targets: Vec<Node>,
    },
    Assignment { target: Box<Node>, value: Box<Node> },
    Id { name: String },
    ArrayRef { base: Box<Node>, index: Box<Node> },
    Integer { value: i64 },
    Float { value: f64 },
    BinOp {
        op: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryOp { op: String, operand: Box<Node> },
    /// `else_branch` is an empty block when there is no `else`.
    IfStatement {
        condition: Box<Node>,
        then_branch: BlockStmt,
        else_branch: BlockStmt,
    },
}

impl Node {
    pub fn block(statements: Vec<Node>) -> Self {
        Node::Block(BlockStmt::new(statements))
    }

    pub fn statement(expr: Node) -> Self {
        Node::Statement { expr: Box::new(expr) }
    }

    pub fn declaration(type_name: PrimitiveType, targets: Vec<Node>) -> Self {
        Node::Declaration { type_name, targets }
    }

    pub fn assignment(target: Node, value: Node) -> Self {
        Node::Assignment {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn id(name: &str) -> Self {
        Node::Id { name: name.to_string() }
    }

    pub fn array_ref(base: Node, index: Node) -> Self {
        Node::ArrayRef {
            base: Box::new(base),
            index: Box::new(index),
        }
    }

    pub fn integer(value: i64) -> Self {
        Node::Integer { value }
    }

    pub fn float(value: f64) -> Self {
        Node::Float { value }
    }

    pub fn bin_op(op: &str, left: Node, right: Node) -> Self {
        Node::BinOp {
            op: op.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary_op(op: &str, operand: Node) -> Self {
        Node::UnaryOp {
            op: op.to_string(),
            operand: Box::new(operand),
        }
    }

    pub fn if_statement(condition: Node, then_branch: BlockStmt, else_branch: BlockStmt) -> Self {
        Node::IfStatement {
            condition: Box::new(condition),
            then_branch,
            else_branch,
        }
    }

    /// Whether the node can be assigned to: an identifier or an array
    /// reference.
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Node::Id { .. } | Node::ArrayRef { .. })
    }

    /// Name of the identifier at the base of an lvalue. `a[1][2]` names `a`.
    pub fn base_name(&self) -> Option<&str> {
        match self {
            Node::Id { name } => Some(name.as_str()),
            Node::ArrayRef { base, .. } => base.base_name(),
            _ => None,
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Node::Block(block) => block.fmt_braced(f, depth),
            Node::Statement { expr } => write!(f, "{};", expr),
            Node::Declaration { type_name, targets } => {
                write!(f, "{} ", type_name)?;
                for (i, target) in targets.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", target)?;
                }
                write!(f, ";")
            }
            Node::Assignment { target, value } => write!(f, "{} = {};", target, value),
            Node::Id { name } => write!(f, "{}", name),
            Node::ArrayRef { base, index } => write!(f, "{}[{}]", base, index),
            Node::Integer { value } => write!(f, "{}", value),
            Node::Float { value } => {
                // `{}` never switches to exponent form, which the lexer can't read
                let text = value.to_string();
                if text.contains('.') {
                    write!(f, "{}", text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
            Node::BinOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Node::UnaryOp { op, operand } => write!(f, "{}{}", op, operand),
            Node::IfStatement {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "if ({}) ", condition)?;
                then_branch.fmt_braced(f, depth)?;
                if !else_branch.is_empty() {
                    write!(f, " else ")?;
                    else_branch.fmt_braced(f, depth)?;
                }
                Ok(())
            }
        }
    }
}

/// Renders the node back as source. Binary operations are fully
/// parenthesized so the text reparses to the same tree.
impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
