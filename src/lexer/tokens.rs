use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("int", TokenKind::IntType);
        map.insert("float", TokenKind::FloatType);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Synthesized by the parser at end of input, never lexed.
    EOF,

    // Reserved
    If,
    Else,
    IntType,
    FloatType,

    LParen,
    RParen,
    LBrace, // [
    RBrace, // ]
    LCurly,
    RCurly,
    Semi,
    Comma,
    Equal, // =

    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Bang,
    EqualEqual,
    NotEqual,
    Greater,
    GreaterEqual,
    Smaller,
    SmallerEqual,

    Integer,
    Float,
    Id,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexed token. Equality looks at `kind` and `value` only; the span is
/// carried for diagnostics.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whether the lexeme is worth printing next to the kind.
    pub fn has_payload(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Id, TokenKind::Integer, TokenKind::Float])
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_payload() {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{} ({:?})", self.kind, self.value)
        }
    }
}
