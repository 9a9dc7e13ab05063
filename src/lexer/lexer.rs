use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Turns matched text into a token, or `None` for text that is skipped.
pub type RegexHandler = fn(&Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        // every pattern is anchored so a match can only start at the cursor
        regex: Regex::new(&format!("^(?:{})", regex)).unwrap(),
        handler,
    }
}

lazy_static! {
    // Order matters: the first pattern that matches wins, so longer operators
    // come before their prefixes and floats before integers.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("\\s+", skip_handler),
        pattern("//[^\\n]*", skip_handler),
        pattern("/\\*(?s:.)*?\\*/", skip_handler),
        pattern("[A-Za-z_][A-Za-z0-9_]*", symbol_handler),
        pattern("[0-9]+\\.[0-9]*", MK_DEFAULT_HANDLER!(TokenKind::Float)),
        pattern("[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Integer)),
        pattern("==", MK_DEFAULT_HANDLER!(TokenKind::EqualEqual)),
        pattern("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEqual)),
        pattern(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEqual)),
        pattern("<=", MK_DEFAULT_HANDLER!(TokenKind::SmallerEqual)),
        pattern("&&", MK_DEFAULT_HANDLER!(TokenKind::And)),
        pattern("\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or)),
        pattern("=", MK_DEFAULT_HANDLER!(TokenKind::Equal)),
        pattern("!", MK_DEFAULT_HANDLER!(TokenKind::Bang)),
        pattern(">", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        pattern("<", MK_DEFAULT_HANDLER!(TokenKind::Smaller)),
        pattern("\\(", MK_DEFAULT_HANDLER!(TokenKind::LParen)),
        pattern("\\)", MK_DEFAULT_HANDLER!(TokenKind::RParen)),
        pattern("\\[", MK_DEFAULT_HANDLER!(TokenKind::LBrace)),
        pattern("\\]", MK_DEFAULT_HANDLER!(TokenKind::RBrace)),
        pattern("\\{", MK_DEFAULT_HANDLER!(TokenKind::LCurly)),
        pattern("\\}", MK_DEFAULT_HANDLER!(TokenKind::RCurly)),
        pattern(";", MK_DEFAULT_HANDLER!(TokenKind::Semi)),
        pattern(",", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        pattern("-", MK_DEFAULT_HANDLER!(TokenKind::Minus)),
        pattern("\\*", MK_DEFAULT_HANDLER!(TokenKind::Mul)),
        pattern("/", MK_DEFAULT_HANDLER!(TokenKind::Div)),
        pattern("%", MK_DEFAULT_HANDLER!(TokenKind::Mod)),
    ];
}

/// A lazy token stream over one source text.
///
/// Tokens are produced on demand by [`Iterator::next`]. Cloning a lexer
/// that has not been advanced yet gives an independent stream over the same
/// source, which is how the stream is restarted. After an unrecognised
/// character the stream yields that error once and then ends.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: Rc<String>,
    pos: usize,
    file: Rc<String>,
    failed: bool,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: Rc::new(source.to_string()),
            pos: 0,
            file: file_name,
            failed: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.get_position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while !self.at_eof() {
            let source = Rc::clone(&self.source);
            let remaining = &source[self.pos..];

            let found = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())))
                // an unclosed block comment must not fall through to `/` and `*`
                .filter(|(_, matched)| !remaining.starts_with("/*") || matched.starts_with("/*"));

            let Some((handler, matched)) = found else {
                self.failed = true;
                let token = if remaining.starts_with("/*") {
                    String::from("/*")
                } else {
                    remaining.chars().next().map(String::from).unwrap_or_default()
                };
                return Some(Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    self.get_position(),
                )));
            };

            let token = handler(self, matched);
            self.advance_n(matched.len());

            if let Some(token) = token {
                trace!(kind = %token.kind, value = %token.value, "lexed token");
                return Some(Ok(token));
            }
        }

        None
    }
}

fn skip_handler(_lexer: &Lexer, _matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP.get(matched).copied().unwrap_or(TokenKind::Id);

    Some(MK_TOKEN!(kind, String::from(matched), lexer.span_of(matched.len())))
}

/// Tokenizes a whole source text, stopping at the first unrecognised
/// character.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(source, file).collect::<Result<Vec<Token>, Error>>()?;

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
