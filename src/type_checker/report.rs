//! The type checker's output: every mismatched assignment, in the order the
//! checker visited them.

use std::{fmt::Display, slice::Iter};

use crate::ast::{ast::Node, types::PrimitiveType};

/// An assignment whose value does not have the target's declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeError {
    /// The offending `Assignment` node.
    pub assignment: Node,
    /// Declared type of the assignment target.
    pub expected: PrimitiveType,
    /// Type inferred for the value, `None` when it has no single type.
    pub found: Option<PrimitiveType>,
}

impl TypeError {
    pub fn new(assignment: Node, expected: PrimitiveType, found: Option<PrimitiveType>) -> Self {
        TypeError {
            assignment,
            expected,
            found,
        }
    }

    pub fn get_ast_node(&self) -> &Node {
        &self.assignment
    }
}

impl Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let target = match &self.assignment {
            Node::Assignment { target, .. } => target.base_name().unwrap_or("<target>"),
            _ => "<target>",
        };

        match self.found {
            Some(found) => write!(
                f,
                "type mismatch in `{}`: `{}` is declared {} but the value is {}",
                self.assignment, target, self.expected, found
            ),
            None => write!(
                f,
                "type mismatch in `{}`: `{}` is declared {} but the value has no single type",
                self.assignment, target, self.expected
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    errors: Vec<TypeError>,
}

impl Report {
    pub fn new() -> Self {
        Report { errors: vec![] }
    }

    pub fn add_error(&mut self, error: TypeError) {
        self.errors.push(error);
    }

    pub fn get_errors(&self) -> &[TypeError] {
        &self.errors
    }

    pub fn iter(&self) -> Iter<'_, TypeError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "no type errors");
        }

        writeln!(f, "{} type error(s):", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "  {}", error)?;
        }
        Ok(())
    }
}
