use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{ast::{BlockStmt, Node}, types::PrimitiveType},
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::report::{Report, TypeError};

/// Declared type of every variable. The language has one flat scope, so a
/// later declaration of the same name replaces the earlier one.
#[derive(Debug, Default)]
pub struct SymbolTable {
    declarations: HashMap<String, PrimitiveType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            declarations: HashMap::new(),
        }
    }

    pub fn declare_variable(&mut self, variable_name: &str, variable_type: PrimitiveType) {
        self.declarations.insert(variable_name.to_string(), variable_type);
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<PrimitiveType> {
        self.declarations.get(variable_name).copied()
    }
}

/// State of one checking run: the symbol table built so far and the
/// mismatches found so far.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub symbol_table: SymbolTable,
    pub report: Report,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            symbol_table: SymbolTable::new(),
            report: Report::new(),
        }
    }

    pub fn fetch_variable_type(&self, variable: &str) -> Result<PrimitiveType, Error> {
        self.symbol_table.get_variable(variable).ok_or_else(|| {
            Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: variable.to_string(),
                },
                Position::null(),
            )
        })
    }

    /// Infers the type of an expression from its leaves.
    ///
    /// Returns `Some(int)` or `Some(float)` when every leaf has that type and
    /// `None` when the leaves disagree or there are none (an array reference
    /// contributes no leaf). Fails if an identifier was never declared.
    pub fn infer(&self, expr: &Node) -> Result<Option<PrimitiveType>, Error> {
        let mut leaves = vec![];
        self.collect_leaf_types(expr, &mut leaves)?;

        let Some(first) = leaves.first().copied() else {
            return Ok(None);
        };

        Ok(leaves.iter().all(|ty| *ty == first).then_some(first))
    }

    fn collect_leaf_types(&self, expr: &Node, leaves: &mut Vec<PrimitiveType>) -> Result<(), Error> {
        match expr {
            Node::Float { .. } => leaves.push(PrimitiveType::Float),
            Node::Integer { .. } => leaves.push(PrimitiveType::Int),
            Node::Id { name } => leaves.push(self.fetch_variable_type(name)?),
            Node::BinOp { left, right, .. } => {
                self.collect_leaf_types(left, leaves)?;
                self.collect_leaf_types(right, leaves)?;
            }
            Node::UnaryOp { operand, .. } => self.collect_leaf_types(operand, leaves)?,
            _ => {}
        }

        Ok(())
    }

    pub fn into_report(self) -> Report {
        self.report
    }
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &Node) -> Result<(), Error> {
    match stmt {
        Node::Declaration { type_name, targets } => {
            for target in targets {
                if let Some(name) = target.base_name() {
                    debug!(variable = name, ty = %type_name, "declared variable");
                    type_checker.symbol_table.declare_variable(name, *type_name);
                }
            }
        }
        Node::Assignment { target, value } => {
            let inferred = type_checker.infer(value)?;

            let Some(name) = target.base_name() else {
                return Err(Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: target.to_string(),
                    },
                    Position::null(),
                ));
            };
            let declared = type_checker.fetch_variable_type(name)?;

            if inferred != Some(declared) {
                let error = TypeError::new(stmt.clone(), declared, inferred);
                debug!(%error, "type mismatch");
                type_checker.report.add_error(error);
            }
        }
        // The condition is not checked, only the branches
        Node::IfStatement {
            then_branch,
            else_branch,
            ..
        } => {
            type_check_block(type_checker, then_branch)?;
            type_check_block(type_checker, else_branch)?;
        }
        Node::Block(block) => type_check_block(type_checker, block)?,
        _ => {}
    }

    Ok(())
}

pub fn type_check_block(type_checker: &mut TypeChecker, block: &BlockStmt) -> Result<(), Error> {
    for stmt in block {
        type_check_stmt(type_checker, stmt)?;
    }

    Ok(())
}

/// Checks every assignment in the program against its target's declared
/// type.
///
/// Mismatches are collected into the returned report in visit order; only an
/// undeclared identifier stops the run. Each call starts from an empty
/// symbol table.
pub fn type_check(ast: &BlockStmt) -> Result<Report, Error> {
    let mut type_checker = TypeChecker::new();
    type_check_block(&mut type_checker, ast)?;

    debug!(errors = type_checker.report.len(), "type checked program");
    Ok(type_checker.into_report())
}
