/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node sum type, blocks, structural equality and source rendering
/// - types: The primitive types named by declarations
pub mod ast;
pub mod types;

#[cfg(test)]
mod tests;
