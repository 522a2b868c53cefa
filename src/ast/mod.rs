/// AST (Abstract Syntax Tree) module
/// Contains the binary expression tree produced by the parser
///
/// Submodules:
/// - ast: Tree nodes, construction and traversals
/// - render: Diagnostic tree drawing and infix re-rendering
pub mod ast;
pub mod render;

#[cfg(test)]
mod tests;
