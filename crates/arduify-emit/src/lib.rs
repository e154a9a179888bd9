//! Sketch emitter: walks a parsed source file and writes the equivalent
//! sketch text line by line, keeping every comment and blank line in place.

use arduify_errors::Diagnostic;
use arduify_yellow::SyntaxTree;
use arduify_yellow::ast::{AstNode as _, CompilationUnit};

mod decls;
mod exprs;
mod output;
mod stmts;
#[cfg(test)]
mod tests;

/// Result of converting one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Completed lines, without terminators.
    pub lines: Vec<String>,
    /// Constructs that were left out of the sketch.
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// The sketch as a single string, one `\n` after every line.
    pub fn text(&self) -> String {
        self.lines.iter().flat_map(|line| [line.as_str(), "\n"]).collect()
    }
}

pub fn convert(tree: &SyntaxTree) -> Conversion {
    let mut sink = output::Sink::default();
    if let Some(unit) = CompilationUnit::cast(tree.root()) {
        decls::compilation_unit(&mut sink, unit);
    }
    sink.finish()
}
