use std::fmt::Write as _;

use arduify_errors::Diagnostic;
use arduify_yellow::{SyntaxTree, WalkEventWithTokens};

mod grammar;
mod parser;
#[cfg(test)]
mod tests;

/// Parses a source file. Always produces a tree; problems are reported as
/// error diagnostics.
pub fn parse(text: &str) -> (SyntaxTree, Vec<Diagnostic>) {
    let mut parser = parser::Parser::new(text);
    grammar::items::compilation_unit(&mut parser);
    parser.build_tree()
}

/// Indented dump of node kinds and token texts.
pub fn debug_tree(tree: &SyntaxTree) -> String {
    let mut out = String::new();
    let mut depth = 0;

    for event in tree.root().preorder_with_tokens() {
        match event {
            WalkEventWithTokens::EnterNode(node) => {
                _ = writeln!(out, "{:indent$}{:?}", "", node.kind(), indent = depth * 2);
                depth += 1;
            }
            WalkEventWithTokens::LeaveNode(_) => depth -= 1,
            WalkEventWithTokens::Token(token) => {
                _ = writeln!(
                    out,
                    "{:indent$}{:?} {:?}",
                    "",
                    token.kind(),
                    token.text_trimmed(),
                    indent = depth * 2
                );
            }
        }
    }

    out
}
