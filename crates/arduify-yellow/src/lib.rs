//! Lossless, immutable syntax tree with parent links and attached trivia.
//!
//! The tree is built once and then navigated through small `Copy` handles
//! that index into flat node and token arenas. Trivia pieces live in the
//! token arena next to the token they belong to, so every piece has a stable
//! identity (`TokenId`) independent of its text.

/// Typed AST wrappers around the raw syntax tree.
pub mod ast;
mod builder;
mod nodes;
mod syntax;
mod syntax_kind;
mod syntax_set;
mod trivia;

/// Incremental builder for constructing a `SyntaxTree`.
pub use builder::Builder;
/// Primary syntax tree API types and adapters.
pub use syntax::{
    ChildrenWithTokens, NodeOrToken, PreorderWithTokens, SyntaxElement, SyntaxNode, SyntaxToken,
    SyntaxTree, TokenId, TriviaIter, WalkEventWithTokens,
};
/// Token and node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
/// Trivia pieces attached to tokens.
pub use trivia::{TriviaPiece, TriviaPieceKind};
