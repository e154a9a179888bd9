//! Node storage and child references.

use crate::SyntaxKind;

/// Raw node stored in the tree arena.
pub(crate) struct Node {
    pub(crate) parent: Option<u32>,
    pub(crate) kind: SyntaxKind,
    /// Start of this node's slice in `TreeInner::children`.
    pub(crate) children_start: u32,
    pub(crate) children_len: u32,
    /// First and last non-trivia token spanned, `None` for empty nodes.
    pub(crate) tokens: Option<(u32, u32)>,
}

/// Child reference: an index into either the node or the token arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Child {
    Node(u32),
    Token(u32),
}
