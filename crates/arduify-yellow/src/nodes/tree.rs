use std::ops::Range;

use text_size::TextRange;

use super::node::{Child, Node};
use super::token::Token;

pub(crate) struct TreeInner {
    pub(crate) text: Box<str>,
    /// Always starts with a fake token ending at offset 0.
    pub(crate) tokens: Box<[Token]>,
    /// The root is always at index 0.
    pub(crate) nodes: Box<[Node]>,
    pub(crate) children: Box<[Child]>,
}

impl TreeInner {
    #[inline]
    pub(crate) fn token(&self, index: u32) -> &Token {
        &self.tokens[index as usize]
    }

    #[inline]
    pub(crate) fn node(&self, index: u32) -> &Node {
        &self.nodes[index as usize]
    }

    /// Range of a single token, without any attached trivia.
    #[inline]
    pub(crate) fn token_range(&self, index: u32) -> TextRange {
        let start = self.token(index - 1).end;
        TextRange::new(start, self.token(index).end)
    }

    #[inline]
    pub(crate) fn leading_trivia(&self, index: u32) -> Range<u32> {
        let len = self.token(index).attached_trivia.leading_len();
        index - len..index
    }

    #[inline]
    pub(crate) fn trailing_trivia(&self, index: u32) -> Range<u32> {
        let len = self.token(index).attached_trivia.trailing_len();
        index + 1..index + 1 + len
    }

    #[inline]
    pub(crate) fn node_children(&self, index: u32) -> &[Child] {
        let node = self.node(index);
        let start = node.children_start as usize;
        &self.children[start..start + node.children_len as usize]
    }
}
