//! Incremental builder for the immutable syntax tree.

use text_size::{TextLen, TextSize};

use crate::nodes::{AttachedTrivia, Child, Node, Token, TreeInner};
use crate::{SyntaxKind, SyntaxTree, TriviaPiece};

struct OpenNode {
    parent: Option<usize>,
    kind: SyntaxKind,
    children: Vec<Child>,
    tokens: Option<(u32, u32)>,
}

/// Builds a `SyntaxTree` from parser events.
pub struct Builder {
    nodes: Vec<OpenNode>,
    tokens: Vec<Token>,
    text: Box<str>,
    opened: Vec<usize>,
    text_len: TextSize,
}

impl Drop for Builder {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.opened.is_empty() {
            panic!("you should call `Builder::finish()`");
        }
    }
}

const DEFAULT_TREE_DEPTH: usize = 64;
const DEFAULT_TREE_SIZE: usize = 1024;

impl Builder {
    /// Creates a new builder for `text`.
    ///
    /// The token buffer is seeded with a fake token at index 0 so that every
    /// real token has a predecessor to take its start offset from.
    pub fn new(text: &str) -> Self {
        let mut tokens = Vec::with_capacity(DEFAULT_TREE_SIZE);
        tokens.push(Token {
            kind: SyntaxKind::TOMBSTONE,
            attached_trivia: AttachedTrivia::NONE,
            end: TextSize::new(0),
            parent: 0,
        });
        Self {
            nodes: Vec::with_capacity(DEFAULT_TREE_SIZE),
            tokens,
            text: text.into(),
            opened: Vec::with_capacity(DEFAULT_TREE_DEPTH),
            text_len: TextSize::new(0),
        }
    }

    #[track_caller]
    fn last_opened(&self) -> usize {
        *self.opened.last().expect("no opened nodes?")
    }

    /// Starts a new node of the given kind.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        let parent = self.opened.last().copied();
        let new_node = self.nodes.len();

        match parent {
            Some(parent) => self.nodes[parent].children.push(Child::Node(new_node as u32)),
            None => assert!(self.nodes.is_empty(), "a syntax tree has exactly one root node"),
        }

        self.nodes.push(OpenNode { parent, kind, children: Vec::new(), tokens: None });
        self.opened.push(new_node);
    }

    /// Adds a token of length `len` with its leading and trailing trivia to the
    /// innermost open node.
    pub fn token(
        &mut self,
        kind: SyntaxKind,
        leading: &[TriviaPiece],
        len: TextSize,
        trailing: &[TriviaPiece],
    ) {
        let parent = self.last_opened();

        self.trivia(leading, parent);

        let index = self.tokens.len() as u32;
        self.text_len += len;
        self.tokens.push(Token {
            kind,
            attached_trivia: AttachedTrivia::new(leading.len(), trailing.len()),
            end: self.text_len,
            parent: parent as u32,
        });

        self.trivia(trailing, parent);

        let node = &mut self.nodes[parent];
        node.children.push(Child::Token(index));
        node.tokens = Some(match node.tokens {
            Some((first, _)) => (first, index),
            None => (index, index),
        });
    }

    fn trivia(&mut self, pieces: &[TriviaPiece], parent: usize) {
        for piece in pieces {
            self.text_len += piece.len;
            self.tokens.push(Token {
                kind: piece.kind.syntax_kind(),
                attached_trivia: AttachedTrivia::NONE,
                end: self.text_len,
                parent: parent as u32,
            });
        }
    }

    /// Finishes the innermost open node.
    pub fn finish_node(&mut self) {
        let finished = self.opened.pop().expect("no opened nodes?");
        let Some(parent) = self.nodes[finished].parent else {
            return;
        };

        let child_tokens = self.nodes[finished].tokens;
        let parent = &mut self.nodes[parent];
        parent.tokens = match (parent.tokens, child_tokens) {
            (Some((first, _)), Some((_, last))) => Some((first, last)),
            (None, child) => child,
            (own, None) => own,
        };
    }

    /// Freezes the builder into a `SyntaxTree`.
    pub fn finish(mut self) -> SyntaxTree {
        assert!(self.opened.is_empty(), "unfinished nodes: {}", self.opened.len());
        assert!(!self.nodes.is_empty(), "a syntax tree needs a root node");
        debug_assert_eq!(self.text_len, self.text.text_len(), "tokens must cover the whole text");

        let open_nodes = std::mem::take(&mut self.nodes);
        let mut children = Vec::with_capacity(open_nodes.iter().map(|it| it.children.len()).sum());
        let nodes = open_nodes
            .into_iter()
            .map(|node| {
                let children_start = children.len() as u32;
                let children_len = node.children.len() as u32;
                children.extend(node.children);
                Node {
                    parent: node.parent.map(|it| it as u32),
                    kind: node.kind,
                    children_start,
                    children_len,
                    tokens: node.tokens,
                }
            })
            .collect();

        SyntaxTree {
            tree: TreeInner {
                text: std::mem::take(&mut self.text),
                tokens: std::mem::take(&mut self.tokens).into_boxed_slice(),
                nodes,
                children: children.into_boxed_slice(),
            },
        }
    }
}
