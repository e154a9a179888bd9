//! Typed, read-only views over syntax nodes.
//!
//! Every view is a `Copy` wrapper around a `SyntaxNode`; accessors return
//! `Option` because the tree is built from possibly-erroneous input.

mod exprs;
mod items;
mod literal;
mod stmts;

pub use exprs::*;
pub use items::*;
pub use literal::LiteralValue;
pub use stmts::*;

use crate::{NodeOrToken, SyntaxKind, SyntaxNode, SyntaxToken};

/// A typed view over a node of one (or a few) kinds.
pub trait AstNode<'a>: Copy {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self>
    where
        Self: Sized;

    fn syntax(self) -> SyntaxNode<'a>;
}

/// Element of a comma separated list.
#[derive(Debug, Clone, Copy)]
pub enum Separated<'a, N> {
    Element(N),
    Separator(SyntaxToken<'a>),
}

macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<'a>(SyntaxNode<'a>);

        impl<'a> AstNode<'a> for $name<'a> {
            fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
                (syntax.kind() == SyntaxKind::$kind).then_some(Self(syntax))
            }

            fn syntax(self) -> SyntaxNode<'a> {
                self.0
            }
        }
    };
}

pub(crate) use ast_node;

ast_node!(
    /// A node the parser could not make sense of.
    ErrorNode,
    ERROR
);

fn child<'a, N: AstNode<'a>>(parent: SyntaxNode<'a>) -> Option<N> {
    parent.children().find_map(N::cast)
}

fn children<'a, N: AstNode<'a> + 'a>(parent: SyntaxNode<'a>) -> impl Iterator<Item = N> + 'a {
    parent.children().filter_map(N::cast)
}

fn token(parent: SyntaxNode<'_>, kind: SyntaxKind) -> Option<SyntaxToken<'_>> {
    parent.child_tokens().find(|token| token.kind() == kind)
}

/// First child castable to `N` that comes after the first `kind` token.
fn child_after<'a, N: AstNode<'a>>(parent: SyntaxNode<'a>, kind: SyntaxKind) -> Option<N> {
    parent
        .children_with_tokens()
        .skip_while(|child| child.kind() != kind)
        .filter_map(NodeOrToken::into_node)
        .find_map(N::cast)
}

fn separated<'a, N: AstNode<'a>>(
    parent: SyntaxNode<'a>,
) -> impl Iterator<Item = Separated<'a, N>> + 'a {
    parent.children_with_tokens().filter_map(|child| match child {
        NodeOrToken::Node(node) => N::cast(node).map(Separated::Element),
        NodeOrToken::Token(token) => {
            (token.kind() == SyntaxKind::COMMA).then_some(Separated::Separator(token))
        }
    })
}

fn modifiers(parent: SyntaxNode<'_>) -> impl Iterator<Item = SyntaxToken<'_>> {
    parent.child_tokens().filter(|token| token.kind().is_modifier())
}
