//! Token storage and trivia attachment helpers.

use text_size::TextSize;

use crate::SyntaxKind;

/// Raw token stored in the tree arena.
///
/// Trivia pieces are stored as tokens of a trivia kind, directly before
/// (leading) or directly after (trailing) the token they are attached to.
#[derive(Clone, Copy)]
pub(crate) struct Token {
    pub(crate) kind: SyntaxKind,
    pub(crate) attached_trivia: AttachedTrivia,
    pub(crate) end: TextSize,
    /// Index of the parent node; for trivia, the parent of the owning token.
    pub(crate) parent: u32,
}

/// Number of trivia tokens attached on either side of a real token.
#[derive(Clone, Copy, Default)]
pub(crate) struct AttachedTrivia {
    leading: u32,
    trailing: u32,
}

impl AttachedTrivia {
    pub(crate) const NONE: Self = Self { leading: 0, trailing: 0 };

    #[inline]
    pub(crate) fn new(leading: usize, trailing: usize) -> Self {
        let leading = u32::try_from(leading).expect("too many leading trivia pieces");
        let trailing = u32::try_from(trailing).expect("too many trailing trivia pieces");
        Self { leading, trailing }
    }

    #[inline]
    pub(crate) fn leading_len(self) -> u32 {
        self.leading
    }

    #[inline]
    pub(crate) fn trailing_len(self) -> u32 {
        self.trailing
    }
}
