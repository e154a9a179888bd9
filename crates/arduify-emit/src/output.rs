use arduify_errors::Diagnostic;
use arduify_yellow::{SyntaxElement, SyntaxNode, SyntaxToken, TokenId};
use rustc_hash::FxHashSet;

use crate::Conversion;

/// Line-oriented output buffer.
///
/// A trivia piece can be reached both as the trailing trivia of one element
/// and the leading trivia of the next wrapping node, so every emitted piece
/// is remembered and never written twice.
#[derive(Default)]
pub(crate) struct Sink {
    lines: Vec<String>,
    current: String,
    handled: FxHashSet<TokenId>,
    diagnostics: Vec<Diagnostic>,
}

impl Sink {
    pub(crate) fn emit_text(&mut self, text: &str) {
        if is_line_terminator(text) {
            let line = std::mem::take(&mut self.current);
            self.lines.push(line);
        } else {
            self.current.push_str(text);
        }
    }

    pub(crate) fn emit_leading_trivia<'a>(&mut self, element: impl Into<SyntaxElement<'a>>) {
        if let Some(token) = element.into().first_token() {
            for piece in token.leading_trivia() {
                self.emit_trivia(piece);
            }
        }
    }

    pub(crate) fn emit_trailing_trivia<'a>(&mut self, element: impl Into<SyntaxElement<'a>>) {
        if let Some(token) = element.into().last_token() {
            for piece in token.trailing_trivia() {
                self.emit_trivia(piece);
            }
        }
    }

    fn emit_trivia(&mut self, piece: SyntaxToken<'_>) {
        if self.handled.insert(piece.id()) {
            self.emit_text(piece.text_trimmed());
        }
    }

    /// Leading trivia, text and trailing trivia of a token.
    pub(crate) fn token(&mut self, token: Option<SyntaxToken<'_>>) {
        let Some(token) = token else { return };
        self.emit_leading_trivia(token);
        self.emit_text(token.text_trimmed());
        self.emit_trailing_trivia(token);
    }

    /// Emits `text` in place of `element`, keeping the element's own trivia.
    pub(crate) fn replace<'a>(&mut self, element: impl Into<SyntaxElement<'a>>, text: &str) {
        let element = element.into();
        self.emit_leading_trivia(element);
        self.emit_text(text);
        self.emit_trailing_trivia(element);
    }

    /// Records a construct that has no sketch counterpart. Nothing of it is
    /// written, not even its trivia.
    pub(crate) fn unsupported(&mut self, node: SyntaxNode<'_>, what: &str) {
        let range = node.trimmed_range();
        tracing::warn!(?range, "skipping unsupported {what}");
        self.diagnostics.push(Diagnostic::warning(format!("{what} is not supported"), range));
    }

    #[cfg(test)]
    pub(crate) fn is_handled(&self, id: TokenId) -> bool {
        self.handled.contains(&id)
    }

    pub(crate) fn finish(mut self) -> Conversion {
        if !self.current.is_empty() {
            self.lines.push(self.current);
        }
        Conversion { lines: self.lines, diagnostics: self.diagnostics }
    }
}

fn is_line_terminator(text: &str) -> bool {
    matches!(text, "\n" | "\r\n" | "\r")
}
