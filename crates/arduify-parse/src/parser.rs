use std::collections::VecDeque;

use arduify_errors::Diagnostic;
use arduify_tokenizer::{Token, Tokenizer};
use arduify_yellow::{Builder, SyntaxKind, SyntaxSet, SyntaxTree};
use drop_bomb::DropBomb;
use text_size::{TextRange, TextSize};

pub(crate) struct Parser<'text> {
    text: &'text str,
    tokens: VecDeque<Token>,
    /// End of the last consumed token, for "expected X" errors.
    last_end: TextSize,
    events: Vec<Event>,
    diagnostics: Vec<Diagnostic>,
}

impl<'text> Parser<'text> {
    pub(crate) fn new(text: &'text str) -> Self {
        let mut tokenizer = Tokenizer::new(text);
        let mut tokens = VecDeque::new();
        loop {
            let token = tokenizer.next_token();
            let at_eof = token.kind == SyntaxKind::EOF;
            tokens.push_back(token);
            if at_eof {
                break;
            }
        }

        Self { text, tokens, last_end: 0.into(), events: Vec::new(), diagnostics: Vec::new() }
    }

    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens.get(n).map_or(SyntaxKind::EOF, |token| token.kind)
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn peek_range(&self) -> TextRange {
        self.tokens
            .front()
            .map_or_else(|| TextRange::empty(TextSize::of(self.text)), |token| token.kind_range)
    }

    pub(crate) fn advance(&mut self) {
        if self.peek_kind() == SyntaxKind::EOF {
            return;
        }
        self.bump();
    }

    /// Consumes the `EOF` token so that its leading trivia ends up in the tree.
    pub(crate) fn bump_eof(&mut self) {
        debug_assert_eq!(self.peek_kind(), SyntaxKind::EOF);
        self.bump();
    }

    fn bump(&mut self) {
        if let Some(token) = self.tokens.pop_front() {
            self.last_end = token.kind_range.end();
            self.events.push(Event::Token(token));
        }
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn at_set(&self, set: &SyntaxSet) -> bool {
        set.contains(self.peek_kind())
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if !self.at(kind) {
            return false;
        }
        self.advance();
        true
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        let message = format!("expected {}", describe(kind));
        self.diagnostics.push(Diagnostic::error(message, TextRange::empty(self.last_end)));
        false
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len() as u32;
        self.events.push(Event::TOMBSTONE);
        Marker::new(pos)
    }

    pub(crate) fn error(&mut self, message: &str) {
        self.diagnostics.push(Diagnostic::error(message, self.peek_range()));
    }

    /// Reports an error and wraps the current token into an `ERROR` node.
    pub(crate) fn error_and_bump(&mut self, message: &str) {
        let m = self.start();
        self.error(message);
        self.advance();
        m.complete(self, SyntaxKind::ERROR);
    }

    /// Like `error_and_bump`, but leaves tokens of the recovery set (and
    /// braces) for an enclosing rule to consume.
    pub(crate) fn error_recover(&mut self, message: &str, recovery: &SyntaxSet) {
        if self.at_set(recovery) || matches!(self.peek_kind(), SyntaxKind::L_BRACE | SyntaxKind::R_BRACE)
        {
            self.error(message);
            return;
        }
        self.error_and_bump(message);
    }

    pub(crate) fn build_tree(self) -> (SyntaxTree, Vec<Diagnostic>) {
        let Parser { text, tokens: _, last_end: _, mut events, diagnostics } = self;
        let mut builder = Builder::new(text);
        let mut forward_parents = Vec::new();

        for i in 0..events.len() {
            match std::mem::replace(&mut events[i], Event::TOMBSTONE) {
                Event::Start { kind, forward_parent } => {
                    if kind == SyntaxKind::TOMBSTONE {
                        continue;
                    }

                    forward_parents.push(kind);
                    let mut idx = i;
                    let mut fp = forward_parent;
                    while let Some(fwd) = fp {
                        idx += fwd as usize;

                        fp = match std::mem::replace(&mut events[idx], Event::TOMBSTONE) {
                            Event::Start { kind, forward_parent } => {
                                if kind != SyntaxKind::TOMBSTONE {
                                    forward_parents.push(kind);
                                }
                                forward_parent
                            }
                            _ => unreachable!(),
                        };
                    }

                    for kind in forward_parents.drain(..).rev() {
                        builder.start_node(kind);
                    }
                }
                Event::Finish => {
                    builder.finish_node();
                }
                Event::Token(Token { leading, kind, kind_range, trailing }) => {
                    builder.token(kind, &leading, kind_range.len(), &trailing);
                }
            }
        }

        (builder.finish(), diagnostics)
    }
}

fn describe(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::SEMICOLON => "`;`",
        SyntaxKind::COMMA => "`,`",
        SyntaxKind::COLON => "`:`",
        SyntaxKind::EQ => "`=`",
        SyntaxKind::L_PAREN => "`(`",
        SyntaxKind::R_PAREN => "`)`",
        SyntaxKind::L_BRACKET => "`[`",
        SyntaxKind::R_BRACKET => "`]`",
        SyntaxKind::L_BRACE => "`{`",
        SyntaxKind::R_BRACE => "`}`",
        SyntaxKind::WHILE_KW => "`while`",
        SyntaxKind::NAME => "an identifier",
        _ => "a token",
    }
}

enum Event {
    Start { kind: SyntaxKind, forward_parent: Option<u32> },
    Token(Token),
    Finish,
}

impl Event {
    const TOMBSTONE: Self = Event::Start { kind: SyntaxKind::TOMBSTONE, forward_parent: None };
}

pub(crate) struct Marker {
    position: u32,
    bomb: DropBomb,
}

impl Marker {
    fn new(pos: u32) -> Marker {
        Marker {
            position: pos,
            bomb: DropBomb::new("Marker must be either completed or abandoned"),
        }
    }

    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();

        match &mut p.events[self.position as usize] {
            Event::Start { kind: slot, .. } => {
                *slot = kind;
            }
            _ => unreachable!(),
        }

        p.events.push(Event::Finish);
        CompletedMarker::new(self.position)
    }

    /// Drops the marker without creating a node.
    pub(crate) fn abandon(mut self, p: &mut Parser<'_>) {
        self.bomb.defuse();

        if self.position as usize == p.events.len() - 1 {
            p.events.pop();
        }
    }
}

pub(crate) struct CompletedMarker {
    pos: u32,
}

impl CompletedMarker {
    fn new(pos: u32) -> Self {
        CompletedMarker { pos }
    }

    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let new_pos = p.start();

        match &mut p.events[self.pos as usize] {
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some(new_pos.position - self.pos);
            }
            _ => unreachable!(),
        }

        new_pos
    }
}
