mod cursor;

pub use arduify_yellow::SyntaxKind;
use arduify_yellow::SyntaxKind::*;
use arduify_yellow::{TriviaPiece, TriviaPieceKind};
use cursor::{Cursor, EOF_CHAR};
use text_size::{TextRange, TextSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub leading: Vec<TriviaPiece>,
    pub kind: SyntaxKind,
    pub kind_range: TextRange,
    pub trailing: Vec<TriviaPiece>,
}

impl Token {
    const EOF: Self = Self {
        leading: Vec::new(),
        kind: EOF,
        kind_range: TextRange::empty(TextSize::new(0)),
        trailing: Vec::new(),
    };
}

/// Splits text into tokens with attached trivia.
///
/// A token owns as trailing trivia everything after it on the same line, up
/// to and including the first line break. Everything else between two
/// tokens is leading trivia of the second one. The stream ends with a single
/// `EOF` token that carries whatever trivia follows the last real token.
pub struct Tokenizer<'text> {
    text: &'text str,
    cursor: Cursor<'text>,
    current: Token,
}

impl<'text> Tokenizer<'text> {
    pub fn new(text: &'text str) -> Self {
        let mut tokenizer = Self { text, cursor: Cursor::new(text), current: Token::EOF };
        tokenizer.next_token();
        tokenizer
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    fn offset(&self) -> TextSize {
        TextSize::of(self.text) - self.cursor.len()
    }

    fn range(&self) -> TextRange {
        let end = self.offset();
        TextRange::new(end - self.cursor.pos_within_token(), end)
    }

    fn text(&self) -> &'text str {
        &self.text[self.range()]
    }

    /// Returns the current token and scans the next one.
    pub fn next_token(&mut self) -> Token {
        let leading = self.trivia(false);
        let (kind, kind_range) = self.syntax_kind();
        let trailing = if kind == EOF { Vec::new() } else { self.trivia(true) };

        std::mem::replace(&mut self.current, Token { leading, kind, kind_range, trailing })
    }

    fn trivia(&mut self, trailing: bool) -> Vec<TriviaPiece> {
        let mut pieces = Vec::new();

        loop {
            let kind = match self.cursor.peek() {
                '\n' => {
                    self.cursor.advance();
                    TriviaPieceKind::Newline
                }
                '\r' => {
                    self.cursor.advance();
                    self.cursor.eat('\n');
                    TriviaPieceKind::Newline
                }
                '/' if self.cursor.second() == '/' => {
                    self.cursor.advance_while(|c| !matches!(c, '\n' | '\r'));
                    TriviaPieceKind::SingleLineComment
                }
                '/' if self.cursor.second() == '*' => {
                    self.block_comment();
                    TriviaPieceKind::MultiLineComment
                }
                c if is_whitespace(c) && !self.cursor.is_eof() => {
                    self.cursor.advance_while(is_whitespace);
                    TriviaPieceKind::Whitespace
                }
                _ => break,
            };

            pieces.push(TriviaPiece::new(kind, self.cursor.pos_within_token()));
            self.cursor.reset_pos_within_token();

            if trailing && kind == TriviaPieceKind::Newline {
                break;
            }
        }

        pieces
    }

    /// `/* ... */`; an unterminated comment runs to the end of the text.
    fn block_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_eof() {
            if self.cursor.advance() == '*' && self.cursor.eat('/') {
                return;
            }
        }
    }

    fn syntax_kind(&mut self) -> (SyntaxKind, TextRange) {
        if self.cursor.is_eof() {
            return (EOF, TextRange::empty(self.offset()));
        }

        let kind = match self.cursor.advance() {
            '(' => L_PAREN,
            ')' => R_PAREN,
            '[' => L_BRACKET,
            ']' => R_BRACKET,
            '{' => L_BRACE,
            '}' => R_BRACE,
            ';' => SEMICOLON,
            ',' => COMMA,
            ':' => COLON,
            '?' => QUESTION,
            '~' => TILDE,
            '.' if self.cursor.peek().is_ascii_digit() => {
                self.digits(false);
                self.real_tail()
            }
            '.' => DOT,
            '+' => self.compound(&[('+', PLUS_PLUS), ('=', PLUS_EQ)], PLUS),
            '-' => self.compound(&[('-', MINUS_MINUS), ('=', MINUS_EQ)], MINUS),
            '*' => self.compound(&[('=', STAR_EQ)], STAR),
            '/' => self.compound(&[('=', SLASH_EQ)], SLASH),
            '%' => self.compound(&[('=', PERCENT_EQ)], PERCENT),
            '&' => self.compound(&[('&', AMP_AMP), ('=', AMP_EQ)], AMP),
            '|' => self.compound(&[('|', PIPE_PIPE), ('=', PIPE_EQ)], PIPE),
            '^' => self.compound(&[('=', CARET_EQ)], CARET),
            '!' => self.compound(&[('=', BANG_EQ)], BANG),
            '=' => self.compound(&[('=', EQ_EQ)], EQ),
            '<' if self.cursor.eat('<') => self.compound(&[('=', SHL_EQ)], SHL),
            '<' => self.compound(&[('=', LT_EQ)], LT),
            '>' if self.cursor.eat('>') => self.compound(&[('=', SHR_EQ)], SHR),
            '>' => self.compound(&[('=', GT_EQ)], GT),
            first_char @ '0'..='9' => self.number(first_char),
            '"' => self.quoted('"', STRING),
            '\'' => self.quoted('\'', CHAR),
            '@' if self.cursor.eat('"') => self.verbatim_string(),
            '@' if is_ident_start(self.cursor.peek()) => {
                self.cursor.advance_while(is_ident_continue);
                NAME
            }
            c if is_ident_start(c) => {
                self.cursor.advance_while(is_ident_continue);
                keyword(self.text()).unwrap_or(NAME)
            }
            _ => UNKNOWN,
        };

        let range = self.range();
        self.cursor.reset_pos_within_token();

        (kind, range)
    }

    /// Longest match over operators sharing a first character.
    fn compound(&mut self, seconds: &[(char, SyntaxKind)], single: SyntaxKind) -> SyntaxKind {
        for &(second, kind) in seconds {
            if self.cursor.eat(second) {
                return kind;
            }
        }
        single
    }

    fn number(&mut self, first_char: char) -> SyntaxKind {
        if first_char == '0' {
            match self.cursor.peek() {
                'x' | 'X' => {
                    self.cursor.advance();
                    self.digits(true);
                    self.integer_suffix();
                    return INT_NUMBER;
                }
                'b' | 'B' => {
                    self.cursor.advance();
                    self.digits(false);
                    self.integer_suffix();
                    return INT_NUMBER;
                }
                _ => {}
            }
        }

        self.digits(false);

        if self.cursor.peek() == '.' && self.cursor.second().is_ascii_digit() {
            self.cursor.advance();
            self.digits(false);
            return self.real_tail();
        }

        if matches!(self.cursor.peek(), 'e' | 'E' | 'f' | 'F' | 'd' | 'D' | 'm' | 'M') {
            return self.real_tail();
        }

        self.integer_suffix();
        INT_NUMBER
    }

    /// Optional exponent and type suffix of a real literal.
    fn real_tail(&mut self) -> SyntaxKind {
        if matches!(self.cursor.peek(), 'e' | 'E') {
            self.cursor.advance();
            if matches!(self.cursor.peek(), '+' | '-') {
                self.cursor.advance();
            }
            self.digits(false);
        }

        if matches!(self.cursor.peek(), 'f' | 'F' | 'd' | 'D' | 'm' | 'M') {
            self.cursor.advance();
        }

        REAL_NUMBER
    }

    fn digits(&mut self, allow_hex: bool) {
        loop {
            match self.cursor.peek() {
                '_' | '0'..='9' => {
                    self.cursor.advance();
                }
                'a'..='f' | 'A'..='F' if allow_hex => {
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    fn integer_suffix(&mut self) {
        self.cursor.advance_while(|c| matches!(c, 'u' | 'U' | 'l' | 'L'));
    }

    /// A regular string or char literal; must close on the same line.
    fn quoted(&mut self, quote: char, kind: SyntaxKind) -> SyntaxKind {
        loop {
            match self.cursor.peek() {
                _ if self.cursor.is_eof() => return UNKNOWN,
                '\n' | '\r' => return UNKNOWN,
                c if c == quote => {
                    self.cursor.advance();
                    return kind;
                }
                '\\' => {
                    self.cursor.advance();
                    if !matches!(self.cursor.peek(), '\n' | '\r') {
                        self.cursor.advance();
                    }
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// `@"..."`, where `""` stands for a quote and line breaks are allowed.
    fn verbatim_string(&mut self) -> SyntaxKind {
        while !self.cursor.is_eof() {
            if self.cursor.advance() == '"' && !self.cursor.eat('"') {
                return STRING;
            }
        }
        UNKNOWN
    }
}

fn is_whitespace(c: char) -> bool {
    c != EOF_CHAR && !matches!(c, '\n' | '\r') && c.is_whitespace()
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

fn keyword(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "using" => USING_KW,
        "namespace" => NAMESPACE_KW,
        "class" => CLASS_KW,
        "struct" => STRUCT_KW,
        "public" => PUBLIC_KW,
        "private" => PRIVATE_KW,
        "protected" => PROTECTED_KW,
        "internal" => INTERNAL_KW,
        "static" => STATIC_KW,
        "const" => CONST_KW,
        "readonly" => READONLY_KW,
        "volatile" => VOLATILE_KW,
        "if" => IF_KW,
        "else" => ELSE_KW,
        "for" => FOR_KW,
        "while" => WHILE_KW,
        "do" => DO_KW,
        "switch" => SWITCH_KW,
        "case" => CASE_KW,
        "default" => DEFAULT_KW,
        "break" => BREAK_KW,
        "continue" => CONTINUE_KW,
        "return" => RETURN_KW,
        "true" => TRUE_KW,
        "false" => FALSE_KW,
        "null" => NULL_KW,
        "void" => VOID_KW,
        "bool" => BOOL_KW,
        "byte" => BYTE_KW,
        "sbyte" => SBYTE_KW,
        "char" => CHAR_KW,
        "short" => SHORT_KW,
        "ushort" => USHORT_KW,
        "int" => INT_KW,
        "uint" => UINT_KW,
        "long" => LONG_KW,
        "ulong" => ULONG_KW,
        "float" => FLOAT_KW,
        "double" => DOUBLE_KW,
        "decimal" => DECIMAL_KW,
        "string" => STRING_KW,
        "object" => OBJECT_KW,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_text<'a>(token: &Token, text: &'a str) -> &'a str {
        &text[token.kind_range]
    }

    fn kinds(text: &str) -> Vec<(SyntaxKind, &str)> {
        let mut tokenizer = Tokenizer::new(text);
        let mut kinds = Vec::new();
        loop {
            let token = tokenizer.next_token();
            if token.kind == EOF {
                return kinds;
            }
            kinds.push((token.kind, token_text(&token, text)));
        }
    }

    fn trivia(pieces: &[TriviaPiece]) -> Vec<(TriviaPieceKind, u32)> {
        pieces.iter().map(|piece| (piece.kind, piece.len.into())).collect()
    }

    #[test]
    fn test_integer_literals() {
        let inputs = ["123", "0", "0b1010", "0x1f", "0XFF", "123_456", "10u", "10UL", "0xFFL"];

        for input in inputs {
            let mut tokenizer = Tokenizer::new(input);
            let token = tokenizer.next_token();
            assert_eq!(token.kind, INT_NUMBER, "Input: '{input}'");
            assert_eq!(token_text(&token, input), input, "Input: '{input}'");
            assert!(tokenizer.cursor.is_eof(), "Tokenizer did not consume all input for '{input}'");
        }
    }

    #[test]
    fn test_real_literals() {
        let inputs =
            ["123.456", "0.0", "1e10", "1.0e-5", "123_456.789_012", "2.5f", "3d", "1m", ".5"];

        for input in inputs {
            let mut tokenizer = Tokenizer::new(input);
            let token = tokenizer.next_token();
            assert_eq!(token.kind, REAL_NUMBER, "Input: '{input}'");
            assert_eq!(token_text(&token, input), input, "Input: '{input}'");
            assert!(tokenizer.cursor.is_eof(), "Tokenizer did not consume all input for '{input}'");
        }
    }

    #[test]
    fn test_member_access_on_integer() {
        assert_eq!(kinds("1.ToString"), [(INT_NUMBER, "1"), (DOT, "."), (NAME, "ToString")]);
    }

    #[test]
    fn test_keywords_and_names() {
        assert_eq!(
            kinds("int x void Setup @class classy"),
            [
                (INT_KW, "int"),
                (NAME, "x"),
                (VOID_KW, "void"),
                (NAME, "Setup"),
                (NAME, "@class"),
                (NAME, "classy"),
            ]
        );
    }

    #[test]
    fn test_longest_match_operators() {
        assert_eq!(
            kinds("a <<= b >> c >= d && e || !f != g ++ -- += -="),
            [
                (NAME, "a"),
                (SHL_EQ, "<<="),
                (NAME, "b"),
                (SHR, ">>"),
                (NAME, "c"),
                (GT_EQ, ">="),
                (NAME, "d"),
                (AMP_AMP, "&&"),
                (NAME, "e"),
                (PIPE_PIPE, "||"),
                (BANG, "!"),
                (NAME, "f"),
                (BANG_EQ, "!="),
                (NAME, "g"),
                (PLUS_PLUS, "++"),
                (MINUS_MINUS, "--"),
                (PLUS_EQ, "+="),
                (MINUS_EQ, "-="),
            ]
        );
    }

    #[test]
    fn test_eq_operator_without_whitespace() {
        assert_eq!(
            kinds("x=y==z"),
            [(NAME, "x"), (EQ, "="), (NAME, "y"), (EQ_EQ, "=="), (NAME, "z")]
        );
    }

    #[test]
    fn test_strings_and_chars() {
        assert_eq!(
            kinds(r#""a \"b\"" 'c' '\n' @"C:\dir ""x""""#),
            [
                (STRING, r#""a \"b\"""#),
                (CHAR, "'c'"),
                (CHAR, r"'\n'"),
                (STRING, r#"@"C:\dir ""x""""#),
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(kinds("\"abc\nx"), [(UNKNOWN, "\"abc"), (NAME, "x")]);
        assert_eq!(kinds("'a"), [(UNKNOWN, "'a")]);
    }

    #[test]
    fn test_stray_character() {
        assert_eq!(kinds("a # b"), [(NAME, "a"), (UNKNOWN, "#"), (NAME, "b")]);
    }

    #[test]
    fn test_trailing_trivia_stops_after_newline() {
        let text = "x; // done\n\n  y";
        let mut tokenizer = Tokenizer::new(text);

        let x = tokenizer.next_token();
        assert!(x.leading.is_empty());
        assert!(x.trailing.is_empty());

        let semicolon = tokenizer.next_token();
        assert_eq!(
            trivia(&semicolon.trailing),
            [
                (TriviaPieceKind::Whitespace, 1),
                (TriviaPieceKind::SingleLineComment, 7),
                (TriviaPieceKind::Newline, 1),
            ]
        );

        let y = tokenizer.next_token();
        assert_eq!(token_text(&y, text), "y");
        assert_eq!(
            trivia(&y.leading),
            [(TriviaPieceKind::Newline, 1), (TriviaPieceKind::Whitespace, 2)]
        );

        let eof = tokenizer.next_token();
        assert_eq!(eof.kind, EOF);
        assert_eq!(eof.kind_range, TextRange::empty(TextSize::of(text)));
    }

    #[test]
    fn test_crlf_is_one_piece() {
        let text = "a\r\n\r\nb";
        let mut tokenizer = Tokenizer::new(text);

        let a = tokenizer.next_token();
        assert_eq!(trivia(&a.trailing), [(TriviaPieceKind::Newline, 2)]);

        let b = tokenizer.next_token();
        assert_eq!(trivia(&b.leading), [(TriviaPieceKind::Newline, 2)]);
    }

    #[test]
    fn test_block_comments() {
        let text = "a /* one\ntwo */ b /* open";
        let mut tokenizer = Tokenizer::new(text);

        let a = tokenizer.next_token();
        assert_eq!(
            trivia(&a.trailing),
            [
                (TriviaPieceKind::Whitespace, 1),
                (TriviaPieceKind::MultiLineComment, 13),
                (TriviaPieceKind::Whitespace, 1),
            ]
        );

        let b = tokenizer.next_token();
        assert_eq!(token_text(&b, text), "b");
        assert_eq!(
            trivia(&b.trailing),
            [(TriviaPieceKind::Whitespace, 1), (TriviaPieceKind::MultiLineComment, 7)]
        );

        let eof = tokenizer.next_token();
        assert_eq!(eof.kind, EOF);
        assert!(eof.leading.is_empty());
    }

    #[test]
    fn test_trailing_trivia_of_last_token_goes_to_eof() {
        let text = "}\n\n// end\n";
        let mut tokenizer = Tokenizer::new(text);

        let brace = tokenizer.next_token();
        assert_eq!(trivia(&brace.trailing), [(TriviaPieceKind::Newline, 1)]);

        let eof = tokenizer.next_token();
        assert_eq!(eof.kind, EOF);
        assert_eq!(
            trivia(&eof.leading),
            [
                (TriviaPieceKind::Newline, 1),
                (TriviaPieceKind::SingleLineComment, 6),
                (TriviaPieceKind::Newline, 1),
            ]
        );
    }

    #[test]
    fn test_eof_repeats() {
        let mut tokenizer = Tokenizer::new("");
        assert_eq!(tokenizer.next_token().kind, EOF);
        assert_eq!(tokenizer.next_token().kind, EOF);
        assert_eq!(tokenizer.peek().kind, EOF);
    }
}
