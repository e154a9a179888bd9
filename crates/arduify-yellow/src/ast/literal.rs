use std::borrow::Cow;
use std::str::Chars;

use crate::SyntaxKind;

/// Decoded value of a literal token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue<'a> {
    Int(u64),
    /// Digits of a real literal, without separators or type suffix.
    Real(Cow<'a, str>),
    Bool(bool),
    Null,
    String(String),
    Char(char),
    /// A literal whose text does not decode, e.g. an out of range integer.
    Invalid(&'a str),
}

pub(super) fn value(kind: SyntaxKind, text: &str) -> LiteralValue<'_> {
    let value = match kind {
        SyntaxKind::TRUE_KW => Some(LiteralValue::Bool(true)),
        SyntaxKind::FALSE_KW => Some(LiteralValue::Bool(false)),
        SyntaxKind::NULL_KW => Some(LiteralValue::Null),
        SyntaxKind::INT_NUMBER => int_value(text).map(LiteralValue::Int),
        SyntaxKind::REAL_NUMBER => Some(LiteralValue::Real(real_value(text))),
        SyntaxKind::STRING => string_value(text).map(LiteralValue::String),
        SyntaxKind::CHAR => char_value(text).map(LiteralValue::Char),
        _ => None,
    };
    value.unwrap_or(LiteralValue::Invalid(text))
}

fn int_value(text: &str) -> Option<u64> {
    let text = text.trim_end_matches(['u', 'U', 'l', 'L']);
    let (digits, radix) = if let Some(hex) = text.strip_prefix("0x").or(text.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = text.strip_prefix("0b").or(text.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (text, 10)
    };
    let digits = digits.replace('_', "");
    u64::from_str_radix(&digits, radix).ok()
}

fn real_value(text: &str) -> Cow<'_, str> {
    let text = text.trim_end_matches(['f', 'F', 'd', 'D', 'm', 'M']);
    if text.contains('_') { Cow::Owned(text.replace('_', "")) } else { Cow::Borrowed(text) }
}

fn string_value(text: &str) -> Option<String> {
    if let Some(verbatim) = text.strip_prefix('@') {
        let inner = verbatim.strip_prefix('"')?.strip_suffix('"')?;
        return Some(inner.replace("\"\"", "\""));
    }
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    unescape(inner)
}

fn char_value(text: &str) -> Option<char> {
    let inner = text.strip_prefix('\'')?.strip_suffix('\'')?;
    let unescaped = unescape(inner)?;
    let mut chars = unescaped.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn unescape(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.next()? {
            '\'' => '\'',
            '"' => '"',
            '\\' => '\\',
            '0' => '\0',
            'a' => '\x07',
            'b' => '\x08',
            'f' => '\x0C',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\x0B',
            'x' => hex_escape(&mut chars, 1, 4)?,
            'u' => hex_escape(&mut chars, 4, 4)?,
            'U' => hex_escape(&mut chars, 8, 8)?,
            _ => return None,
        };
        out.push(escaped);
    }
    Some(out)
}

fn hex_escape(chars: &mut Chars<'_>, min: usize, max: usize) -> Option<char> {
    let mut value = 0u32;
    let mut len = 0;
    while len < max {
        let Some(digit) = chars.clone().next().and_then(|c| c.to_digit(16)) else {
            break;
        };
        chars.next();
        value = value * 16 + digit;
        len += 1;
    }
    if len < min {
        return None;
    }
    char::from_u32(value)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{LiteralValue, value};
    use crate::SyntaxKind::*;

    #[test]
    fn integers() {
        assert_eq!(value(INT_NUMBER, "42"), LiteralValue::Int(42));
        assert_eq!(value(INT_NUMBER, "1_000"), LiteralValue::Int(1000));
        assert_eq!(value(INT_NUMBER, "0xFF"), LiteralValue::Int(255));
        assert_eq!(value(INT_NUMBER, "0b1010"), LiteralValue::Int(10));
        assert_eq!(value(INT_NUMBER, "10UL"), LiteralValue::Int(10));
        assert_eq!(
            value(INT_NUMBER, "99999999999999999999"),
            LiteralValue::Invalid("99999999999999999999")
        );
    }

    #[test]
    fn reals() {
        assert_eq!(value(REAL_NUMBER, "1.5f"), LiteralValue::Real(Cow::Borrowed("1.5")));
        assert_eq!(value(REAL_NUMBER, "1_0.25"), LiteralValue::Real(Cow::Borrowed("10.25")));
        assert_eq!(value(REAL_NUMBER, "2e10"), LiteralValue::Real(Cow::Borrowed("2e10")));
    }

    #[test]
    fn strings() {
        assert_eq!(value(STRING, r#""a\tb""#), LiteralValue::String("a\tb".to_owned()));
        assert_eq!(value(STRING, r#"@"C:\dir""""#), LiteralValue::String(r#"C:\dir""#.to_owned()));
        assert_eq!(value(STRING, r#""\x41\u0042""#), LiteralValue::String("AB".to_owned()));
        assert_eq!(value(STRING, r#""\q""#), LiteralValue::Invalid(r#""\q""#));
    }

    #[test]
    fn chars() {
        assert_eq!(value(CHAR, "'a'"), LiteralValue::Char('a'));
        assert_eq!(value(CHAR, r"'\n'"), LiteralValue::Char('\n'));
        assert_eq!(value(CHAR, r"'\''"), LiteralValue::Char('\''));
        assert_eq!(value(CHAR, r"'\u00B0'"), LiteralValue::Char('\u{B0}'));
        assert_eq!(value(CHAR, "'ab'"), LiteralValue::Invalid("'ab'"));
    }

    #[test]
    fn keywords() {
        assert_eq!(value(TRUE_KW, "true"), LiteralValue::Bool(true));
        assert_eq!(value(NULL_KW, "null"), LiteralValue::Null);
    }
}
