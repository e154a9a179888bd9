use arduify_yellow::SyntaxKind::{self, *};
use arduify_yellow::SyntaxSet;

use super::{delimited, types};
use crate::parser::{CompletedMarker, Parser};

const EXPR_FIRST: SyntaxSet = SyntaxSet::new([
    NAME,
    INT_NUMBER,
    REAL_NUMBER,
    STRING,
    CHAR,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
    L_PAREN,
    BANG,
    TILDE,
    MINUS,
    PLUS,
    PLUS_PLUS,
    MINUS_MINUS,
]);

/// Tokens an enclosing rule knows how to handle after a missing expression.
const EXPR_RECOVERY: SyntaxSet =
    SyntaxSet::new([SEMICOLON, COMMA, COLON, R_PAREN, R_BRACKET, EOF]);

pub(crate) fn at_expr(p: &Parser<'_>) -> bool {
    p.at_set(&EXPR_FIRST)
}

pub(crate) fn expr(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let lhs = binary_expr(p, 0)?;

    if !p.peek_kind().is_assignment_operator() {
        return Some(lhs);
    }

    let m = lhs.precede(p);
    p.advance();
    expr(p);
    Some(m.complete(p, ASSIGN_EXPR))
}

fn infix_binding_power(kind: SyntaxKind) -> Option<u8> {
    let power = match kind {
        PIPE_PIPE => 1,
        AMP_AMP => 2,
        PIPE => 3,
        CARET => 4,
        AMP => 5,
        EQ_EQ | BANG_EQ => 6,
        LT | GT | LT_EQ | GT_EQ => 7,
        SHL | SHR => 8,
        PLUS | MINUS => 9,
        STAR | SLASH | PERCENT => 10,
        _ => return None,
    };
    Some(power)
}

fn binary_expr(p: &mut Parser<'_>, min_power: u8) -> Option<CompletedMarker> {
    let mut lhs = unary_expr(p)?;

    while let Some(power) = infix_binding_power(p.peek_kind()) {
        if power <= min_power {
            break;
        }

        let m = lhs.precede(p);
        p.advance();
        binary_expr(p, power);
        lhs = m.complete(p, BINARY_EXPR);
    }

    Some(lhs)
}

fn unary_expr(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    match p.peek_kind() {
        BANG | TILDE | MINUS | PLUS | PLUS_PLUS | MINUS_MINUS => {
            let m = p.start();
            p.advance();
            unary_expr(p);
            Some(m.complete(p, PREFIX_EXPR))
        }
        L_PAREN if at_cast(p) => {
            let m = p.start();
            p.advance();
            types::type_(p);
            p.expect(R_PAREN);
            unary_expr(p);
            Some(m.complete(p, CAST_EXPR))
        }
        _ => postfix_expr(p),
    }
}

/// `(int)x`; only built-in types are recognized, `(Foo)x` would be
/// ambiguous with a parenthesized name.
fn at_cast(p: &Parser<'_>) -> bool {
    p.nth(1).is_predefined_type() && p.nth(1 + types::type_len(p, 1)) == R_PAREN
}

fn postfix_expr(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let mut lhs = primary_expr(p)?;

    loop {
        lhs = match p.peek_kind() {
            L_PAREN => {
                let m = lhs.precede(p);
                arg_list(p);
                m.complete(p, CALL_EXPR)
            }
            DOT => {
                let m = lhs.precede(p);
                p.advance();
                p.expect(NAME);
                m.complete(p, MEMBER_ACCESS_EXPR)
            }
            L_BRACKET => {
                let m = lhs.precede(p);
                p.advance();
                expr(p);
                p.expect(R_BRACKET);
                m.complete(p, INDEX_EXPR)
            }
            PLUS_PLUS | MINUS_MINUS => {
                let m = lhs.precede(p);
                p.advance();
                m.complete(p, POSTFIX_EXPR)
            }
            _ => break,
        };
    }

    Some(lhs)
}

fn arg_list(p: &mut Parser<'_>) {
    let m = p.start();
    delimited(p, L_PAREN, R_PAREN, COMMA, "expected an argument", &EXPR_FIRST, |p| {
        expr(p).is_some()
    });
    m.complete(p, ARG_LIST);
}

fn primary_expr(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    match p.peek_kind() {
        kind if kind.is_literal() => {
            let m = p.start();
            p.advance();
            Some(m.complete(p, LITERAL))
        }
        NAME => {
            let m = p.start();
            p.advance();
            Some(m.complete(p, IDENT))
        }
        L_PAREN => {
            let m = p.start();
            p.advance();
            expr(p);
            p.expect(R_PAREN);
            Some(m.complete(p, PAREN_EXPR))
        }
        _ => {
            p.error_recover("expected an expression", &EXPR_RECOVERY);
            None
        }
    }
}
