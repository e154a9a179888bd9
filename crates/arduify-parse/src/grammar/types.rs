use arduify_yellow::SyntaxKind::*;

use super::TYPE_FIRST;
use crate::parser::{CompletedMarker, Parser};

pub(crate) fn at_type(p: &Parser<'_>) -> bool {
    p.at_set(&TYPE_FIRST)
}

/// Number of tokens the type starting at lookahead `n` spans, 0 if none
/// starts there.
pub(crate) fn type_len(p: &Parser<'_>, n: usize) -> usize {
    let mut i = n;
    match p.nth(i) {
        NAME => {
            i += 1;
            while p.nth(i) == DOT && p.nth(i + 1) == NAME {
                i += 2;
            }
        }
        kind if kind.is_predefined_type() => i += 1,
        _ => return 0,
    }

    while p.nth(i) == L_BRACKET {
        let mut j = i + 1;
        while p.nth(j) == COMMA {
            j += 1;
        }
        if p.nth(j) != R_BRACKET {
            break;
        }
        i = j + 1;
    }

    i - n
}

/// `int`, `Foo.Bar`, `byte[]`, `int[,][]`
pub(crate) fn type_(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let m = p.start();
    let mut ty = match p.peek_kind() {
        NAME => {
            p.advance();
            while p.at(DOT) && p.nth(1) == NAME {
                p.advance();
                p.advance();
            }
            m.complete(p, PATH_TYPE)
        }
        kind if kind.is_predefined_type() => {
            p.advance();
            m.complete(p, PREDEFINED_TYPE)
        }
        _ => {
            m.abandon(p);
            p.error("expected a type");
            return None;
        }
    };

    while p.at(L_BRACKET) {
        let array = ty.precede(p);
        let rank = p.start();
        p.advance();
        while p.eat(COMMA) {}
        p.expect(R_BRACKET);
        rank.complete(p, RANK_SPECIFIER);
        ty = array.complete(p, ARRAY_TYPE);
    }

    Some(ty)
}
