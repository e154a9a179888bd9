use arduify_yellow::SyntaxKind::{self, *};
use arduify_yellow::SyntaxSet;

use crate::parser::Parser;

mod exprs;
pub(crate) mod items;
mod stmts;
mod types;

/// Tokens that can start a type.
const TYPE_FIRST: SyntaxSet = SyntaxSet::new([
    NAME, VOID_KW, BOOL_KW, BYTE_KW, SBYTE_KW, CHAR_KW, SHORT_KW, USHORT_KW, INT_KW, UINT_KW,
    LONG_KW, ULONG_KW, FLOAT_KW, DOUBLE_KW, DECIMAL_KW, STRING_KW, OBJECT_KW,
]);

/// `name = value, other`
pub(crate) fn variable_declarators(p: &mut Parser<'_>) {
    loop {
        let m = p.start();
        p.expect(NAME);
        if p.at(EQ) {
            let init = p.start();
            p.advance();
            exprs::expr(p);
            init.complete(p, INITIALIZER);
        }
        m.complete(p, VARIABLE_DECLARATOR);

        if !p.eat(COMMA) {
            break;
        }
    }
}

/// A type followed by its declarators.
pub(crate) fn variable_declaration(p: &mut Parser<'_>) {
    let m = p.start();
    types::type_(p);
    variable_declarators(p);
    m.complete(p, VARIABLE_DECLARATION);
}

pub(crate) fn delimited(
    p: &mut Parser<'_>,
    bra: SyntaxKind,
    ket: SyntaxKind,
    delim: SyntaxKind,
    unexpected_delim_message: &'static str,
    first_set: &SyntaxSet,
    mut parser: impl FnMut(&mut Parser<'_>) -> bool,
) {
    debug_assert_eq!(p.peek_kind(), bra);
    p.advance();

    while !p.at(ket) && !p.at(EOF) {
        if p.at(delim) {
            let m = p.start();
            p.error(unexpected_delim_message);
            p.advance();
            m.complete(p, ERROR);
            continue;
        }

        if !parser(p) {
            break;
        }

        if !p.eat(delim) {
            if first_set.contains(p.peek_kind()) {
                p.expect(delim);
            } else {
                break;
            }
        }
    }

    p.expect(ket);
}
