use arduify_yellow::SyntaxKind::*;

use super::{TYPE_FIRST, delimited, stmts, types, variable_declaration};
use crate::parser::{Marker, Parser};

pub(crate) fn compilation_unit(p: &mut Parser<'_>) {
    let m = p.start();

    while p.at(USING_KW) {
        using_directive(p);
    }

    while !p.at(EOF) {
        item(p);
    }

    p.bump_eof();
    m.complete(p, COMPILATION_UNIT);
}

fn using_directive(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    name_path(p);
    p.expect(SEMICOLON);
    m.complete(p, USING_DIRECTIVE);
}

fn name_path(p: &mut Parser<'_>) {
    let m = p.start();
    if p.expect(NAME) {
        while p.at(DOT) && p.nth(1) == NAME {
            p.advance();
            p.advance();
        }
    }
    m.complete(p, NAME_PATH);
}

fn item(p: &mut Parser<'_>) {
    match p.peek_kind() {
        NAMESPACE_KW => namespace(p),
        CLASS_KW | STRUCT_KW => {
            let m = p.start();
            class(p, m);
        }
        kind if kind.is_modifier() => {
            let m = p.start();
            modifiers(p);
            if matches!(p.peek_kind(), CLASS_KW | STRUCT_KW) {
                class(p, m);
            } else {
                p.error("expected a class");
                m.complete(p, ERROR);
            }
        }
        USING_KW => p.error_and_bump("using directives must come first"),
        _ => p.error_and_bump("expected a namespace or a class"),
    }
}

fn namespace(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    name_path(p);

    match p.peek_kind() {
        L_BRACE => {
            p.advance();
            while p.at(USING_KW) {
                using_directive(p);
            }
            while !p.at(R_BRACE) && !p.at(EOF) {
                item(p);
            }
            p.expect(R_BRACE);
        }
        // `namespace N;` covers the rest of the file.
        SEMICOLON => {
            p.advance();
            while !p.at(EOF) {
                item(p);
            }
        }
        _ => p.error("expected `{`"),
    }

    m.complete(p, NAMESPACE);
}

fn modifiers(p: &mut Parser<'_>) {
    while p.peek_kind().is_modifier() {
        p.advance();
    }
}

/// `class Name { members }`; `m` already covers the modifiers.
fn class(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    p.expect(NAME);

    if p.at(L_BRACE) {
        p.advance();
        while !p.at(R_BRACE) && !p.at(EOF) {
            member(p);
        }
        p.expect(R_BRACE);
    } else {
        p.error("expected `{`");
    }

    m.complete(p, CLASS);
}

fn member(p: &mut Parser<'_>) {
    let m = p.start();
    modifiers(p);

    if matches!(p.peek_kind(), CLASS_KW | STRUCT_KW) {
        class(p, m);
        return;
    }

    let type_len = types::type_len(p, 0);
    if type_len == 0 {
        p.error("expected a member declaration");
        if !p.at(R_BRACE) {
            p.advance();
        }
        m.complete(p, ERROR);
        return;
    }

    if p.nth(type_len) == NAME && p.nth(type_len + 1) == L_PAREN {
        types::type_(p);
        p.advance();
        param_list(p);
        if p.at(L_BRACE) {
            stmts::block(p);
        } else {
            p.expect(SEMICOLON);
        }
        m.complete(p, METHOD);
    } else {
        variable_declaration(p);
        p.expect(SEMICOLON);
        m.complete(p, FIELD);
    }
}

fn param_list(p: &mut Parser<'_>) {
    let m = p.start();
    delimited(p, L_PAREN, R_PAREN, COMMA, "expected a parameter", &TYPE_FIRST, param);
    m.complete(p, PARAM_LIST);
}

fn param(p: &mut Parser<'_>) -> bool {
    if !types::at_type(p) {
        return false;
    }

    let m = p.start();
    types::type_(p);
    p.expect(NAME);
    m.complete(p, PARAM);
    true
}
