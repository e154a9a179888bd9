use arduify_yellow::SyntaxKind::{self, *};

use super::{exprs, types, variable_declaration};
use crate::parser::Parser;

pub(crate) fn block(p: &mut Parser<'_>) {
    let m = p.start();
    p.expect(L_BRACE);

    while !p.at(R_BRACE) && !p.at(EOF) {
        stmt(p);
    }

    p.expect(R_BRACE);
    m.complete(p, BLOCK);
}

fn stmt(p: &mut Parser<'_>) {
    match p.peek_kind() {
        L_BRACE => block(p),
        SEMICOLON => {
            let m = p.start();
            p.advance();
            m.complete(p, EMPTY_STMT);
        }
        IF_KW => if_stmt(p),
        FOR_KW => for_stmt(p),
        WHILE_KW => while_stmt(p),
        DO_KW => do_stmt(p),
        SWITCH_KW => switch_stmt(p),
        BREAK_KW => keyword_stmt(p, BREAK_STMT),
        CONTINUE_KW => keyword_stmt(p, CONTINUE_STMT),
        RETURN_KW => return_stmt(p),
        CONST_KW => local_decl(p),
        _ if at_local_decl(p) => local_decl(p),
        _ if exprs::at_expr(p) => expr_stmt(p),
        _ => p.error_and_bump("expected a statement"),
    }
}

/// Statement nested in `if`, `else`, `for`, `while` and `do`.
fn embedded_stmt(p: &mut Parser<'_>) {
    if p.at(R_BRACE) || p.at(EOF) {
        p.error("expected a statement");
    } else {
        stmt(p);
    }
}

/// `Type name ...`, as opposed to an expression starting with a name.
fn at_local_decl(p: &Parser<'_>) -> bool {
    let len = types::type_len(p, 0);
    len > 0 && p.nth(len) == NAME
}

fn local_decl(p: &mut Parser<'_>) {
    let m = p.start();
    p.eat(CONST_KW);
    variable_declaration(p);
    p.expect(SEMICOLON);
    m.complete(p, LOCAL_DECL_STMT);
}

fn expr_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    exprs::expr(p);
    p.expect(SEMICOLON);
    m.complete(p, EXPR_STMT);
}

/// `(condition)` of `if`, `while`, `do` and `switch`.
fn condition(p: &mut Parser<'_>) {
    p.expect(L_PAREN);
    exprs::expr(p);
    p.expect(R_PAREN);
}

fn if_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    condition(p);
    embedded_stmt(p);

    if p.at(ELSE_KW) {
        let else_clause = p.start();
        p.advance();
        embedded_stmt(p);
        else_clause.complete(p, ELSE_CLAUSE);
    }

    m.complete(p, IF_STMT);
}

fn for_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    p.expect(L_PAREN);

    if at_local_decl(p) {
        variable_declaration(p);
    } else if !p.at(SEMICOLON) {
        expr_list(p, INITIALIZER_LIST);
    }
    p.expect(SEMICOLON);

    if !p.at(SEMICOLON) {
        exprs::expr(p);
    }
    p.expect(SEMICOLON);

    if !p.at(R_PAREN) {
        expr_list(p, INCREMENTOR_LIST);
    }
    p.expect(R_PAREN);

    embedded_stmt(p);
    m.complete(p, FOR_STMT);
}

fn expr_list(p: &mut Parser<'_>, kind: SyntaxKind) {
    let m = p.start();
    loop {
        exprs::expr(p);
        if !p.eat(COMMA) {
            break;
        }
    }
    m.complete(p, kind);
}

fn while_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    condition(p);
    embedded_stmt(p);
    m.complete(p, WHILE_STMT);
}

fn do_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    embedded_stmt(p);
    if p.expect(WHILE_KW) {
        condition(p);
    }
    p.expect(SEMICOLON);
    m.complete(p, DO_STMT);
}

fn switch_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    condition(p);

    if p.expect(L_BRACE) {
        while !p.at(R_BRACE) && !p.at(EOF) {
            if matches!(p.peek_kind(), CASE_KW | DEFAULT_KW) {
                switch_section(p);
            } else {
                p.error_and_bump("expected `case` or `default`");
            }
        }
        p.expect(R_BRACE);
    }

    m.complete(p, SWITCH_STMT);
}

fn switch_section(p: &mut Parser<'_>) {
    let m = p.start();

    while matches!(p.peek_kind(), CASE_KW | DEFAULT_KW) {
        let label = p.start();
        if p.eat(CASE_KW) {
            exprs::expr(p);
            p.expect(COLON);
            label.complete(p, CASE_LABEL);
        } else {
            p.advance();
            p.expect(COLON);
            label.complete(p, DEFAULT_LABEL);
        }
    }

    while !matches!(p.peek_kind(), CASE_KW | DEFAULT_KW | R_BRACE | EOF) {
        stmt(p);
    }

    m.complete(p, SWITCH_SECTION);
}

/// `break;` and `continue;`
fn keyword_stmt(p: &mut Parser<'_>, kind: SyntaxKind) {
    let m = p.start();
    p.advance();
    p.expect(SEMICOLON);
    m.complete(p, kind);
}

fn return_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    if !p.at(SEMICOLON) {
        exprs::expr(p);
    }
    p.expect(SEMICOLON);
    m.complete(p, RETURN_STMT);
}
