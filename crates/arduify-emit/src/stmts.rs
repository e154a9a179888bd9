use arduify_yellow::ast::{self, AstNode as _, Separated};

use crate::decls::variable_declaration;
use crate::exprs::expr;
use crate::output::Sink;

/// Statements with no sketch counterpart.
fn unsupported(stmt: ast::Stmt<'_>) -> Option<&'static str> {
    let what = match stmt {
        ast::Stmt::While(_) => "`while` statement",
        ast::Stmt::Do(_) => "`do` statement",
        ast::Stmt::Continue(_) => "`continue` statement",
        ast::Stmt::Empty(_) => "empty statement",
        ast::Stmt::Error(_) => "malformed statement",
        _ => return None,
    };
    Some(what)
}

pub(crate) fn stmt(sink: &mut Sink, stmt: ast::Stmt<'_>) {
    let syntax = stmt.syntax();
    if let Some(what) = unsupported(stmt) {
        sink.unsupported(syntax, what);
        return;
    }

    sink.emit_leading_trivia(syntax);
    match stmt {
        ast::Stmt::Block(block) => {
            sink.token(block.l_brace());
            for stmt in block.statements() {
                self::stmt(sink, stmt);
            }
            sink.token(block.r_brace());
        }
        ast::Stmt::LocalDecl(local) => {
            sink.token(local.const_token());
            if let Some(declaration) = local.declaration() {
                variable_declaration(sink, declaration);
            }
            sink.token(local.semicolon());
        }
        ast::Stmt::Expr(expr_stmt) => {
            if let Some(it) = expr_stmt.expr() {
                expr(sink, it);
            }
            sink.token(expr_stmt.semicolon());
        }
        ast::Stmt::If(if_stmt) => {
            sink.token(if_stmt.if_token());
            sink.token(if_stmt.l_paren());
            if let Some(condition) = if_stmt.condition() {
                expr(sink, condition);
            }
            sink.token(if_stmt.r_paren());
            if let Some(then_branch) = if_stmt.then_branch() {
                self::stmt(sink, then_branch);
            }
            if let Some(else_clause) = if_stmt.else_clause() {
                sink.emit_leading_trivia(else_clause.syntax());
                sink.token(else_clause.else_token());
                if let Some(body) = else_clause.body() {
                    self::stmt(sink, body);
                }
                sink.emit_trailing_trivia(else_clause.syntax());
            }
        }
        ast::Stmt::For(for_stmt) => self::for_stmt(sink, for_stmt),
        ast::Stmt::Switch(switch) => self::switch(sink, switch),
        ast::Stmt::Break(break_stmt) => {
            sink.token(break_stmt.break_token());
            sink.token(break_stmt.semicolon());
        }
        ast::Stmt::Return(return_stmt) => {
            sink.token(return_stmt.return_token());
            if let Some(it) = return_stmt.expr() {
                expr(sink, it);
            }
            sink.token(return_stmt.semicolon());
        }
        ast::Stmt::While(_)
        | ast::Stmt::Do(_)
        | ast::Stmt::Continue(_)
        | ast::Stmt::Empty(_)
        | ast::Stmt::Error(_) => {}
    }
    sink.emit_trailing_trivia(syntax);
}

fn for_stmt(sink: &mut Sink, for_stmt: ast::ForStmt<'_>) {
    sink.token(for_stmt.for_token());
    sink.token(for_stmt.l_paren());

    if let Some(declaration) = for_stmt.declaration() {
        variable_declaration(sink, declaration);
    } else if let Some(initializers) = for_stmt.initializers() {
        expr_list(sink, initializers.elements());
    }
    sink.token(for_stmt.first_semicolon());

    if let Some(condition) = for_stmt.condition() {
        expr(sink, condition);
    }
    sink.token(for_stmt.second_semicolon());

    if let Some(incrementors) = for_stmt.incrementors() {
        expr_list(sink, incrementors.elements());
    }
    sink.token(for_stmt.r_paren());

    if let Some(body) = for_stmt.body() {
        stmt(sink, body);
    }
}

fn expr_list<'a>(sink: &mut Sink, elements: impl Iterator<Item = Separated<'a, ast::Expr<'a>>>) {
    for element in elements {
        match element {
            Separated::Element(it) => expr(sink, it),
            Separated::Separator(comma) => sink.token(Some(comma)),
        }
    }
}

fn switch(sink: &mut Sink, switch: ast::SwitchStmt<'_>) {
    sink.token(switch.switch_token());
    sink.token(switch.l_paren());
    if let Some(value) = switch.expr() {
        expr(sink, value);
    }
    sink.token(switch.r_paren());
    sink.token(switch.l_brace());

    for section in switch.sections() {
        for label in section.labels() {
            match label {
                ast::SwitchLabel::Case(case) => {
                    sink.token(case.case_token());
                    if let Some(value) = case.value() {
                        expr(sink, value);
                    }
                    sink.token(case.colon());
                }
                ast::SwitchLabel::Default(default) => {
                    sink.token(default.default_token());
                    sink.token(default.colon());
                }
            }
        }
        for stmt in section.statements() {
            self::stmt(sink, stmt);
        }
    }

    sink.token(switch.r_brace());
}
