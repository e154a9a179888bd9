use arduify_yellow::ast::{self, AstNode as _, LiteralValue};

use crate::output::Sink;

pub(crate) fn expr(sink: &mut Sink, expr: ast::Expr<'_>) {
    let syntax = expr.syntax();
    if let ast::Expr::Error(error) = expr {
        sink.unsupported(error.syntax(), "malformed expression");
        return;
    }

    sink.emit_leading_trivia(syntax);
    match expr {
        ast::Expr::Ident(ident) => sink.token(ident.name()),
        ast::Expr::Literal(literal) => sink.emit_text(&render(literal.value())),
        ast::Expr::Binary(binary) => {
            operand(sink, binary.lhs());
            sink.token(binary.op());
            operand(sink, binary.rhs());
        }
        ast::Expr::Assign(assign) => {
            operand(sink, assign.lhs());
            sink.token(assign.op());
            operand(sink, assign.rhs());
        }
        ast::Expr::Prefix(prefix) => {
            sink.token(prefix.op());
            operand(sink, prefix.operand());
        }
        ast::Expr::Postfix(postfix) => {
            operand(sink, postfix.operand());
            sink.token(postfix.op());
        }
        ast::Expr::Paren(paren) => {
            sink.token(paren.l_paren());
            operand(sink, paren.expr());
            sink.token(paren.r_paren());
        }
        ast::Expr::Cast(cast) => {
            sink.token(cast.l_paren());
            if let Some(ty) = cast.ty() {
                sink.replace(ty.syntax(), ty.syntax().text_trimmed());
            }
            sink.token(cast.r_paren());
            operand(sink, cast.expr());
        }
        ast::Expr::Call(call) => self::call(sink, call),
        ast::Expr::MemberAccess(member) => {
            operand(sink, member.receiver());
            sink.token(member.dot());
            sink.token(member.name());
        }
        ast::Expr::Index(index) => {
            operand(sink, index.receiver());
            sink.token(index.l_bracket());
            operand(sink, index.index());
            sink.token(index.r_bracket());
        }
        ast::Expr::Error(_) => {}
    }
    sink.emit_trailing_trivia(syntax);
}

fn operand(sink: &mut Sink, operand: Option<ast::Expr<'_>>) {
    if let Some(operand) = operand {
        expr(sink, operand);
    }
}

/// `callee(a, b)`; arguments are always separated by `", "`.
fn call(sink: &mut Sink, call: ast::CallExpr<'_>) {
    match call.callee() {
        Some(ast::Expr::MemberAccess(member)) => {
            let receiver = member.receiver().map_or("", |it| it.syntax().text_trimmed());
            let name = member.name().map_or("", |it| it.text_trimmed());
            sink.replace(member.syntax(), &format!("{receiver}.{name}"));
        }
        callee => operand(sink, callee),
    }

    let Some(arg_list) = call.arg_list() else { return };
    sink.token(arg_list.l_paren());
    for (index, arg) in arg_list.args().enumerate() {
        if index > 0 {
            sink.emit_text(", ");
        }
        expr(sink, arg);
    }
    sink.token(arg_list.r_paren());
}

/// Literal as its decoded value: numbers without separators or suffixes,
/// hex and binary in decimal, strings and chars unquoted and unescaped.
fn render(value: LiteralValue<'_>) -> String {
    match value {
        LiteralValue::Int(value) => value.to_string(),
        LiteralValue::Real(digits) => digits.into_owned(),
        LiteralValue::Bool(value) => value.to_string(),
        LiteralValue::Null => "null".to_owned(),
        LiteralValue::String(text) => text,
        LiteralValue::Char(ch) => ch.to_string(),
        LiteralValue::Invalid(text) => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use arduify_yellow::ast::LiteralValue;

    use super::render;

    #[test]
    fn numbers_are_normalized() {
        assert_eq!(render(LiteralValue::Int(500)), "500");
        assert_eq!(render(LiteralValue::Real(Cow::Borrowed("1.5e3"))), "1.5e3");
        assert_eq!(render(LiteralValue::Invalid("99999999999999999999")), "99999999999999999999");
    }

    #[test]
    fn strings_render_their_value() {
        assert_eq!(render(LiteralValue::String("Hello".to_owned())), "Hello");
        assert_eq!(render(LiteralValue::String(r"C:\tmp".to_owned())), r"C:\tmp");
        assert_eq!(render(LiteralValue::String("say \"hi\"".to_owned())), r#"say "hi""#);
        assert_eq!(render(LiteralValue::String(String::new())), "");
    }

    #[test]
    fn chars_render_their_value() {
        assert_eq!(render(LiteralValue::Char('a')), "a");
        assert_eq!(render(LiteralValue::Char('\'')), "'");
        assert_eq!(render(LiteralValue::Char('\u{B0}')), "\u{B0}");
    }

    #[test]
    fn keywords_pass_through() {
        assert_eq!(render(LiteralValue::Bool(true)), "true");
        assert_eq!(render(LiteralValue::Bool(false)), "false");
        assert_eq!(render(LiteralValue::Null), "null");
    }
}
