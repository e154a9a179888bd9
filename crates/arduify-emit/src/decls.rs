use arduify_yellow::ast::{self, AstNode as _, Separated};

use crate::output::Sink;
use crate::{exprs, stmts};

pub(crate) fn compilation_unit(sink: &mut Sink, unit: ast::CompilationUnit<'_>) {
    // Using directives have no sketch counterpart and are dropped along
    // with their trivia.
    for item in unit.items() {
        self::item(sink, item);
    }

    // Comments and blank lines after the last item.
    if let Some(eof) = unit.eof_token() {
        sink.emit_leading_trivia(eof);
    }
}

fn item(sink: &mut Sink, item: ast::Item<'_>) {
    match item {
        ast::Item::Namespace(namespace) => {
            sink.emit_leading_trivia(namespace.syntax());
            for item in namespace.items() {
                self::item(sink, item);
            }
            sink.emit_trailing_trivia(namespace.syntax());
        }
        ast::Item::Class(class) => self::class(sink, class),
    }
}

fn class(sink: &mut Sink, class: ast::Class<'_>) {
    sink.emit_leading_trivia(class.syntax());
    for member in class.members() {
        self::member(sink, member);
    }
    sink.emit_trailing_trivia(class.syntax());
}

fn member(sink: &mut Sink, member: ast::Member<'_>) {
    let syntax = member.syntax();
    tracing::debug!(kind = ?syntax.kind(), range = ?syntax.trimmed_range(), "converting member");

    if let ast::Member::Error(error) = member {
        sink.unsupported(error.syntax(), "malformed member");
        return;
    }

    sink.emit_leading_trivia(syntax);
    match member {
        ast::Member::Method(method) => self::method(sink, method),
        ast::Member::Field(field) => {
            for modifier in field.modifiers() {
                sink.token(Some(modifier));
            }
            if let Some(declaration) = field.declaration() {
                variable_declaration(sink, declaration);
            }
            sink.token(field.semicolon());
        }
        ast::Member::Class(class) => self::class(sink, class),
        ast::Member::Error(_) => {}
    }
    sink.emit_trailing_trivia(syntax);
}

/// `void Name(Type a, Type b)` followed by the body. Modifiers are dropped.
fn method(sink: &mut Sink, method: ast::Method<'_>) {
    let return_type = method.return_type().map_or("", |ty| ty.syntax().text_trimmed());
    let name = method.name().map_or("", |name| name.text_trimmed());
    sink.emit_text(&format!("{return_type} {name}"));

    if let Some(param_list) = method.param_list() {
        sink.token(param_list.l_paren());
        let params = param_list
            .params()
            .map(|param| {
                let ty = param.ty().map_or("", |ty| ty.syntax().text_trimmed());
                let name = param.name().map_or("", |name| name.text_trimmed());
                format!("{ty} {name}")
            })
            .collect::<Vec<_>>();
        sink.emit_text(&params.join(", "));
        sink.token(param_list.r_paren());
    }

    match method.body() {
        Some(body) => stmts::stmt(sink, ast::Stmt::Block(body)),
        None => sink.token(method.semicolon()),
    }
}

/// Emits `T[] a = 1, b` as `T a[] = 1, b[]`.
pub(crate) fn variable_declaration(sink: &mut Sink, declaration: ast::VariableDeclaration<'_>) {
    let mut suffix = "";
    if let Some(ty) = declaration.ty() {
        let text = ty.syntax().text_trimmed();
        let (base, rank) = match text.find('[') {
            Some(index) => (text[..index].trim_end(), &text[index..]),
            None => (text, ""),
        };
        suffix = rank;
        sink.replace(ty.syntax(), base);
    }

    for element in declaration.elements() {
        match element {
            Separated::Element(declarator) => {
                if let Some(name) = declarator.name() {
                    sink.replace(name, &format!("{}{suffix}", name.text_trimmed()));
                }
                if let Some(initializer) = declarator.initializer() {
                    sink.token(initializer.eq_token());
                    if let Some(value) = initializer.value() {
                        exprs::expr(sink, value);
                    }
                }
            }
            Separated::Separator(comma) => sink.token(Some(comma)),
        }
    }
}
