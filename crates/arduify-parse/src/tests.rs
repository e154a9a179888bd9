use std::fs;
use std::path::{Path, PathBuf};

use arduify_yellow::SyntaxKind::{self, *};
use arduify_yellow::ast::{self, AstNode as _};
use expect_test::expect_file;

use crate::{debug_tree, parse};

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct TestCase {
    input: PathBuf,
    expected: PathBuf,
    text: String,
}

impl TestCase {
    fn list() -> Vec<Self> {
        let test_data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data");

        let mut cases = fs::read_dir(&test_data_dir)
            .unwrap_or_else(|err| {
                panic!("Cannot read directory {}: {err}", test_data_dir.display())
            })
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension()? == "cs" {
                    let expected = path.with_extension("ir");
                    let text = fs::read_to_string(&path).ok()?;
                    Some(Self { input: path, expected, text })
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        cases.sort();
        cases
    }
}

#[test]
fn parse_test_data() {
    let test_cases = TestCase::list();
    assert!(!test_cases.is_empty());

    for case in test_cases {
        let (tree, diagnostics) = parse(&case.text);
        assert_eq!(tree.root().text(), case.text, "{} is not lossless", case.input.display());

        let diagnostics = diagnostics
            .iter()
            .map(|d| format!("  {:?} {}\n", d.range(), d.message()))
            .collect::<String>();

        let actual = format!("{}Errors:\n{diagnostics}", debug_tree(&tree));
        expect_file![&case.expected].assert_eq(&actual);
    }
}

fn compilation_unit(tree: &arduify_yellow::SyntaxTree) -> ast::CompilationUnit<'_> {
    ast::CompilationUnit::cast(tree.root()).unwrap()
}

fn first_class(tree: &arduify_yellow::SyntaxTree) -> ast::Class<'_> {
    match compilation_unit(tree).items().next().unwrap() {
        ast::Item::Class(class) => class,
        ast::Item::Namespace(namespace) => match namespace.items().next().unwrap() {
            ast::Item::Class(class) => class,
            ast::Item::Namespace(_) => panic!("expected a class"),
        },
    }
}

fn trivia_kinds(token: arduify_yellow::SyntaxToken<'_>, leading: bool) -> Vec<SyntaxKind> {
    let trivia = if leading { token.leading_trivia() } else { token.trailing_trivia() };
    trivia.map(|piece| piece.kind()).collect()
}

#[test]
fn trivia_is_attached_to_tokens() {
    let text = "class C\n{\n    // pin\n    int led; // on\n}\n\n/* end */\n";
    let (tree, diagnostics) = parse(text);
    assert!(diagnostics.is_empty());

    let ast::Member::Field(field) = first_class(&tree).members().next().unwrap() else {
        panic!("expected a field");
    };

    let first = field.syntax().first_token().unwrap();
    assert_eq!(first.text_trimmed(), "int");
    assert_eq!(trivia_kinds(first, true), [WHITESPACE, LINE_COMMENT, NEWLINE, WHITESPACE]);

    let semicolon = field.semicolon().unwrap();
    assert_eq!(trivia_kinds(semicolon, false), [WHITESPACE, LINE_COMMENT, NEWLINE]);

    let eof = compilation_unit(&tree).eof_token().unwrap();
    assert_eq!(trivia_kinds(eof, true), [NEWLINE, BLOCK_COMMENT, NEWLINE]);
}

#[test]
fn field_declarators_and_separators() {
    let (tree, diagnostics) = parse("class C { static int[] a = 1, b; }");
    assert!(diagnostics.is_empty());

    let ast::Member::Field(field) = first_class(&tree).members().next().unwrap() else {
        panic!("expected a field");
    };
    assert_eq!(field.modifiers().map(|it| it.kind()).collect::<Vec<_>>(), [STATIC_KW]);

    let declaration = field.declaration().unwrap();
    let ty = declaration.ty().unwrap();
    assert!(ty.is_array());
    assert_eq!(ty.syntax().text_trimmed(), "int[]");
    assert_eq!(ty.element_type().unwrap().syntax().text_trimmed(), "int");

    let names: Vec<_> = declaration
        .declarators()
        .map(|it| it.name().unwrap().text_trimmed().to_owned())
        .collect();
    assert_eq!(names, ["a", "b"]);

    let separators = declaration
        .elements()
        .filter(|it| matches!(it, ast::Separated::Separator(_)))
        .count();
    assert_eq!(separators, 1);

    let first = declaration.declarators().next().unwrap();
    let value = first.initializer().unwrap().value().unwrap();
    let ast::Expr::Literal(literal) = value else { panic!("expected a literal") };
    assert_eq!(literal.value(), ast::LiteralValue::Int(1));
}

#[test]
fn method_parts() {
    let (tree, diagnostics) = parse("class C { public void Loop(int a, byte b) { a = b; } }");
    assert!(diagnostics.is_empty());

    let ast::Member::Method(method) = first_class(&tree).members().next().unwrap() else {
        panic!("expected a method");
    };
    assert_eq!(method.return_type().unwrap().syntax().text_trimmed(), "void");
    assert_eq!(method.name().unwrap().text_trimmed(), "Loop");

    let params: Vec<_> = method
        .param_list()
        .unwrap()
        .params()
        .map(|param| {
            let ty = param.ty().unwrap().syntax().text_trimmed();
            format!("{ty} {}", param.name().unwrap())
        })
        .collect();
    assert_eq!(params, ["int a", "byte b"]);

    let body = method.body().unwrap();
    assert!(matches!(body.statements().next(), Some(ast::Stmt::Expr(_))));
    assert!(method.semicolon().is_none());
}

#[test]
fn for_statement_parts() {
    let (tree, diagnostics) =
        parse("class C { void F() { for (i = 0, j = 1; i < 3; i++, j--) x(); } }");
    assert!(diagnostics.is_empty());

    let ast::Member::Method(method) = first_class(&tree).members().next().unwrap() else {
        panic!("expected a method");
    };
    let Some(ast::Stmt::For(for_stmt)) = method.body().unwrap().statements().next() else {
        panic!("expected a for statement");
    };

    assert!(for_stmt.declaration().is_none());
    assert_eq!(for_stmt.initializers().unwrap().elements().count(), 3);
    assert_eq!(for_stmt.condition().unwrap().syntax().text_trimmed(), "i < 3");
    assert_eq!(for_stmt.incrementors().unwrap().elements().count(), 3);
    assert!(matches!(for_stmt.body(), Some(ast::Stmt::Expr(_))));
    assert_ne!(
        for_stmt.first_semicolon().unwrap().trimmed_range(),
        for_stmt.second_semicolon().unwrap().trimmed_range()
    );
}

#[test]
fn garbage_still_produces_a_lossless_tree() {
    let texts = [
        "class C { void F() { ) # } }",
        "namespace",
        "class C { int x = ; void }",
        "class C { void F() { switch (x) { y; } } }",
        "using ; class C { void F() { if ( } }",
        "\"unterminated",
    ];

    for text in texts {
        let (tree, diagnostics) = parse(text);
        assert!(!diagnostics.is_empty(), "expected errors for {text:?}");
        assert_eq!(tree.root().text(), text);
        assert_eq!(tree.root().kind(), COMPILATION_UNIT);
    }
}

#[test]
fn local_declaration_or_expression() {
    let (tree, diagnostics) =
        parse("class C { void F() { Foo.Bar baz; a.b(c); x[1] = 2; int[] y; } }");
    assert!(diagnostics.is_empty());

    let ast::Member::Method(method) = first_class(&tree).members().next().unwrap() else {
        panic!("expected a method");
    };
    let kinds: Vec<_> =
        method.body().unwrap().statements().map(|stmt| stmt.syntax().kind()).collect();
    assert_eq!(kinds, [LOCAL_DECL_STMT, EXPR_STMT, EXPR_STMT, LOCAL_DECL_STMT]);
}
