use std::fs;
use std::path::{Path, PathBuf};

use arduify_yellow::SyntaxKind::NEWLINE;
use arduify_yellow::ast::{AstNode as _, CompilationUnit};
use arduify_yellow::{SyntaxTree, WalkEventWithTokens};
use expect_test::{expect, expect_file};

use crate::output::Sink;
use crate::{Conversion, convert, decls};

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
                    let expected = path.with_extension("ino");
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

fn parse(text: &str) -> SyntaxTree {
    let (tree, diagnostics) = arduify_parse::parse(text);
    assert!(diagnostics.is_empty(), "{text:?} does not parse: {diagnostics:?}");
    tree
}

fn convert_text(text: &str) -> Conversion {
    convert(&parse(text))
}

#[test]
fn convert_test_data() {
    let test_cases = TestCase::list();
    assert!(!test_cases.is_empty());

    for case in test_cases {
        let conversion = convert(&parse(&case.text));
        let warnings = conversion
            .diagnostics
            .iter()
            .map(|d| format!("  {:?} {}\n", d.range(), d.message()))
            .collect::<String>();

        let actual = format!("{}Warnings:\n{warnings}", conversion.text());
        expect_file![&case.expected].assert_eq(&actual);
    }
}

#[test]
fn if_else_with_qualified_call() {
    let conversion = convert_text(
        "class C { void F() { if (x > 0) { doThing(); } else { other.call(1, 2); } } }",
    );
    assert!(conversion.diagnostics.is_empty());
    assert_eq!(
        conversion.lines,
        ["void F() { if (x > 0) { doThing(); } else { other.call(1, 2); } } "]
    );
}

#[test]
fn arguments_are_separated_by_comma_space() {
    let conversion = convert_text("class C { void F() { f(a,b,  c); } }");
    assert_eq!(conversion.lines, ["void F() { f(a, b, c); } "]);
}

#[test]
fn array_suffix_moves_to_the_declarator() {
    let conversion = convert_text("namespace N { class C { int[] values = 0; } }");
    assert_eq!(conversion.lines, ["int values[] = 0;  "]);

    let conversion = convert_text("class C { static int[] a = 1, b; }");
    assert_eq!(conversion.lines, ["static int a[] = 1, b[]; "]);

    let conversion = convert_text("class C { void F() { for (byte[] it = x; ;) { } } }");
    assert_eq!(conversion.lines, ["void F() { for (byte it[] = x; ;) { } } "]);
}

#[test]
fn while_loop_is_dropped_with_a_warning() {
    let text = "class C { void F() { while (x) { y(); } } }";
    let conversion = convert_text(text);
    assert_eq!(conversion.lines, ["void F() { } "]);

    let [warning] = conversion.diagnostics.as_slice() else {
        panic!("expected one warning, got {:?}", conversion.diagnostics);
    };
    assert!(!warning.is_error());
    assert_eq!(&text[warning.range()], "while (x) { y(); }");
    expect![["`while` statement is not supported"]].assert_eq(warning.message());
}

#[test]
fn other_unsupported_statements_are_dropped() {
    let conversion = convert_text("class C { void F() { do x(); while (y); ; continue; z(); } }");
    assert_eq!(conversion.lines, ["void F() { z(); } "]);

    let messages: Vec<_> = conversion.diagnostics.iter().map(|d| d.message()).collect();
    assert_eq!(
        messages,
        [
            "`do` statement is not supported",
            "empty statement is not supported",
            "`continue` statement is not supported",
        ]
    );
}

#[test]
fn namespaces_and_classes_are_flattened() {
    let text = "namespace N;\n// lead\nclass Outer\n{\n    class Inner { int x; }\n}\n";
    let conversion = convert_text(text);
    assert_eq!(conversion.lines, ["// lead", "    int x; ", ""]);

    let sketch = conversion.text();
    assert!(!sketch.contains("namespace"));
    assert!(!sketch.contains("class"));
}

#[test]
fn using_directives_are_dropped() {
    let conversion = convert_text("using System;\nusing Foo.Bar;\nclass C { int x; }\n");
    assert_eq!(conversion.lines, ["int x; "]);
}

#[test]
fn method_signature() {
    let conversion = convert_text("class C { public static void Blink(int pin, long ms) { } }");
    assert_eq!(conversion.lines, ["void Blink(int pin, long ms) { } "]);
}

#[test]
fn final_partial_line_is_kept() {
    let conversion = convert_text("class C { int x; } // end");
    assert_eq!(conversion.lines, ["int x;  // end"]);
}

#[test]
fn every_comment_is_emitted_once() {
    let text = "\
// head
class C
{
    /* a */ int x = 1; // b
    void F()
    {
        // c
        if (x > 0) // d
        {
            x = 2; /* e */
        }
        else
        {
            x--;
        }
    }
}
// tail
";
    let sketch = convert_text(text).text();
    for comment in ["// head", "/* a */", "// b", "// c", "// d", "/* e */", "// tail"] {
        assert_eq!(sketch.matches(comment).count(), 1, "{comment} in\n{sketch}");
    }
    assert!(!sketch.contains("class"));
}

#[test]
fn one_line_per_emitted_newline() {
    let text = "class C\n{\n    // a\n    int x;\n\n    void F() { }\n}\n";
    let tree = parse(text);

    let mut sink = Sink::default();
    decls::compilation_unit(&mut sink, CompilationUnit::cast(tree.root()).unwrap());

    let newlines = tree
        .root()
        .preorder_with_tokens()
        .filter_map(|event| match event {
            WalkEventWithTokens::Token(token) => Some(token),
            _ => None,
        })
        .flat_map(|token| token.leading_trivia().chain(token.trailing_trivia()))
        .filter(|piece| piece.kind() == NEWLINE && sink.is_handled(piece.id()))
        .count();

    let conversion = sink.finish();
    assert_eq!(conversion.lines.len(), newlines);
    assert_eq!(conversion.lines, ["    // a", "    int x;", "", "    void F() { }", ""]);
}

#[test]
fn literals_are_emitted_as_their_value() {
    let conversion =
        convert_text(r#"class C { void F() { Serial.println("Hello"); c = 'a'; n = 0x1F4; } }"#);
    assert_eq!(conversion.lines, ["void F() { Serial.println(Hello); c = a; n = 500; } "]);
}

#[test]
fn malformed_member_is_dropped_with_its_trivia() {
    let text = "class C\n{\n    int x;\n    42 // junk\n    int y;\n}\n";
    let (tree, errors) = arduify_parse::parse(text);
    assert!(!errors.is_empty());

    let conversion = convert(&tree);
    assert_eq!(conversion.lines, ["    int x;", "    int y;", ""]);
    assert!(!conversion.text().contains("junk"));

    let [warning] = conversion.diagnostics.as_slice() else {
        panic!("expected one warning, got {:?}", conversion.diagnostics);
    };
    assert_eq!(&text[warning.range()], "42");
    expect![["malformed member is not supported"]].assert_eq(warning.message());
}
