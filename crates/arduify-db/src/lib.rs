pub use arduify_errors::Diagnostic;
use arduify_yellow::SyntaxTree;
use camino::Utf8PathBuf;
pub use line_index::LineIndex;
use salsa::{Accumulator as _, Database};

#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
}

#[salsa::tracked]
impl File {
    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }
}

#[derive(Debug, salsa::Update)]
pub struct ParsedFile {
    pub tree: SyntaxTree,
    pub has_errors: bool,
}

/// Parses `file`, accumulating syntax errors.
#[salsa::tracked(returns(ref), no_eq)]
pub fn parse_file(db: &dyn Database, file: File) -> ParsedFile {
    let (tree, diagnostics) = arduify_parse::parse(file.text(db));
    let has_errors = diagnostics.iter().any(Diagnostic::is_error);
    for diagnostic in diagnostics {
        diagnostic.accumulate(db);
    }
    ParsedFile { tree, has_errors }
}

#[derive(Debug, Clone, PartialEq, Eq, salsa::Update)]
pub enum Converted {
    /// Sketch lines, without terminators.
    Sketch(Vec<String>),
    /// The file has syntax errors; nothing was emitted.
    Failed,
}

impl Converted {
    /// The sketch with a `\n` after every line, or `None` if the file failed
    /// to convert.
    pub fn text(&self) -> Option<String> {
        match self {
            Converted::Sketch(lines) => {
                Some(lines.iter().flat_map(|line| [line.as_str(), "\n"]).collect())
            }
            Converted::Failed => None,
        }
    }
}

/// Converts `file` to a sketch. Parse errors and skipped constructs are
/// available through `convert_file::accumulated::<Diagnostic>`.
#[salsa::tracked(returns(ref))]
pub fn convert_file(db: &dyn Database, file: File) -> Converted {
    let parsed = parse_file(db, file);
    if parsed.has_errors {
        return Converted::Failed;
    }

    let conversion = arduify_emit::convert(&parsed.tree);
    for diagnostic in conversion.diagnostics {
        diagnostic.accumulate(db);
    }
    Converted::Sketch(conversion.lines)
}
