mod logging;

use anyhow::{Context, bail};
use arduify_db::{Diagnostic, File, convert_file, parse_file};
use arduify_errors::Renderer;
use camino::Utf8PathBuf;
use clap::Parser;
use salsa::{Database, DatabaseImpl};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Converts C# example programs into Arduino sketches.
#[derive(Parser)]
enum Options {
    /// Convert a source file and print the sketch.
    Convert {
        path: Utf8PathBuf,
        /// Write the sketch here instead of stdout.
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
    /// Print the syntax tree of a source file.
    Tree { path: Utf8PathBuf },
}

fn main() -> anyhow::Result<()> {
    logging::init();

    match Options::parse() {
        Options::Convert { path, output } => {
            let db = DatabaseImpl::default();
            let file = load(&db, path)?;

            let converted = convert_file(&db, file);
            report(&db, file, &convert_file::accumulated::<Diagnostic>(&db, file));

            let Some(sketch) = converted.text() else {
                bail!("`{}` has syntax errors", file.path(&db));
            };
            tracing::debug!(bytes = sketch.len(), "converted");

            match output {
                Some(output) => std::fs::write(&output, sketch)
                    .with_context(|| format!("failed to write `{output}`"))?,
                None => print!("{sketch}"),
            }
            Ok(())
        }
        Options::Tree { path } => {
            let db = DatabaseImpl::default();
            let file = load(&db, path)?;

            let parsed = parse_file(&db, file);
            report(&db, file, &parse_file::accumulated::<Diagnostic>(&db, file));
            print!("{}", arduify_parse::debug_tree(&parsed.tree));
            Ok(())
        }
    }
}

fn load(db: &dyn Database, path: Utf8PathBuf) -> anyhow::Result<File> {
    tracing::info!(%path, "reading");
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("failed to read `{path}`"))?;
    Ok(File::new(db, path, text))
}

fn report(db: &dyn Database, file: File, diagnostics: &[&Diagnostic]) {
    let renderer = Renderer::styled();
    let path = file.path(db).as_str();
    let text = file.text(db);

    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.render(&renderer, path, text));
    }
}
