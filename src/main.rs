use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use color_eyre::eyre::{Error, WrapErr};
use folcfg::base::constants::{
    DEFAULT_DECLARATION_FILE, DEFAULT_GRAMMAR_FILE, DEFAULT_LOG_FILE, DEFAULT_TREE_STEM,
};
use folcfg::{
    Diagnostic, DiagnosticSink, LoadError, RenderOptions, TracingSink, compile, derive_formula,
    load_declaration, to_dot, validate,
};
use structopt::StructOpt;
use tracing::warn;

/// Check a first-order-logic formula against the grammar derived from its alphabet
#[derive(Debug, StructOpt)]
#[structopt(name = "folcfg")]
struct Args {
    /// Declaration file [default: file.txt]
    #[structopt(parse(from_os_str))]
    declaration: Option<PathBuf>,

    /// Append one line per run to this file [default: parser.log]
    #[structopt(long, parse(from_os_str))]
    log: Option<PathBuf>,

    /// Append the derived grammar to this file [default: grammar.txt]
    #[structopt(long, parse(from_os_str))]
    grammar_out: Option<PathBuf>,

    /// Write the derivation tree as Graphviz DOT [default: <declaration>.dot]
    #[structopt(long, parse(from_os_str))]
    dot: Option<PathBuf>,
}

impl Args {
    fn run(self) -> Result<ExitCode, Error> {
        let declaration_path = self
            .declaration
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DECLARATION_FILE));
        let log_path = self.log.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
        let grammar_path = self
            .grammar_out
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GRAMMAR_FILE));
        let stem = match &self.declaration {
            Some(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_TREE_STEM.to_string()),
            None => DEFAULT_TREE_STEM.to_string(),
        };
        let dot_path = self
            .dot
            .unwrap_or_else(|| default_dot_path(self.declaration.as_deref()));

        let mut sink = (LogFileSink::open(&log_path)?, TracingSink);

        let declaration = match load_declaration(&declaration_path) {
            Ok(declaration) => declaration,
            Err(LoadError::Declaration(err)) => {
                sink.publish(&Diagnostic::Validation(err));
                return Ok(ExitCode::FAILURE);
            }
            Err(err) => return Err(err.into()),
        };

        let alphabet = match validate(&declaration) {
            Ok(alphabet) => alphabet,
            Err(err) => {
                sink.publish(&Diagnostic::Validation(err));
                return Ok(ExitCode::FAILURE);
            }
        };

        let grammar = compile(&alphabet);
        println!("{}", grammar);
        let mut grammar_file = append(&grammar_path)?;
        writeln!(grammar_file, "Grammar for {}", declaration_path.display())
            .and_then(|()| writeln!(grammar_file, "{}", grammar))
            .wrap_err_with(|| format!("failed to write `{}`", grammar_path.display()))?;

        let derivation = match derive_formula(&alphabet, &grammar, &mut sink) {
            Ok(derivation) => derivation,
            Err(_) => return Ok(ExitCode::FAILURE),
        };

        if let Some(root) = derivation.tree.render() {
            let options = RenderOptions::default().with_graph_name(stem);
            fs::write(&dot_path, to_dot(&root, &options))
                .wrap_err_with(|| format!("failed to write `{}`", dot_path.display()))?;
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn default_dot_path(declaration: Option<&Path>) -> PathBuf {
    match declaration {
        Some(path) => path.with_extension("dot"),
        None => PathBuf::from(DEFAULT_TREE_STEM).with_extension("dot"),
    }
}

fn append(path: &Path) -> Result<File, Error> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open `{}`", path.display()))
}

/// Appends each diagnostic to the run log
struct LogFileSink {
    file: File,
}

impl LogFileSink {
    fn open(path: &Path) -> Result<Self, Error> {
        Ok(Self { file: append(path)? })
    }
}

impl DiagnosticSink for LogFileSink {
    fn publish(&mut self, diagnostic: &Diagnostic) {
        if let Err(err) = writeln!(self.file, "{}", diagnostic) {
            warn!(%err, "could not write to the log file");
        }
    }
}

fn main() -> Result<ExitCode, Error> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    Args::from_args().run()
}
