//! Reading declaration files
//!
//! A declaration file holds one `name: value` entry per line. A non-blank
//! line without a colon continues the previous value.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::base::Position;
use crate::base::constants::FIELD_SEPARATOR;
use crate::errors::{DeclarationDefect, ValidationError};
use crate::syntax::RawDeclaration;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Declaration(#[from] ValidationError),
}

/// Split declaration text into raw entries, in file order
pub fn parse_declaration(text: &str) -> Result<RawDeclaration, ValidationError> {
    let mut declaration = RawDeclaration::new();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut separators = line.match_indices(FIELD_SEPARATOR).map(|(at, _)| at);
        match (separators.next(), separators.next()) {
            (Some(_), Some(second)) => {
                return Err(DeclarationDefect::MultipleColons(Position::new(line_number, second + 1)).into());
            }
            (Some(at), None) => {
                let name = line[..at].trim();
                let value = line[at + 1..].trim();
                declaration.push_at(name, value, Position::line_start(line_number));
            }
            (None, _) => {
                if !declaration.continue_last(line.trim()) {
                    return Err(
                        DeclarationDefect::OrphanContinuation(Position::line_start(line_number)).into(),
                    );
                }
            }
        }
    }
    Ok(declaration)
}

/// Read and split the declaration file at `path`
pub fn load_declaration(path: impl AsRef<Path>) -> Result<RawDeclaration, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let declaration = parse_declaration(&text)?;
    debug!(path = %path.display(), entries = declaration.entries().len(), "loaded declaration");
    Ok(declaration)
}
