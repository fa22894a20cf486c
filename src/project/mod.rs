//! Project inputs: declaration files on disk

mod declaration_loader;

pub use declaration_loader::{LoadError, load_declaration, parse_declaration};
