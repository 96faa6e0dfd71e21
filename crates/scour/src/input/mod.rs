//! Dataset loading from delimited text files.

mod parser;
mod writer;

pub use parser::{Loader, LoaderConfig, SourceMetadata};
pub use writer::write_delimited;
