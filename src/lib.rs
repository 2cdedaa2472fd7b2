pub mod cli;
pub mod corpus;
pub mod fs_op;
pub mod generate;
pub mod logging;
pub mod settings;

pub use crate::corpus::{ascii_range, Category, Corpus, CorpusEntry, Profile};
pub use crate::fs_op::{create_empty_file, ensure_directory, FilesystemError};
pub use crate::generate::{generate, GenerateOptions, GenerationReport};
