use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::info;

use crate::corpus::Corpus;
use crate::fs_op::{create_empty_file, ensure_directory, FilesystemError};

/// Knobs for a generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Create files on the rayon pool instead of one after another.
    pub parallel: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub directory: PathBuf,
    /// Created paths, in corpus order.
    pub created: Vec<PathBuf>,
}

/// Ensure `target` exists and create every corpus entry in it as an empty file.
///
/// Stops at the first failure. Files created before it stay on disk.
pub fn generate<P: AsRef<Path>>(
    target: P,
    corpus: &Corpus,
    options: GenerateOptions,
) -> Result<GenerationReport, FilesystemError> {
    let dir = target.as_ref();
    info!(
        "generating {} fixtures under {} (parallel: {})",
        corpus.len(),
        dir.display(),
        options.parallel
    );
    ensure_directory(dir)?;

    let created = if options.parallel {
        corpus
            .entries()
            .par_iter()
            .map(|e| create_empty_file(dir, &e.name))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        corpus
            .entries()
            .iter()
            .map(|e| create_empty_file(dir, &e.name))
            .collect::<Result<Vec<_>, _>>()?
    };

    info!("created {} files under {}", created.len(), dir.display());
    Ok(GenerationReport {
        directory: dir.to_path_buf(),
        created,
    })
}
