use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use astgen_compiler::{Artifact, Config};
use astgen_core::Family;
use tracing::{debug, info};

pub struct GenerateArgs {
    pub output_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Compile(#[from] astgen_compiler::Error),

    #[error("output directory {} does not exist", .0.display())]
    MissingOutputDir(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub fn run(args: GenerateArgs) {
    let written = generate_into(&args.output_dir, &Config::default()).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    info!(
        files = written.len(),
        dir = %args.output_dir.display(),
        "generated {} families",
        Family::ALL.len()
    );
}

/// Render every artifact, then write them all into `dir`.
///
/// Nothing is written unless every family renders.
pub fn generate_into(dir: &Path, config: &Config) -> Result<Vec<PathBuf>, GenerateError> {
    if !dir.is_dir() {
        return Err(GenerateError::MissingOutputDir(dir.to_path_buf()));
    }
    let artifacts = astgen_compiler::generate(config)?;
    write_artifacts(dir, &artifacts)
}

pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, GenerateError> {
    artifacts
        .iter()
        .map(|artifact| {
            let path = dir.join(&artifact.file_name);
            fs::write(&path, &artifact.contents).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = artifact.contents.len(), "wrote artifact");
            Ok(path)
        })
        .collect()
}
