//! Compiler configuration

use std::path::PathBuf;

use flate2::Compression;

use crate::compiler::MAX_ASSET_BYTES;

/// Settings for one compilation run.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Directory the manifest's file names are resolved against
    pub input_dir: PathBuf,

    /// Directory receiving the generated headers (created if absent)
    pub output_dir: PathBuf,

    /// Largest accepted input file, in bytes
    pub max_asset_bytes: u64,

    /// Gzip level for compressed entries
    pub compression: Compression,
}

impl CompilerConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            max_asset_bytes: MAX_ASSET_BYTES,
            compression: Compression::default(),
        }
    }
}
