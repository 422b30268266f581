//! The asset compilation run.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::compress;
use crate::config::CompilerConfig;
use crate::error::{AssetError, AssetResult};
use crate::header;
use crate::manifest::{AssetEntry, DEFAULT_MANIFEST};

/// Largest input file the compiler accepts: 10 MiB.
pub const MAX_ASSET_BYTES: u64 = 10 * 1024 * 1024;

/// One header produced by a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompiledAsset {
    pub name: String,
    pub identifier: String,
    pub header_path: PathBuf,
    /// Size of the input file.
    pub source_len: usize,
    /// Size of the embedded literal, after compression if any.
    pub payload_len: usize,
    pub compressed: bool,
}

/// Summary of a successful run, in manifest order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    pub assets: Vec<CompiledAsset>,
}

impl CompileReport {
    pub fn total_payload_bytes(&self) -> usize {
        self.assets.iter().map(|a| a.payload_len).sum()
    }
}

/// Read a whole file, failing if it holds more than `limit` bytes.
///
/// A file of exactly `limit` bytes is accepted.
pub fn read_bounded(path: &Path, limit: u64) -> AssetResult<Vec<u8>> {
    let read_err = |source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut payload = Vec::new();
    file.take(limit.saturating_add(1))
        .read_to_end(&mut payload)
        .map_err(read_err)?;

    if payload.len() as u64 > limit {
        return Err(AssetError::TooLarge {
            path: path.to_path_buf(),
            limit,
        });
    }
    Ok(payload)
}

/// Compiles a manifest of assets into headers.
pub struct AssetCompiler<'m> {
    config: CompilerConfig,
    manifest: &'m [AssetEntry],
}

impl AssetCompiler<'static> {
    /// Compiler over [`DEFAULT_MANIFEST`].
    pub fn new(config: CompilerConfig) -> Self {
        Self {
            config,
            manifest: &DEFAULT_MANIFEST,
        }
    }
}

impl<'m> AssetCompiler<'m> {
    /// Swap the manifest this compiler processes.
    pub fn with_manifest<'n>(self, manifest: &'n [AssetEntry]) -> AssetCompiler<'n> {
        AssetCompiler {
            config: self.config,
            manifest,
        }
    }

    /// Compile every manifest entry in order.
    ///
    /// Creates the output directory first; existing headers are overwritten.
    /// Stops at the first failing entry.
    pub fn run(&self) -> AssetResult<CompileReport> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| AssetError::CreateDir {
            path: output_dir.clone(),
            source,
        })?;

        let mut report = CompileReport::default();
        for entry in self.manifest {
            report.assets.push(self.compile_entry(entry)?);
        }

        info!(
            assets = report.assets.len(),
            payload_bytes = report.total_payload_bytes(),
            output = %output_dir.display(),
            "asset headers generated"
        );
        Ok(report)
    }

    /// Read, maybe compress, and write one entry. Both buffers are dropped
    /// before returning, on success or failure.
    fn compile_entry(&self, entry: &AssetEntry) -> AssetResult<CompiledAsset> {
        let input_path = self.config.input_dir.join(entry.name);
        debug!(asset = entry.name, path = %input_path.display(), "reading asset");

        let source = read_bounded(&input_path, self.config.max_asset_bytes)?;
        let source_len = source.len();

        let payload = if entry.compress {
            let compressed = compress::gzip(&source, self.config.compression).map_err(|err| {
                AssetError::Compression {
                    name: entry.name.to_string(),
                    source: err,
                }
            })?;
            drop(source);
            debug!(
                asset = entry.name,
                before = source_len,
                after = compressed.len(),
                "compressed asset"
            );
            compressed
        } else {
            source
        };

        let identifier = entry.identifier();
        let header_path = self.config.output_dir.join(entry.header_file_name());
        write_header_file(&header_path, entry.name, &identifier, &payload)?;

        info!(
            asset = entry.name,
            identifier = %identifier,
            bytes = payload.len(),
            "wrote {}",
            header_path.display()
        );

        Ok(CompiledAsset {
            name: entry.name.to_string(),
            identifier,
            header_path,
            source_len,
            payload_len: payload.len(),
            compressed: entry.compress,
        })
    }
}

fn write_header_file(
    path: &Path,
    asset_name: &str,
    identifier: &str,
    payload: &[u8],
) -> AssetResult<()> {
    let write_err = |source| AssetError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    header::write_header(&mut writer, asset_name, identifier, payload).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

/// Compile [`DEFAULT_MANIFEST`] from `input_dir` into `output_dir`.
pub fn compile_assets(
    input_dir: impl Into<PathBuf>,
    output_dir: impl Into<PathBuf>,
) -> AssetResult<CompileReport> {
    AssetCompiler::new(CompilerConfig::new(input_dir, output_dir)).run()
}
