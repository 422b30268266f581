//! Build-time compiler for the inference server's embedded web UI.
//!
//! A fixed manifest of assets is read from an input directory, optionally
//! gzipped, and written as one `<asset>.hpp` header per entry. Each header
//! holds a single `std::string_view` constant whose literal escapes every
//! byte, so binary payloads with NUL bytes embed safely.
//!
//! The pipeline is strictly serial:
//! - read (bounded by [`MAX_ASSET_BYTES`])
//! - compress when the manifest entry asks for it
//! - write the header
//! - release both buffers before the next entry
//!
//! The first failure aborts the run.

pub mod cli;
pub mod compiler;
pub mod compress;
pub mod config;
pub mod error;
pub mod header;
pub mod manifest;
pub mod naming;

pub use compiler::{
    compile_assets, read_bounded, AssetCompiler, CompileReport, CompiledAsset, MAX_ASSET_BYTES,
};
pub use config::CompilerConfig;
pub use error::{AssetError, AssetResult};
pub use manifest::{AssetEntry, DEFAULT_MANIFEST};
