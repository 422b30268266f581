//! The fixed set of assets the server embeds.

use crate::naming;

/// One asset to compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetEntry {
    /// File name relative to the input directory.
    pub name: &'static str,
    /// Gzip the payload before embedding.
    pub compress: bool,
}

impl AssetEntry {
    pub const fn new(name: &'static str, compress: bool) -> Self {
        Self { name, compress }
    }

    /// Name of the generated declaration.
    pub fn identifier(&self) -> String {
        naming::identifier(self.name, self.compress)
    }

    /// Name of the generated header file.
    pub fn header_file_name(&self) -> String {
        naming::header_file_name(self.name)
    }
}

/// Assets served by the inference server's web UI, in processing order.
pub const DEFAULT_MANIFEST: [AssetEntry; 6] = [
    AssetEntry::new("index.html", true),
    AssetEntry::new("loading.html", false),
    AssetEntry::new("theme-beeninorder.css", true),
    AssetEntry::new("index.js", true),
    AssetEntry::new("completion.js", true),
    AssetEntry::new("json-schema-to-grammar.mjs", true),
];
