//! Gzip framing for embedded payloads.

use std::io::{self, Write};

use flate2::write::GzEncoder;
use flate2::Compression;

/// Gzip `payload` into a fresh buffer.
///
/// The gzip header carries no file name and a zero mtime, so identical input
/// and level always give identical output. The result may be larger than the
/// input; it is returned regardless.
pub fn gzip(payload: &[u8], level: Compression) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(payload.len() / 2), level);
    encoder.write_all(payload)?;
    encoder.finish()
}
