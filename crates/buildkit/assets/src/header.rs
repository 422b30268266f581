//! Generated header format.
//!
//! ```text
//! // index.html
//! #pragma once
//! #include <string_view>
//! static const std::string_view index_html_gz = std::string_view("\x1f\x8b...", 1234);
//! ```
//!
//! Every byte is written as `\x` plus two lowercase hex digits, printable or
//! not. The explicit length keeps embedded NUL bytes from truncating the view.

use std::io::{self, Write};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Bytes escaped per write call.
const ESCAPE_CHUNK: usize = 4096;

/// Write the header for one asset to `writer`.
pub fn write_header<W: Write>(
    writer: &mut W,
    asset_name: &str,
    identifier: &str,
    payload: &[u8],
) -> io::Result<()> {
    writeln!(writer, "// {asset_name}")?;
    writeln!(writer, "#pragma once")?;
    writeln!(writer, "#include <string_view>")?;
    write!(
        writer,
        "static const std::string_view {identifier} = std::string_view(\""
    )?;
    write_escaped(writer, payload)?;
    writeln!(writer, "\", {});", payload.len())?;
    Ok(())
}

fn write_escaped<W: Write>(writer: &mut W, payload: &[u8]) -> io::Result<()> {
    let mut escaped = Vec::with_capacity(ESCAPE_CHUNK.min(payload.len()) * 4);
    for chunk in payload.chunks(ESCAPE_CHUNK) {
        escaped.clear();
        for &byte in chunk {
            escaped.extend_from_slice(&[
                b'\\',
                b'x',
                HEX[usize::from(byte >> 4)],
                HEX[usize::from(byte & 0x0f)],
            ]);
        }
        writer.write_all(&escaped)?;
    }
    Ok(())
}
