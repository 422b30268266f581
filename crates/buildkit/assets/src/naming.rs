//! Names derived from an asset's file name.
//!
//! The declaration name and the header file name come from the same input
//! but follow different rules. Keep them apart.

/// Suffix appended to the declaration name of a gzipped asset.
pub const GZ_SUFFIX: &str = "_gz";

/// Extension appended to the asset name to form the header file name.
pub const HEADER_EXTENSION: &str = ".hpp";

/// Declaration name for an asset.
///
/// Every `.` and `-` becomes `_`; every other character is kept as is.
/// `_gz` is appended when, and only when, the payload is compressed.
///
/// `theme-beeninorder.css` compressed gives `theme_beeninorder_css_gz`.
pub fn identifier(asset_name: &str, compressed: bool) -> String {
    let mut ident: String = asset_name
        .chars()
        .map(|c| match c {
            '.' | '-' => '_',
            other => other,
        })
        .collect();
    if compressed {
        ident.push_str(GZ_SUFFIX);
    }
    ident
}

/// Header file name for an asset: the unmodified name plus `.hpp`.
///
/// `loading.html` gives `loading.html.hpp`.
pub fn header_file_name(asset_name: &str) -> String {
    format!("{asset_name}{HEADER_EXTENSION}")
}
