//! Filename sanitizing.
//!
//! A client filename is reduced to its basename for display, and a storage
//! name of the form `{token}_{stem}.{ext}` is derived from it, where the
//! token is 128 random bits in hex, the stem is limited to
//! `[A-Za-z0-9_-]`, and the extension is lower-cased ASCII alphanumerics.
//! Stem and extension are capped so the storage name stays well under the
//! 255-byte file name limit of common filesystems.

use std::path::Path;

use uuid::Uuid;

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;

/// Stem used when nothing safe is left of the original.
const FALLBACK_STEM: &str = "file";

/// Longest stem kept in a storage name.
pub const MAX_STEM_LEN: usize = 100;

/// Longest extension kept in a storage name.
pub const MAX_EXTENSION_LEN: usize = 16;

/// The two names derived from one client filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedFilename {
    /// Basename as the client sent it, for display only.
    pub display_name: String,
    /// Unique, filesystem-safe name the bytes are stored under.
    pub storage_name: String,
}

impl SanitizedFilename {
    /// Derive names using a fresh random token.
    pub fn generate(filename: &str) -> AppResult<Self> {
        sanitize_filename(filename, Uuid::new_v4())
    }
}

/// Derive the display and storage names for `filename` using `token` as
/// the uniqueness prefix.
pub fn sanitize_filename(filename: &str, token: Uuid) -> AppResult<SanitizedFilename> {
    let display_name = basename(filename);
    if display_name.trim().is_empty() {
        return Err(AppError::validation("Filename must not be empty"));
    }

    let (stem, extension) = split_extension(display_name);
    let stem = clean_stem(stem);
    let extension = extension.map(clean_extension).filter(|e| !e.is_empty());

    let token = token.simple();
    let storage_name = match extension {
        Some(ext) => format!("{token}_{stem}.{ext}"),
        None => format!("{token}_{stem}"),
    };

    Ok(SanitizedFilename {
        display_name: display_name.to_string(),
        storage_name,
    })
}

/// Last path component, treating both `/` and `\` as separators.
fn basename(filename: &str) -> &str {
    filename.rsplit(['/', '\\']).next().unwrap_or(filename)
}

fn split_extension(name: &str) -> (&str, Option<&str>) {
    let path = Path::new(name);
    match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) => (stem, path.extension().and_then(|e| e.to_str())),
        None => (name, None),
    }
}

fn clean_stem(stem: &str) -> String {
    let replaced: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = replaced.trim_matches(|c: char| c == '_' || c == '.');
    // `replaced` is ASCII, so byte slicing lands on char boundaries.
    let trimmed = trimmed
        .get(..MAX_STEM_LEN)
        .unwrap_or(trimmed)
        .trim_end_matches('_');
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

fn clean_extension(ext: &str) -> String {
    ext.chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_EXTENSION_LEN)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
