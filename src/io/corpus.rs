//! Corpus loading and signature persistence.
//!
//! The core pipeline is deliberately free of I/O; this module is the thin
//! boundary that turns files into the line-oriented input the extractor
//! expects and persists signatures as JSON.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::errors::{KenningError, Result};
use crate::core::featureset::Signature;

/// Read a text file into lines, each retaining its terminating newline.
///
/// Sentence segmentation concatenates lines verbatim, so the line breaks
/// must survive loading; a stripped break would fuse the last word of one
/// line with the first word of the next.
pub fn read_corpus(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| {
        KenningError::io(format!("failed to read corpus '{}'", path.display()), e)
    })?;

    let lines: Vec<String> = raw.split_inclusive('\n').map(str::to_string).collect();
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Write a signature to `path` as pretty-printed JSON.
pub fn save_signature(path: impl AsRef<Path>, signature: &Signature) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(signature)?;
    fs::write(path, json).map_err(|e| {
        KenningError::io(format!("failed to write signature '{}'", path.display()), e)
    })?;
    debug!("saved signature for '{}' to {}", signature.author, path.display());
    Ok(())
}

/// Load a signature from a JSON file.
pub fn load_signature(path: impl AsRef<Path>) -> Result<Signature> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| {
        KenningError::io(format!("failed to read signature '{}'", path.display()), e)
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load every `*.json` signature in a directory, sorted by file name.
///
/// The sort keeps downstream attribution output deterministic regardless of
/// directory iteration order.
pub fn discover_signatures(dir: impl AsRef<Path>) -> Result<Vec<Signature>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| {
        KenningError::io(
            format!("failed to read signature directory '{}'", dir.display()),
            e,
        )
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            KenningError::io(
                format!("failed to read entry in '{}'", dir.display()),
                e,
            )
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut signatures = Vec::with_capacity(paths.len());
    for path in &paths {
        signatures.push(load_signature(path)?);
    }

    debug!("discovered {} signatures in {}", signatures.len(), dir.display());
    Ok(signatures)
}
