use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{CatalogError, FormatCause, Result};

/// Expand a leading `~` against `$HOME`; anything else is taken as given.
pub fn normalize_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    if let Some(rest) = raw.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') {
            if let Ok(home) = std::env::var("HOME") {
                return PathBuf::from(home).join(rest.trim_start_matches('/'));
            }
        }
    }
    PathBuf::from(raw)
}

pub fn load_json(path: &Path) -> Result<Value> {
    let format_err = |source: FormatCause| CatalogError::Format {
        path: path.to_path_buf(),
        source,
    };
    let text = fs::read_to_string(path).map_err(|e| format_err(e.into()))?;
    let value = serde_json::from_str(&text).map_err(|e| format_err(e.into()))?;
    info!(path = %path.display(), bytes = text.len(), "loaded json");
    Ok(value)
}

/// Pretty-print (2-space indent, UTF-8 unescaped) with a trailing newline.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let write_err = |source: std::io::Error| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let file = fs::File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value).map_err(|e| write_err(e.into()))?;
    out.write_all(b"\n").map_err(write_err)?;
    out.flush().map_err(write_err)?;
    info!(path = %path.display(), "wrote json");
    Ok(())
}
