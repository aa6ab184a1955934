// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::options::ExportOptions,
    csv::{write_pair, Delimiter},
    error::ExportError,
    model::FlashcardPair,
};

/// Write the export file described by `export` (dir + stem, extension from delimiter).
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    pairs: &[FlashcardPair],
) -> Result<PathBuf, ExportError> {
    write_export_to(&export.out_path(), pairs, export.delimiter)
}

/// Write pairs to an explicit path (e.g. chosen in a save dialog).
pub fn write_export_to(
    path: &Path,
    pairs: &[FlashcardPair],
    delim: Delimiter,
) -> Result<PathBuf, ExportError> {
    if pairs.is_empty() {
        return Err(ExportError::Empty);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    for p in pairs {
        write_pair(&mut out, p, delim)?;
    }
    out.flush()?;

    logf!("Export: wrote {} pairs → {}", pairs.len(), path.display());
    Ok(path.to_path_buf())
}

/// Resolve a user `-o` value: empty → default file, dir hint → default file inside it.
/// A named file keeps its stem; the extension follows the delimiter.
pub fn resolve_out_path(user_o: &str, export: &ExportOptions) -> Result<PathBuf, ExportError> {
    if user_o.trim().is_empty() {
        return Ok(export.out_path());
    }
    let p = PathBuf::from(normalize_separators(user_o.trim()));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(export.file_name()))
    } else {
        Ok(p.with_extension(export.delimiter.ext()))
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
