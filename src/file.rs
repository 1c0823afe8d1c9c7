// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Resolve a user-chosen data file.
/// - empty → `default_filename` in the working directory
/// - existing directory, or text ending in a separator → that directory + `default_filename`
/// - anything else → the path as given
pub fn resolve_data_path(user: &str, default_filename: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if user.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?; Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        fail!("Path exists but is not a directory: {}", dir.display());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
