//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;

use crate::content::ContentFormat;
use crate::utils::path::{rel_slash, resolve_path};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect content files based on CLI paths
///
/// No paths means the whole content directory. A single `-` reads paths
/// from stdin. Directories are walked recursively; only YAML and Markdown
/// files are kept. The result is sorted.
pub fn collect_content_files(paths: &[PathBuf], content_dir: &Path) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        let mut files = filter_content_files(collect_all_files(content_dir));
        files.sort();
        return Ok(files);
    }

    let mut all_files = Vec::new();
    for path in &paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if ContentFormat::from_path(&resolved).is_some() {
                all_files.push(resolved);
            } else {
                bail!("Not a supported content file: {}", path.display());
            }
        } else if resolved.is_dir() {
            all_files.extend(filter_content_files(collect_all_files(&resolved)));
        } else {
            let content_relative = content_dir.join(path);
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_relative.display()
            );
        }
    }

    all_files.sort();
    all_files.dedup();
    Ok(all_files)
}

/// Collect all files from a directory recursively
fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect()
}

/// Read file paths from stdin, one per line
fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

/// Filter a list of paths to only include supported content files
fn filter_content_files(files: Vec<PathBuf>) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|p| ContentFormat::from_path(p).is_some())
        .collect()
}

/// Label for a content file in reports: content-relative when possible.
pub fn display_name(file: &Path, content_dir: &Path) -> String {
    rel_slash(file, content_dir).unwrap_or_else(|| file.display().to_string())
}
