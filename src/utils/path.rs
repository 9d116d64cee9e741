//! Filesystem path helpers.
//!
//! Content files are matched against collection sources by their path
//! relative to the content directory, always with `/` separators.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolving symlinks), falls back to joining
/// relative paths onto the current directory and folding `.`/`..` lexically.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            clean(path)
        } else {
            std::env::current_dir().map_or_else(|_| clean(path), |cwd| clean(&cwd.join(path)))
        }
    })
}

/// Fold `.` and `..` components without touching the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Resolve a user-supplied path: absolute paths are normalized, relative
/// ones are taken from cwd if they exist, otherwise from `fallback_dir`.
#[inline]
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize_path(path);
    }

    if path.exists() {
        return normalize_path(path);
    }

    normalize_path(&fallback_dir.join(path))
}

/// Path of `file` relative to `base`, joined with `/`.
///
/// Returns `None` when `file` is not inside `base` or still carries `.`/`..`
/// components after the prefix.
///
/// ```ignore
/// rel_slash(Path::new("/site/content/blog/a.md"), Path::new("/site/content"))
///     == Some("blog/a.md".into())
/// ```
pub fn rel_slash(file: &Path, base: &Path) -> Option<String> {
    let rel = file.strip_prefix(base).ok()?;
    let parts = rel
        .components()
        .map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;

    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.yml"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path(Path::new("/absolute/path"), Path::new("/fallback"));
        assert_eq!(resolved, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_resolve_path_fallback() {
        let resolved = resolve_path(Path::new("nonexistent/path"), Path::new("/fallback"));
        assert_eq!(resolved, PathBuf::from("/fallback/nonexistent/path"));
    }

    #[test]
    fn test_rel_slash() {
        let base = Path::new("/site/content");
        assert_eq!(
            rel_slash(Path::new("/site/content/blog/a.md"), base),
            Some("blog/a.md".to_string())
        );
        assert_eq!(
            rel_slash(Path::new("/site/content/index.yml"), base),
            Some("index.yml".to_string())
        );
        assert_eq!(rel_slash(Path::new("/elsewhere/index.yml"), base), None);
        assert_eq!(rel_slash(base, base), None);
        assert_eq!(
            rel_slash(Path::new("/site/content/projects/../projects/a.yml"), base),
            None
        );
    }

    #[test]
    fn test_clean_folds_dot_components() {
        assert_eq!(
            clean(Path::new("/site/content/./projects/../blog/a.md")),
            PathBuf::from("/site/content/blog/a.md")
        );
        assert_eq!(clean(Path::new("../a")), PathBuf::from("../a"));
    }

    #[test]
    fn test_resolve_path_parent_segments() {
        let dir = tempfile::tempdir().unwrap();
        let content = normalize_path(dir.path());
        std::fs::create_dir_all(content.join("projects")).unwrap();
        std::fs::write(content.join("projects/bad.yml"), "").unwrap();

        let resolved = resolve_path(&content.join("projects/../projects/bad.yml"), &content);
        assert_eq!(rel_slash(&resolved, &content).as_deref(), Some("projects/bad.yml"));

        let missing = resolve_path(&content.join("projects/../gone.yml"), &content);
        assert_eq!(missing, content.join("gone.yml"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_path_through_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let root = normalize_path(dir.path());
        let content = root.join("site/content");
        std::fs::create_dir_all(content.join("projects")).unwrap();
        std::fs::write(content.join("projects/bad.yml"), "").unwrap();
        std::os::unix::fs::symlink(root.join("site"), root.join("link")).unwrap();

        let via_link = root.join("link/content/projects/bad.yml");
        let resolved = resolve_path(&via_link, &content);
        assert_eq!(rel_slash(&resolved, &content).as_deref(), Some("projects/bad.yml"));
    }
}
