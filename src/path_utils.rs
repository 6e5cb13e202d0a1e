//! Path validation and utility functions

use std::path::{Component, Path, PathBuf};

/// Validates that a path string is not empty or just whitespace
pub fn validate_path_str(path_str: &str) -> Result<(), String> {
    if path_str.trim().is_empty() {
        return Err("Path cannot be empty or contain only whitespace".to_string());
    }
    Ok(())
}

/// Safely gets the parent directory for creating directories.
/// Returns None for paths that don't need directory creation (like "skills" in current dir)
pub fn safe_parent_for_creation(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Makes `path` absolute against the current directory and removes `.` and `..`
/// components without touching the filesystem. Symlinks are not resolved.
pub fn absolute_lexical(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolves symlink text the way the OS does for a single hop: relative text is
/// taken against the directory that holds the link.
pub fn resolve_link_text(link_path: &Path, link_text: &Path) -> PathBuf {
    if link_text.is_absolute() {
        return link_text.to_path_buf();
    }
    match link_path.parent() {
        Some(parent) => parent.join(link_text),
        None => link_text.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path_str() {
        assert!(validate_path_str("").is_err());
        assert!(validate_path_str("   ").is_err());
        assert!(validate_path_str("\t").is_err());
        assert!(validate_path_str("valid/path").is_ok());
        assert!(validate_path_str("config.toml").is_ok());
    }

    #[test]
    fn test_safe_parent_for_creation() {
        assert!(safe_parent_for_creation(Path::new("skills")).is_none());
        assert!(safe_parent_for_creation(Path::new("dir/skills")).is_some());
        assert!(safe_parent_for_creation(Path::new("/tmp/skills")).is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_lexical_removes_dot_components() {
        assert_eq!(
            absolute_lexical(Path::new("/a/./b/../c/")),
            PathBuf::from("/a/c")
        );
        assert_eq!(absolute_lexical(Path::new("/a/b/..")), PathBuf::from("/a"));
    }

    #[test]
    fn test_absolute_lexical_relative_is_anchored_at_cwd() {
        let _guard = crate::test_utils::lock_env();
        let cwd = std::env::current_dir().expect("cwd");
        assert_eq!(absolute_lexical(Path::new("some/dir")), cwd.join("some/dir"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_link_text() {
        assert_eq!(
            resolve_link_text(Path::new("/t/skills"), Path::new("../s/skills")),
            PathBuf::from("/t/../s/skills")
        );
        assert_eq!(
            resolve_link_text(Path::new("/t/skills"), Path::new("/s/skills")),
            PathBuf::from("/s/skills")
        );
    }
}
