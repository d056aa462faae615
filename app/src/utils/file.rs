//! Path helpers

use std::path::{Path, PathBuf};

/// Replace a leading `~` with the home directory
///
/// Other paths, and `~` when no home directory is known, are returned as given.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gridfilter.json");
        assert_eq!(expand_home(&path), path);
        assert_eq!(
            expand_home(Path::new("gridfilter.json")),
            PathBuf::from("gridfilter.json")
        );
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/filters.json")), home.join("filters.json"));
            assert_eq!(expand_home(Path::new("~")), home);
        }
    }

    #[test]
    fn tilde_inside_name_is_kept() {
        assert_eq!(expand_home(Path::new("~filters.json")), PathBuf::from("~filters.json"));
    }
}
