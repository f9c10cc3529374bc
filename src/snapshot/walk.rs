//! Directory enumeration for snapshot rebuilds.
//!
//! Subdirectories are walked in parallel with rayon. Only the root's own
//! `read_dir` failure is reported; unreadable subdirectories are skipped.

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

/// Lists the files under `root`, descending into subdirectories when `recursive`.
///
/// The result is unsorted.
pub fn list_files(root: &Path, recursive: bool) -> io::Result<Vec<PathBuf>> {
    let entries: Vec<DirEntry> = fs::read_dir(root)?.filter_map(Result::ok).collect();
    Ok(files_in(entries, recursive))
}

fn files_in(entries: Vec<DirEntry>, recursive: bool) -> Vec<PathBuf> {
    entries
        .into_par_iter()
        .flat_map_iter(|entry| {
            let path = entry.path();
            // Get file type without following symlinks
            let Ok(file_type) = entry.file_type() else {
                return Vec::new();
            };

            if file_type.is_dir() {
                if recursive {
                    walk_subdirectory(&path)
                } else {
                    Vec::new()
                }
            } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
                vec![path]
            } else {
                Vec::new()
            }
        })
        .collect()
}

fn walk_subdirectory(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir) {
        Ok(read_dir) => files_in(read_dir.filter_map(Result::ok).collect(), true),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn names(mut paths: Vec<PathBuf>, root: &Path) -> Vec<String> {
        paths.sort();
        paths
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn list_empty_directory() {
        let temp = TempDir::new().unwrap();
        let files = list_files(temp.path(), true).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn list_top_level_only() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        File::create(temp.path().join("a.jpg")).unwrap();
        File::create(temp.path().join("sub/b.jpg")).unwrap();

        let files = list_files(temp.path(), false).unwrap();
        assert_eq!(names(files, temp.path()), vec!["a.jpg"]);
    }

    #[test]
    fn list_recursive_includes_nested_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sub/deeper")).unwrap();
        File::create(temp.path().join("a.jpg")).unwrap();
        File::create(temp.path().join("sub/b.jpg")).unwrap();
        File::create(temp.path().join("sub/deeper/c.jpg")).unwrap();

        let files = list_files(temp.path(), true).unwrap();
        assert_eq!(
            names(files, temp.path()),
            vec!["a.jpg", "sub/b.jpg", "sub/deeper/c.jpg"]
        );
    }

    #[test]
    fn list_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        assert!(list_files(&missing, false).is_err());
    }
}
