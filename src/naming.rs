//! Filename conventions used alongside navigation.
//!
//! - Numbered prefixes `([NNN0])name` pin a manual order in front of the
//!   alphabetical one.
//! - Converted variants such as `example.png90.jpg` (a png re-encoded at
//!   quality 90) are grouped with their source `example.png`.

use std::path::{Path, PathBuf};

const NUMBERED_PREFIX_LEN: usize = "([0000])".len();

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn with_file_name(path: &Path, name: &str) -> PathBuf {
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Returns the file name with any `([NNNN])` prefix stripped.
pub fn file_name_without_numbered_prefix(path: &Path) -> String {
    let name = file_name(path);
    if name.len() > NUMBERED_PREFIX_LEN
        && name.starts_with("([")
        && name.get(6..8) == Some("])")
    {
        name[NUMBERED_PREFIX_LEN..].to_string()
    } else {
        name
    }
}

/// Prefixes the file name with `([NNN0])`. Paths that already carry a prefix
/// are returned unchanged.
pub fn add_numbered_prefix(path: &Path, number: u32) -> PathBuf {
    let name = file_name(path);
    if name != file_name_without_numbered_prefix(path) {
        return path.to_path_buf();
    }
    // Trailing zero leaves room to slot files in between later.
    with_file_name(path, &format!("([{number:03}0]){name}"))
}

/// Compares two paths case-insensitively, ignoring their final extensions.
pub fn same_except_extension(a: &Path, b: &Path) -> bool {
    stem_upper(a) == stem_upper(b)
}

fn stem_upper(path: &Path) -> String {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    with_file_name(path, &stem)
        .to_string_lossy()
        .to_uppercase()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Removes a conversion suffix like `png90` from `example.png90.jpg`,
/// giving `example.jpg`.
///
/// The suffix must be one of `extensions` (without its dot) followed by digits.
pub fn path_with_suffix_removed<S: AsRef<str>>(path: &Path, extensions: &[S]) -> Option<PathBuf> {
    let name = file_name(path);
    let mut parts: Vec<&str> = name.split('.').collect();
    if parts.len() <= 2 {
        return None;
    }

    let middle = parts[parts.len() - 2].to_lowercase();
    let is_suffix = extensions.iter().any(|extension| {
        let kind = extension.as_ref().replace('.', "");
        middle.starts_with(&kind) && is_digits(&middle.replace(&kind, ""))
    });
    if !is_suffix {
        return None;
    }

    parts.remove(parts.len() - 2);
    Some(with_file_name(path, &parts.join(".")))
}

/// Files related to `path` by extension or conversion suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimilarNames {
    pub matches: Vec<PathBuf>,
    /// `path` with its conversion suffix removed, if it had one.
    pub without_suffix: Option<PathBuf>,
}

/// Finds the entries of `others` that belong to the same group as `path`.
pub fn find_similar_names<S: AsRef<str>>(
    path: &Path,
    extensions: &[S],
    others: &[PathBuf],
) -> SimilarNames {
    let without_suffix = path_with_suffix_removed(path, extensions);
    let base = without_suffix.as_deref().unwrap_or(path);
    let path_upper = path.to_string_lossy().to_uppercase();

    let matches = others
        .iter()
        .filter(|other| other.to_string_lossy().to_uppercase() != path_upper)
        .filter(|other| {
            same_except_extension(base, other)
                || path_with_suffix_removed(other, extensions)
                    .is_some_and(|stripped| same_except_extension(base, &stripped))
        })
        .cloned()
        .collect();

    SimilarNames {
        matches,
        without_suffix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_prefix_added_once() {
        let numbered = add_numbered_prefix(Path::new("/p/photo.jpg"), 12);
        assert_eq!(numbered, PathBuf::from("/p/([0120])photo.jpg"));
        assert_eq!(add_numbered_prefix(&numbered, 5), numbered);
    }

    #[test]
    fn numbered_prefix_stripped() {
        assert_eq!(
            file_name_without_numbered_prefix(Path::new("/p/([0120])photo.jpg")),
            "photo.jpg"
        );
        assert_eq!(
            file_name_without_numbered_prefix(Path::new("/p/photo.jpg")),
            "photo.jpg"
        );
        assert_eq!(
            file_name_without_numbered_prefix(Path::new("/p/([0120])")),
            "([0120])"
        );
    }

    #[test]
    fn same_except_extension_ignores_case() {
        assert!(same_except_extension(
            Path::new("/p/Photo.jpg"),
            Path::new("/p/photo.PNG")
        ));
        assert!(!same_except_extension(
            Path::new("/p/photo.jpg"),
            Path::new("/q/photo.png")
        ));
    }

    #[test]
    fn suffix_removed_for_conversion_outputs() {
        let exts = [".png", ".jpg"];
        assert_eq!(
            path_with_suffix_removed(Path::new("/p/example.png90.jpg"), &exts),
            Some(PathBuf::from("/p/example.jpg"))
        );
        assert_eq!(path_with_suffix_removed(Path::new("/p/example.jpg"), &exts), None);
        assert_eq!(
            path_with_suffix_removed(Path::new("/p/example.v2.jpg"), &exts),
            None
        );
        assert_eq!(
            path_with_suffix_removed(Path::new("/p/example.png.jpg"), &exts),
            None
        );
    }

    #[test]
    fn similar_names_group_conversions() {
        let exts = [".png", ".jpg"];
        let others = vec![
            PathBuf::from("/p/example.png"),
            PathBuf::from("/p/example.png60.jpg"),
            PathBuf::from("/p/example.png90.jpg"),
            PathBuf::from("/p/unrelated.png"),
        ];

        let similar = find_similar_names(Path::new("/p/example.png90.jpg"), &exts, &others);
        assert_eq!(similar.without_suffix, Some(PathBuf::from("/p/example.jpg")));
        assert_eq!(
            similar.matches,
            vec![
                PathBuf::from("/p/example.png"),
                PathBuf::from("/p/example.png60.jpg"),
            ]
        );
    }
}
