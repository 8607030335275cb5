//! Shared helpers for directory scanning

use std::fs;
use std::io;
use std::path::Path;

use crate::tree::ROOT_DIR;

/// Depth of a relative directory: the number of `/` separators plus one.
///
/// Both the root (`.`) and its direct children have depth 1, so depth bounds
/// are measured from the first level of children.
pub fn depth(dir: &str) -> usize {
    dir.matches('/').count() + 1
}

/// Relative path of `name` inside `dir`.
pub fn child_dir(dir: &str, name: &str) -> String {
    if dir == ROOT_DIR {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// List the names of subdirectories of `path`, sorted by name.
///
/// Symbolic links are followed: a link to a directory is listed, a dangling
/// link is skipped. Any other failure fails the whole listing.
pub fn read_child_dirs(path: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        let is_dir = if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(meta) => meta.is_dir(),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            }
        } else {
            file_type.is_dir()
        };

        if !is_dir {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => {
                tracing::debug!(parent = %path.display(), ?name, "skipping non UTF-8 directory name");
            }
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    #[test]
    fn test_depth() {
        assert_eq!(depth("."), 1);
        assert_eq!(depth("a"), 1);
        assert_eq!(depth("a/b"), 2);
        assert_eq!(depth("a/b/c"), 3);
    }

    #[test]
    fn test_child_dir() {
        assert_eq!(child_dir(".", "a"), "a");
        assert_eq!(child_dir("a", "b"), "a/b");
        assert_eq!(child_dir("a/b", "c"), "a/b/c");
    }

    #[test]
    fn test_read_child_dirs_lists_only_directories() {
        let tree = TestTree::new();
        tree.add_dir("b");
        tree.add_dir("a/nested");
        tree.add_file("file.txt");

        assert_eq!(read_child_dirs(tree.path()).unwrap(), vec!["a", "b"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_child_dirs_follows_symlinks() {
        let tree = TestTree::new();
        tree.add_dir("real");
        tree.add_file("file.txt");
        tree.add_symlink("real", "link-to-dir");
        tree.add_symlink("file.txt", "link-to-file");
        tree.add_symlink("missing", "dangling");

        assert_eq!(
            read_child_dirs(tree.path()).unwrap(),
            vec!["link-to-dir", "real"]
        );
    }

    #[test]
    fn test_read_child_dirs_missing_directory_fails() {
        let tree = TestTree::new();
        let err = read_child_dirs(&tree.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
