use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// One class folder of a classification dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDir {
    /// Position in name order; used as the class label.
    pub label: usize,
    pub name: String,
    pub path: PathBuf,
}

/// Counts the immediate subdirectories of `path`, one per class.
///
/// Regular files and symlinks are ignored. An unreadable path or a path
/// without any subdirectory is an [`Error::Directory`].
pub fn enumerate_classes<P: AsRef<Path>>(path: P) -> Result<usize> {
    let count = scan(path.as_ref())?.len();
    log::info!(
        "found {} class folder(s) in {} (each folder is one class)",
        count,
        path.as_ref().display()
    );
    Ok(count)
}

/// Lists the class folders of `path` sorted by name, labelled `0..n`.
pub fn class_directories<P: AsRef<Path>>(path: P) -> Result<Vec<ClassDir>> {
    let mut dirs = scan(path.as_ref())?;
    dirs.sort();
    Ok(dirs
        .into_iter()
        .enumerate()
        .map(|(label, (name, path))| ClassDir { label, name, path })
        .collect())
}

fn scan(path: &Path) -> Result<Vec<(String, PathBuf)>> {
    let unreadable = |e: std::io::Error| {
        Error::Directory(format!("cannot open directory {}: {}", path.display(), e))
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(path).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if entry.file_type().map_err(unreadable)?.is_dir() {
            dirs.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
        }
    }

    if dirs.is_empty() {
        return Err(Error::Directory(format!(
            "no class folders found in {}; check the dataset path and layout",
            path.display()
        )));
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn counts_only_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("cat")).unwrap();
        fs::create_dir(dir.path().join("dog")).unwrap();
        fs::write(dir.path().join("readme.txt"), b"classes").unwrap();
        assert_eq!(enumerate_classes(dir.path()).unwrap(), 2);
    }

    #[test]
    fn nested_folders_do_not_count() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("bird").join("extra")).unwrap();
        assert_eq!(enumerate_classes(dir.path()).unwrap(), 1);
    }

    #[test]
    fn no_subdirectories_is_directory_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("only.txt"), b"x").unwrap();
        assert!(matches!(enumerate_classes(dir.path()), Err(Error::Directory(_))));
    }

    #[test]
    fn missing_path_is_directory_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            enumerate_classes(dir.path().join("absent")),
            Err(Error::Directory(_))
        ));
    }

    #[test]
    fn class_directories_are_sorted_and_labelled() {
        let dir = tempdir().unwrap();
        for name in ["zebra", "ant", "moose"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        let classes = class_directories(dir.path()).unwrap();
        let names: Vec<_> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["ant", "moose", "zebra"]);
        assert_eq!(classes[2].label, 2);
        assert_eq!(classes[0].path, dir.path().join("ant"));
    }
}
