use log::debug;
use std::path::Path;

/// Reports whether the directory portion of a path exists
pub trait PathChecker {
    /// `path` may name a directory directly or a file that does not exist yet;
    /// in the latter case its parent directory is checked.
    fn directory_exists(&self, path: &Path) -> bool;
}

impl<P: PathChecker + ?Sized> PathChecker for &P {
    fn directory_exists(&self, path: &Path) -> bool {
        (**self).directory_exists(path)
    }
}

/// Filesystem-backed path checker
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathChecker;

impl FsPathChecker {
    pub fn new() -> Self {
        Self
    }
}

impl PathChecker for FsPathChecker {
    fn directory_exists(&self, path: &Path) -> bool {
        if path.is_dir() {
            return true;
        }

        // A bare file name lives in the current directory
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let exists = dir.is_dir();
        debug!("Directory {:?} for {:?} exists: {}", dir, path, exists);
        exists
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_directory() {
        let temp = TempDir::new().unwrap();
        assert!(FsPathChecker::new().directory_exists(temp.path()));
    }

    #[test]
    fn test_file_in_existing_directory() {
        let temp = TempDir::new().unwrap();
        let report = temp.path().join("report.txt");
        assert!(FsPathChecker::new().directory_exists(&report));
    }

    #[test]
    fn test_file_in_missing_directory() {
        let temp = TempDir::new().unwrap();
        let report = temp.path().join("missing").join("report.txt");
        assert!(!FsPathChecker::new().directory_exists(&report));
    }

    #[test]
    fn test_bare_file_name_uses_current_directory() {
        assert!(FsPathChecker::new().directory_exists(Path::new("out.txt")));
    }
}
