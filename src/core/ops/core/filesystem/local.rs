use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Display, Path, PathBuf};

use super::{Directory, DirectoryIterator, FileSystem, Route};

/// Represents the standard filesystem. As such, the methods implemented here are
/// fundamentally call's to the functions in the standard library
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Local {
    path: PathBuf,
}

impl Local {
    #[allow(missing_docs)]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl FileSystem for Local {
    type Directory = fs::DirEntry;
    type DirectoryIterator = fs::ReadDir;

    fn new<P: Into<PathBuf>>(path: P) -> Self {
        Local::new(path)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn is_file(&self) -> bool {
        self.path.is_file()
    }

    fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    fn read_dir(&self) -> io::Result<Self::DirectoryIterator> {
        fs::read_dir(&self.path)
    }

    fn rename_to(&self, other: &Self) -> io::Result<()> {
        fs::rename(&self.path, &other.path)
    }
}

impl Route for Local {
    fn path(&self) -> &Path {
        &self.path
    }

    fn join<T: AsRef<Path>>(&self, other: T) -> Self {
        Local::new(self.path.join(other))
    }

    fn display(&self) -> Display<'_> {
        self.path.display()
    }
}

impl DirectoryIterator<fs::DirEntry> for fs::ReadDir {}

impl Directory for fs::DirEntry {
    fn file_name(&self) -> OsString {
        fs::DirEntry::file_name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{FileSystem, Local};

    #[test]
    fn test_sorted_names() {
        let dir = tmpdir!();
        create_file!(tmppath!(dir, "b.jpg"));
        create_file!(tmppath!(dir, "a.png"));
        create_dir!(tmppath!(dir, "c"));

        let names = Local::new(dir.path())
            .sorted_names()
            .expect("Unable to list dir");
        assert_eq!(names, vec!["a.png", "b.jpg", "c"]);
    }

    #[test]
    fn test_sorted_names_missing_dir() {
        let dir = tmpdir!();
        assert!(Local::new(tmppath!(dir, "missing")).sorted_names().is_err());
    }

    #[test]
    fn test_rename_to() {
        let dir = tmpdir!();
        let src = Local::new(create_file!(tmppath!(dir, "a.txt"), "aaaa"));
        let dst = Local::new(tmppath!(dir, "b.txt"));

        src.rename_to(&dst).expect("Unable to rename");
        assert!(!src.exists());
        assert!(tmppath!(dir, "b.txt").is_file());
        assert_eq!(read_file!(tmppath!(dir, "b.txt")), "aaaa");
    }
}
