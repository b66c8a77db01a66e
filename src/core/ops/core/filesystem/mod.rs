//! Implementation of the abstractions over the filesystem.
//!
//! These abstractions are designed to allow for the implementation of multiple
//! filesystem representations that share behavioral traits such as a remote server.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Display, Path, PathBuf};

mod local;

pub use self::local::Local;

/// Abstraction over a filesystem. Allows to use different representations of a file
/// system for spacename's operations.
///
/// All the functions present in this trait are present in the standard library and are
/// intended to behave in a similar way to the ones implemented there
pub trait FileSystem: Route + Sized {
    #[allow(missing_docs)]
    type Directory: Directory;

    #[allow(missing_docs)]
    type DirectoryIterator: DirectoryIterator<Self::Directory>;

    #[allow(missing_docs)]
    fn new<P: Into<PathBuf>>(path: P) -> Self;

    #[allow(missing_docs)]
    fn exists(&self) -> bool;

    /// Follows symlinks, same as `Path::is_file`
    fn is_file(&self) -> bool;

    /// Follows symlinks, same as `Path::is_dir`
    fn is_dir(&self) -> bool;

    #[allow(missing_docs)]
    fn read_dir(&self) -> io::Result<Self::DirectoryIterator>;

    /// Moves the element to the location given by other. Moving an element between two
    /// different filesystems is not supported.
    fn rename_to(&self, other: &Self) -> io::Result<()>;

    /// Lists the names of the entries inside the directory sorted in lexicographic order.
    fn sorted_names(&self) -> io::Result<Vec<OsString>> {
        let mut names = self
            .read_dir()?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;

        names.sort();
        Ok(names)
    }
}

/// Abstraction over a path. It implements an abstraction over the path methods that
/// do not need to touch the filesystem. If the required method has to do a system call,
/// then it goes inside the FileSystem trait and not this one
pub trait Route {
    #[allow(missing_docs)]
    fn path(&self) -> &Path;

    #[allow(missing_docs)]
    fn join<P: AsRef<Path>>(&self, other: P) -> Self;

    #[allow(missing_docs)]
    fn display(&self) -> Display<'_>;

    #[allow(missing_docs)]
    fn file_name(&self) -> Option<&OsStr> {
        self.path().file_name()
    }
}

#[allow(missing_docs)]
pub trait DirectoryIterator<D: Directory>: Iterator<Item = io::Result<D>> {}

/// Representation of a directory entry in the filesystem
pub trait Directory {
    #[allow(missing_docs)]
    fn file_name(&self) -> OsString;
}
