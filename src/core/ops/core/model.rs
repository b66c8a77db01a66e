//! Contains the details needed for modeling spacename's operations
//!
//! The main element of this module is the RenameModel that is composed by the set of
//! RenameActions planned for a single folder.

use log::error;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::Path;

use super::super::Model;
use super::filesystem::{FileSystem, Route};
use super::{Error, ErrorKind};

/// Prefix used for the temporary names given to the files while a model is running
const STAGING_PREFIX: &str = ".spacename-";

/// Represents a single rename to perform on a folder. Both src and dst are expected to live
/// on the same folder, as the model is built for the contents of a single directory.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenameAction<F: FileSystem> {
    #[allow(missing_docs)]
    pub src: F,
    #[allow(missing_docs)]
    pub dst: F,
}

impl<F: FileSystem> RenameAction<F> {
    #[allow(missing_docs)]
    pub fn new(src: F, dst: F) -> Self {
        Self { src, dst }
    }

    /// Checks if the action leaves the file where it already is
    pub fn is_noop(&self) -> bool {
        self.src.path() == self.dst.path()
    }

    fn staging(&self, index: usize) -> F {
        let mut name = OsString::from(format!("{}{}-", STAGING_PREFIX, index));
        if let Some(original) = self.src.file_name() {
            name.push(original);
        }

        F::new(self.src.path().with_file_name(name))
    }
}

/// Rename model for a folder. The model is the ordered list of renames that puts every
/// file of the folder under its new name.
///
/// Running the model is done in two phases: every file is moved first to a staging name
/// and then to its final destination. This allows the destinations to overlap with the
/// current names of the folder, as happens when a folder is renamed twice.
#[derive(Debug, Clone)]
pub struct RenameModel<F: FileSystem> {
    actions: Vec<RenameAction<F>>,
}

impl<F: FileSystem> RenameModel<F> {
    #[allow(missing_docs)]
    pub fn new(actions: Vec<RenameAction<F>>) -> Self {
        Self { actions }
    }

    #[allow(missing_docs)]
    pub fn actions(&self) -> &[RenameAction<F>] {
        &self.actions
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Verifies, without touching the disk, that no destination or staging name is taken
    /// by a file foreign to the model.
    fn check(&self) -> Result<(), Error> {
        let sources: HashSet<&Path> = self.actions.iter().map(|a| a.src.path()).collect();

        for (index, action) in self.pending() {
            if action.dst.exists() && !sources.contains(action.dst.path()) {
                return Err(collision(action.dst.path()));
            }

            let staging = action.staging(index);
            if staging.exists() {
                return Err(collision(staging.path()));
            }
        }

        Ok(())
    }

    fn pending(&self) -> impl Iterator<Item = (usize, &RenameAction<F>)> {
        self.actions.iter().enumerate().filter(|(_, a)| !a.is_noop())
    }

    fn apply<L>(&self, logger: &L) -> Result<(), Error>
    where
        L: for<'a> Fn(&'a RenameAction<F>),
    {
        self.check()?;

        let mut staged = Vec::with_capacity(self.actions.len());
        for (index, action) in self.pending() {
            let staging = action.staging(index);
            if let Err(err) = action.src.rename_to(&staging) {
                rollback(&staged[..], 0);
                return Err(err.into());
            }

            staged.push((staging, action));
        }

        for (done, (staging, action)) in staged.iter().enumerate() {
            if let Err(err) = staging.rename_to(&action.dst) {
                rollback(&staged[..], done);
                return Err(err.into());
            }

            logger(action);
        }

        Ok(())
    }
}

/// Puts every staged file back under its original name. The first `done` entries already
/// reached their destination, so they are moved back to staging before the rest.
fn rollback<F: FileSystem>(staged: &[(F, &RenameAction<F>)], done: usize) {
    for (staging, action) in staged[..done].iter().rev() {
        undo(&action.dst, staging);
    }

    for (staging, action) in staged.iter().rev() {
        undo(staging, &action.src);
    }
}

fn undo<F: FileSystem>(from: &F, to: &F) {
    if let Err(err) = from.rename_to(to) {
        error!(
            "Unable to restore {} to {}: {}",
            from.display(),
            to.display(),
            err
        );
    }
}

impl<F: FileSystem> Default for RenameModel<F> {
    fn default() -> Self {
        Self { actions: vec![] }
    }
}

impl<F: FileSystem> Model for RenameModel<F> {
    type Action = RenameAction<F>;
    type Error = Error;

    fn run(self) -> Result<(), Self::Error> {
        self.apply(&|_| {})
    }

    fn log<L: for<'a> Fn(&'a Self::Action)>(&self, logger: &L) {
        self.actions.iter().for_each(|e| logger(e));
    }

    fn log_run<L>(self, logger: &L) -> Result<(), Self::Error>
    where
        L: for<'a> Fn(&'a Self::Action),
    {
        self.apply(logger)
    }
}

fn collision(path: &Path) -> Error {
    Error::with_cause(
        ErrorKind::Collision,
        format!("'{}' already exists", path.display()),
    )
}
