//! Holds all the logic for performing a rename operation
//!
//! The easiest way to use this module is through the global helper 'rename'. The rename
//! function will return the associated rename model for the given operator. The current
//! operator is:
//!
//! - EventSpaces: a root folder whose immediate subfolders are the event spaces. Every
//!   event space gets its files renamed to `<space name><index><extension>`, skipping the
//!   files that contain the exclusion pattern in their name.

use log::{debug, trace};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use super::core::filesystem::{FileSystem, Local, Route};
use super::core::model::{RenameAction, RenameModel};
use super::{Error, Model, Operation, Operator};

#[allow(missing_docs)]
pub type Action = RenameAction<Local>;

/// Default exclusion pattern, files containing it are left untouched
pub const DEFAULT_EXCLUDE: &str = "plan";

/// This function is responsible for making the rename model for the given operator
pub fn rename<'a, O: Operator<'a, Rename>>(
    operator: &'a mut O,
    options: O::Options,
) -> Result<O::Model, O::Error> {
    operator.modelate(options)
}

/// Modifiers for the rename operation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenameOptions {
    exclude: String,
}

impl RenameOptions {
    /// Creates the options with a custom exclusion pattern. The match against the file
    /// names is case-sensitive and can happen anywhere inside the name.
    pub fn with_exclude<S: Into<String>>(exclude: S) -> Self {
        Self {
            exclude: exclude.into(),
        }
    }

    #[allow(missing_docs)]
    pub fn exclude(&self) -> &str {
        &self.exclude
    }
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self::with_exclude(DEFAULT_EXCLUDE)
    }
}

/// Represents the rename operation. It's purpouse is to be the operation called for
/// <Type as Operator<Operation>>::modelate(...)
pub struct Rename;

impl Operation for Rename {}

/// Root folder holding one subfolder per event space
#[derive(Debug, Clone)]
pub struct EventSpaces {
    root: Local,
}

impl EventSpaces {
    #[allow(missing_docs)]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: Local::new(root),
        }
    }

    #[allow(missing_docs)]
    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

impl<'mo> Operator<'mo, Rename> for EventSpaces {
    type Model = RenamePlan;
    type Error = Error;
    type Options = RenameOptions;

    fn modelate(&'mo mut self, options: Self::Options) -> Result<Self::Model, Self::Error> {
        let mut spaces = vec![];

        for name in self.root.sorted_names()? {
            let dir = self.root.join(&name);
            if !dir.is_dir() {
                trace!("Skipping {}, not a folder", dir.display());
                continue;
            }

            let space = SpaceModel::build(dir, &options)?;
            if space.is_empty() {
                debug!("Event space {} has no files to rename", space.name());
                continue;
            }

            spaces.push(space);
        }

        Ok(RenamePlan { spaces })
    }
}

/// Renames planned for a single event space
#[derive(Debug, Clone)]
pub struct SpaceModel {
    name: OsString,
    model: RenameModel<Local>,
}

impl SpaceModel {
    /// Plans the renames of the plain files found inside the given folder. The folder name
    /// is used as the base of the new names.
    pub fn build(dir: Local, options: &RenameOptions) -> Result<Self, Error> {
        let name = dir.file_name().map(OsStr::to_os_string).unwrap_or_default();

        let files = dir
            .sorted_names()?
            .into_iter()
            .filter(|file| {
                if !is_eligible(file, options.exclude()) {
                    debug!("Excluding {}", dir.join(file).display());
                    return false;
                }

                dir.join(file).is_file()
            })
            .collect::<Vec<_>>();

        let actions = files
            .iter()
            .enumerate()
            .map(|(i, file)| {
                RenameAction::new(
                    dir.join(file),
                    dir.join(destination_name(&name, i + 1, file)),
                )
            })
            .collect();

        Ok(Self {
            name,
            model: RenameModel::new(actions),
        })
    }

    /// Name of the event space, lossy converted for display purpouses
    pub fn name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[allow(missing_docs)]
    pub fn actions(&self) -> &[Action] {
        self.model.actions()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }
}

impl Model for SpaceModel {
    type Action = Action;
    type Error = Error;

    fn run(self) -> Result<(), Self::Error> {
        self.model.run()
    }

    fn log<L: for<'a> Fn(&'a Self::Action)>(&self, logger: &L) {
        self.model.log(logger)
    }

    fn log_run<L>(self, logger: &L) -> Result<(), Self::Error>
    where
        L: for<'a> Fn(&'a Self::Action),
    {
        self.model.log_run(logger)
    }
}

/// The set of event spaces with something to rename, in lexicographic order
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    spaces: Vec<SpaceModel>,
}

impl RenamePlan {
    #[allow(missing_docs)]
    pub fn spaces(&self) -> &[SpaceModel] {
        &self.spaces
    }

    /// Total number of renames planned across all the event spaces
    pub fn len(&self) -> usize {
        self.spaces.iter().map(|s| s.actions().len()).sum()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

impl IntoIterator for RenamePlan {
    type Item = SpaceModel;
    type IntoIter = std::vec::IntoIter<SpaceModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.spaces.into_iter()
    }
}

impl Model for RenamePlan {
    type Action = Action;
    type Error = Error;

    fn run(self) -> Result<(), Self::Error> {
        for space in self.spaces {
            space.run()?;
        }

        Ok(())
    }

    fn log<L: for<'a> Fn(&'a Self::Action)>(&self, logger: &L) {
        for space in &self.spaces {
            space.log(logger);
        }
    }

    fn log_run<L>(self, logger: &L) -> Result<(), Self::Error>
    where
        L: for<'a> Fn(&'a Self::Action),
    {
        for space in self.spaces {
            space.log_run(logger)?;
        }

        Ok(())
    }
}

/// Checks if a file takes part of the rename based on its name
pub fn is_eligible(name: &OsStr, exclude: &str) -> bool {
    !name.to_string_lossy().contains(exclude)
}

/// Builds the new name of a file: `<parent><index><extension>`. The extension is the last
/// dot-delimited suffix of the original name, dot included. Names without a dot, or with
/// a single leading dot, carry no extension.
pub fn destination_name(parent: &OsStr, index: usize, name: &OsStr) -> OsString {
    let mut dst = parent.to_os_string();
    dst.push(index.to_string());

    if let Some(ext) = Path::new(name).extension() {
        dst.push(".");
        dst.push(ext);
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::{destination_name, is_eligible, rename, EventSpaces, RenameOptions};
    use crate::ops::core::filesystem::Route;
    use crate::ops::Model;
    use std::ffi::OsStr;

    fn dst(parent: &str, index: usize, name: &str) -> String {
        destination_name(OsStr::new(parent), index, OsStr::new(name))
            .into_string()
            .expect("Invalid utf-8")
    }

    #[test]
    fn test_destination_name() {
        assert_eq!(dst("room1", 1, "a.png"), "room11.png");
        assert_eq!(dst("room1", 2, "b.jpg"), "room12.jpg");
        assert_eq!(dst("terrace", 3, "photo.final.JPEG"), "terrace3.JPEG");
    }

    #[test]
    fn test_destination_name_without_extension() {
        assert_eq!(dst("terrace", 1, "notes"), "terrace1");
        assert_eq!(dst("terrace", 2, ".hidden"), "terrace2");
        assert_eq!(dst("terrace", 3, "trailing."), "terrace3.");
    }

    #[test]
    fn test_is_eligible() {
        assert!(is_eligible(OsStr::new("a.png"), "plan"));
        assert!(!is_eligible(OsStr::new("plan.txt"), "plan"));
        assert!(!is_eligible(OsStr::new("floorplan-v2.pdf"), "plan"));
        assert!(is_eligible(OsStr::new("Plan.pdf"), "plan"));
    }

    #[test]
    fn test_modelate_single_space() {
        let dir = tmpdir!();
        let room = create_dir!(tmppath!(dir, "room1"));
        create_file!(room.join("b.jpg"));
        create_file!(room.join("a.png"));
        create_file!(room.join("plan.txt"));

        let plan = rename(&mut EventSpaces::new(dir.path()), RenameOptions::default())
            .expect("Unable to build the model");

        assert_eq!(plan.spaces().len(), 1);
        let space = &plan.spaces()[0];
        assert_eq!(space.name(), "room1");

        let pairs = space
            .actions()
            .iter()
            .map(|a| (a.src.path().to_path_buf(), a.dst.path().to_path_buf()))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                (room.join("a.png"), room.join("room11.png")),
                (room.join("b.jpg"), room.join("room12.jpg")),
            ]
        );
    }

    #[test]
    fn test_modelate_skips_empty_spaces_and_files() {
        let dir = tmpdir!();
        create_file!(tmppath!(dir, "loose.jpg"));
        let empty = create_dir!(tmppath!(dir, "empty"));
        create_file!(empty.join("plan.pdf"));
        create_dir!(empty.join("nested"));
        let lounge = create_dir!(tmppath!(dir, "lounge"));
        create_file!(lounge.join("x.jpg"));

        let plan = rename(&mut EventSpaces::new(dir.path()), RenameOptions::default())
            .expect("Unable to build the model");

        assert_eq!(plan.spaces().len(), 1);
        assert_eq!(plan.spaces()[0].name(), "lounge");
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_modelate_custom_exclude() {
        let dir = tmpdir!();
        let room = create_dir!(tmppath!(dir, "room"));
        create_file!(room.join("plan.jpg"));
        create_file!(room.join("draft.jpg"));

        let plan = rename(
            &mut EventSpaces::new(dir.path()),
            RenameOptions::with_exclude("draft"),
        )
        .expect("Unable to build the model");

        let actions = plan.spaces()[0].actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].src.path(), room.join("plan.jpg").as_path());
        assert_eq!(actions[0].dst.path(), room.join("room1.jpg").as_path());
    }

    #[test]
    fn test_modelate_missing_root() {
        let dir = tmpdir!();
        let mut spaces = EventSpaces::new(tmppath!(dir, "missing"));
        assert!(rename(&mut spaces, RenameOptions::default()).is_err());
    }

    #[test]
    fn test_run_twice_is_stable() {
        let dir = tmpdir!();
        let room = create_dir!(tmppath!(dir, "hall"));
        create_file!(room.join("c.png"), "c");
        create_file!(room.join("a.jpg"), "a");
        create_file!(room.join("plan.png"), "plan");

        let mut spaces = EventSpaces::new(dir.path());
        rename(&mut spaces, RenameOptions::default())
            .expect("Unable to build the model")
            .run()
            .expect("Unable to run the model");

        assert_eq!(read_file!(room.join("hall1.jpg")), "a");
        assert_eq!(read_file!(room.join("hall2.png")), "c");
        assert_eq!(read_file!(room.join("plan.png")), "plan");

        let again = rename(&mut spaces, RenameOptions::default())
            .expect("Unable to build the model");
        assert!(again.spaces()[0].actions().iter().all(|a| a.is_noop()));
        again.run().expect("Unable to run the model");

        assert_eq!(read_file!(room.join("hall1.jpg")), "a");
        assert_eq!(read_file!(room.join("hall2.png")), "c");
    }
}
