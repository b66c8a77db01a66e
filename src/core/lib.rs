#![warn(missing_docs)]
#![allow(clippy::new_ret_no_self)]

//! This is the core of spacename. Spacename renames the images stored inside a set of
//! event space folders so that every folder follows the same sequential naming scheme:
//! `<folder name><index><extension>`.
//!
//! ## About the core
//!
//! The core of spacename contains all the logic for the operations performed. It's
//! responsability is to provide two things:
//!
//! - an API to plan the rename of a root folder and report it (dry-run) or apply it
//! - an API to load the optional configuration file stored on the root folder
//!
//! ## About the structure
//!
//! - config: the config module is responsible of managing the `.spacename.toml` file found
//!           on the root folder.
//! - ops: the ops module holds the operations shipped with spacename and the traits used to
//!        model them.
//! - ops::core: the core module provides the bare bone elements for generating the operations,
//!              the filesystem abstraction and the rename model.

#[macro_use]
mod errors;

#[cfg(test)]
#[macro_use]
mod tools;

pub mod config;
pub mod ops;

#[allow(missing_docs)]
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::ops::rename::{EventSpaces, RenameOptions, RenamePlan, SpaceModel};
    pub use crate::ops::{Model, Operation, Operator};
}
