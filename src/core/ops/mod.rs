//! The ops module holds the details for the operations performed by spacename.
//!
//! This modules comes with two elements:
//!
//!  - A core ops::core that holds the building blocks for the operations
//!  - The specific operations ops::{name of the op}

pub mod core;
pub mod rename;

pub use self::core::{Error, ErrorKind};

/// A model is the planned form of an operation: the list of renames it is going to perform,
/// known before anything is touched on disk.
///
/// A dry-run only walks the planned renames through `log`, the apply mode goes through
/// `run` or `log_run`.
pub trait Model {
    /// A single planned rename, or whatever unit the model reports one at a time
    type Action;

    /// The error that can be returned during a model execution
    type Error: std::error::Error;

    /// Applies every planned change on disk.
    fn run(self) -> Result<(), Self::Error>;

    /// Hands every planned action to the logger without touching the disk.
    fn log<L: for<'a> Fn(&'a Self::Action)>(&self, logger: &L);

    /// Applies the model, handing each action to the logger once it is done on disk.
    fn log_run<L>(self, logger: &L) -> Result<(), Self::Error>
    where
        L: for<'a> Fn(&'a Self::Action);
}

/// Marker for an operation that can be planned, such as the rename of the event spaces.
pub trait Operation {}

/// Something that knows how to plan a given operation over its own data, e.g. a root folder
/// of event spaces planning the rename.
pub trait Operator<'mo, O: Operation> {
    /// The planned model
    type Model: Model + 'mo;

    /// The error found while inspecting the disk to plan the model
    type Error: std::error::Error;

    /// Modifiers applied while planning
    type Options;

    /// Inspects the operator data and plans the operation.
    fn modelate(&'mo mut self, options: Self::Options) -> Result<Self::Model, Self::Error>;
}
