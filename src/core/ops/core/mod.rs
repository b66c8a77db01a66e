//! Implements the low level details of spacename's operations.
//!
//! These details are divided in two important elements:
//!
//!   - The filesystem abstraction used to list and move files
//!   - The RenameModel that holds the renames planned for a single folder

mod errors;

pub mod filesystem;
pub mod model;

pub use self::errors::{Error, ErrorKind};
