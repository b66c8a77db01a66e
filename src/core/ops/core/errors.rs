//! Contains the errors returned by the operations performed by spacename

use std::fmt::{self, Display};
use std::io;

create_error! {}

impl From<io::Error> for Error {
    fn from(cause: io::Error) -> Self {
        Error::with_cause(ErrorKind::IO, cause)
    }
}

/// Particular type of error that was encountered during execution
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Errors related to input-output operations
    IO,
    /// A rename target is already taken by a file that is not part of the operation
    Collision,
}

impl ErrorKind {
    #[allow(missing_docs)]
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::IO => "Ops:0000",
            ErrorKind::Collision => "Ops:0001",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorKind::IO => write!(f, "Unable to access the disk during the operation"),
            ErrorKind::Collision => {
                write!(f, "Rename target is already taken by an unrelated file")
            }
        }
    }
}
