//! Shared error boilerplate for the config and ops modules

/// Declares the `Error` type of the invoking module. The error is shown as
/// `[<code>] -> <kind message>` and keeps the underlying io or parse failure as its source.
///
/// The module must provide an `ErrorKind` that is `Copy + Display` with a `code` method
/// returning strings such as `Ops:0001` or `Config:0000`.
macro_rules! create_error {
    () => {
        /// Error returned by the module, carrying a kind with its code and an optional cause
        #[derive(Debug)]
        pub struct Error {
            kind: ErrorKind,
            cause: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
        }

        impl Error {
            #[allow(missing_docs)]
            pub fn new(kind: ErrorKind) -> Self {
                Self { kind, cause: None }
            }

            #[allow(missing_docs)]
            pub fn with_cause<E>(kind: ErrorKind, cause: E) -> Self
            where
                E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
            {
                Self {
                    kind,
                    cause: Some(cause.into()),
                }
            }

            #[allow(missing_docs)]
            pub fn kind(&self) -> ErrorKind {
                self.kind
            }
        }

        impl std::fmt::Display for Error {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "[{}] -> {}", self.kind.code(), self.kind)
            }
        }

        impl std::error::Error for Error {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match self.cause {
                    Some(ref boxed) => Some(&**boxed),
                    None => None,
                }
            }
        }

        impl From<ErrorKind> for Error {
            fn from(kind: ErrorKind) -> Self {
                Error::new(kind)
            }
        }
    };
}
