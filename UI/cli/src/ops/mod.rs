mod rename;

pub use self::rename::Rename;
