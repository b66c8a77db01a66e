//! The config module is responsible for managing everything related to the configuration
//! file.
//!
//! The configuration file is an optional `.spacename.toml` file stored on the root folder
//! of the event spaces. It holds the defaults used by the rename operation, these
//! defaults can be later overriden from the command line.

use log::{debug, info, trace};
use serde_derive::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

mod errors;

pub use self::errors::{Error, ErrorKind};
use crate::ops::rename::{RenameOptions, DEFAULT_EXCLUDE};

/// Settings for the rename of a root folder
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// When set, the renames are only reported
    pub dry_run: bool,
    /// Files containing this pattern in their name are left untouched
    pub exclude: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dry_run: true,
            exclude: DEFAULT_EXCLUDE.to_string(),
        }
    }
}

impl Config {
    /// Represents the relative path to the configuration file from a given root directory
    pub const SAVE_PATH: &'static str = ".spacename.toml";

    /// Loads the configuration present inside the folder P. If the folder has no
    /// configuration file the default configuration is returned.
    pub fn load<P: AsRef<Path>>(folder: P) -> Result<Self, Error> {
        let file = folder.as_ref().join(Self::SAVE_PATH);

        match fs::read_to_string(&file) {
            Ok(contents) => Self::parse(&contents),
            Err(ref err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No config file found on '{}'", file.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Loads the configuration from the given file. Unlike `load`, the file must exist.
    pub fn load_from<P: AsRef<Path>>(file: P) -> Result<Self, Error> {
        let file = file.as_ref();
        debug!("Config file location: '{}'", file.display());

        Self::parse(&fs::read_to_string(file)?)
    }

    fn parse(contents: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(contents)?;
        trace!("{:#?}", config);

        config.validate()?;
        Ok(config)
    }

    /// Checks that the values of the configuration can be used by the rename operation
    pub fn validate(&self) -> Result<(), Error> {
        if self.exclude.is_empty() {
            return Err(Error::with_cause(
                ErrorKind::InvalidValue,
                "the exclusion pattern can't be empty",
            ));
        }

        Ok(())
    }

    /// Saves the configuration on the default SAVE_PATH of the given folder
    pub fn save<P: AsRef<Path>>(&self, folder: P) -> Result<(), Error> {
        self.save_to(folder.as_ref().join(Self::SAVE_PATH))
    }

    /// Saves the configuration on a custom file path
    pub fn save_to<P: AsRef<Path>>(&self, file: P) -> Result<(), Error> {
        let file = file.as_ref();
        debug!("Config file location: '{}'", file.display());

        let contents = toml::to_string_pretty(self)
            .map_err(|err| Error::with_cause(ErrorKind::InvalidData, err))?;
        write!(File::create(file)?, "{}", contents)?;

        info!("Config file saved on '{}'", file.display());
        Ok(())
    }

    /// Translates the configuration into the modifiers of the rename operation
    pub fn options(&self) -> RenameOptions {
        RenameOptions::with_exclude(self.exclude.clone())
    }
}
