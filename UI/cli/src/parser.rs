//! This file contains the command line parser wrapper.
//!
//! The wrappers job is to call the command line parser and create a model of the operation
//! that the user wishes to perform.
use clap::{crate_authors, crate_description, crate_version, load_yaml, App, ArgMatches};

use super::ops;
use crate::AppResult;

pub fn parse() -> AppInfo {
    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml)
        .author(crate_authors!())
        .version(crate_version!())
        .about(crate_description!())
        .get_matches();

    AppInfo::new(&matches)
}

#[derive(Debug)]
pub struct AppInfo {
    trace: bool,
    verbose: bool,
    operation: ops::Rename,
}

impl AppInfo {
    fn new(matches: &ArgMatches<'_>) -> Self {
        Self {
            trace: matches.is_present("backtrace"),
            verbose: matches.is_present("verbose"),
            operation: ops::Rename::build(matches),
        }
    }

    pub fn run(&self) -> AppResult<()> {
        self.operation.run()
    }

    pub fn backtrace(&self) -> bool {
        self.trace
    }

    pub fn filter_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
