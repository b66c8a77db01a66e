#![allow(clippy::new_ret_no_self)]

//! This is the CLI implementation for the spacename application.
//!
//! The core of the application lives on the lib directory. This file and its modules job
//! is to parse the command line arguments and transform them into the proper calls to the
//! core.

use libc::EXIT_FAILURE;
use log::error;
use std::error::Error;
use std::process::exit;

mod errors;
mod ops;
mod parser;

pub type AppResult<T> = Result<T, crate::errors::Error>;

fn main() {
    let app = parser::parse();

    if logger::init(app.filter_level()).is_err() {
        eprintln!("Unable to start the logging implementation");
        exit(EXIT_FAILURE);
    }

    if let Err(error) = app.run() {
        error!("{}", error);

        if app.backtrace() {
            let mut source = error.source();
            while let Some(cause) = source {
                error!("{}", cause);
                source = cause.source();
            }
        }

        exit(EXIT_FAILURE);
    }
}
