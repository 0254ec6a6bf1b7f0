//! Command-line front ends for `linfit`: `regressor` trains and saves weights,
//! `estimator` answers price queries interactively and `analyzer` scores and
//! plots a saved model against a data set.

pub mod analyzer;
pub mod data;
pub mod error;
pub mod estimator;
pub mod logging;
pub mod plot;
pub mod regressor;
pub mod stats;

pub use error::{Result, ToolError};

/// Prints `<kind>: <message>` to stderr and exits with status 1 on failure.
pub fn exit_on_error<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{}", err.report());
            std::process::exit(1);
        }
    }
}
