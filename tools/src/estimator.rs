//! Interactive price estimation from a saved weight file.

use crate::error::Result;
use clap::Parser;
use linfit::{LinearRegressor, Tensor1D};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const RULE: &str = "====================================================";

#[derive(Parser, Debug)]
#[command(name = "estimator")]
#[command(about = "Estimate the price for a given mileage")]
#[command(version)]
pub struct Args {
    /// Path of the JSON file containing the weights
    pub file_path: PathBuf,

    /// Name of the feature asked for at the prompt
    #[arg(long, default_value = "mileage")]
    pub label: String,
}

/// Loads the model named by `args`.
pub fn load(args: &Args) -> Result<LinearRegressor> {
    Ok(LinearRegressor::load_weights(&args.file_path)?)
}

/// Prompts on `out` and answers every number read from `input` until `exit` or EOF.
pub fn interact<R: BufRead, W: Write>(
    model: &LinearRegressor,
    label: &str,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "The model has been successfully loaded.")?;
    writeln!(out, "[Type \"exit\" to terminate the program.]")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Please enter the {label} to see the estimated price,")?;

    let mut line = String::new();
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("exit") {
            break;
        }

        match answer.parse::<f64>() {
            Ok(value) => {
                let price = model.predict_one(&Tensor1D::new(vec![value]))?;
                writeln!(out, "price: {price}")?;
            }
            Err(_) => writeln!(out, "could not convert {answer:?} to a number")?,
        }
    }
    Ok(())
}
