//! Trains a model on a CSV file and writes its weights.

use crate::data::CsvTable;
use crate::error::Result;
use clap::Parser;
use linfit::{FitOptions, LinearRegressor};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "regressor")]
#[command(about = "Run gradient descent on a CSV file")]
#[command(after_help = "The target variable is expected in the last column.")]
#[command(version)]
pub struct Args {
    /// Path of the CSV file to be processed
    pub file_path: PathBuf,

    /// Learning rate
    #[arg(short, long, default_value_t = 0.1)]
    pub alpha: f64,

    /// Number of iterations in gradient descent
    #[arg(short, long, default_value_t = 1000)]
    pub iteration: usize,

    /// Disable standard scaling in gradient descent
    #[arg(short, long)]
    pub no_scaling: bool,

    /// Where to write the weights
    #[arg(short, long, default_value = "weights.json")]
    pub output: PathBuf,
}

impl Args {
    pub fn fit_options(&self) -> FitOptions {
        FitOptions::new()
            .learning_rate(self.alpha)
            .iterations(self.iteration)
            .normalize(!self.no_scaling)
    }
}

/// Fits, prints the weights and saves them to `args.output`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<LinearRegressor> {
    let table = CsvTable::load(&args.file_path)?;
    let dataset = table.to_dataset()?;

    let mut model = LinearRegressor::new();
    model.fit_dataset(&dataset, &args.fit_options())?;

    writeln!(out, "weights {model:.4}")?;
    model.save_weights(&args.output)?;
    writeln!(
        out,
        "The results are written into \"{}\"",
        args.output.display()
    )?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linfit::WeightVector;
    use std::fs;

    #[test]
    fn test_cli_defaults() {
        let args = Args::try_parse_from(["regressor", "data.csv"]).unwrap();
        assert_eq!(args.alpha, 0.1);
        assert_eq!(args.iteration, 1000);
        assert!(!args.no_scaling);
        assert_eq!(args.output, PathBuf::from("weights.json"));
        assert!(args.fit_options().normalize);
    }

    #[test]
    fn test_cli_short_flags() {
        let args =
            Args::try_parse_from(["regressor", "d.csv", "-a", "0.5", "-i", "10", "-n", "-o", "w.json"])
                .unwrap();
        let opts = args.fit_options();
        assert_eq!(opts.learning_rate, 0.5);
        assert_eq!(opts.iterations, 10);
        assert!(!opts.normalize);
        assert_eq!(args.output, PathBuf::from("w.json"));
    }

    #[test]
    fn test_run_writes_weights() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let data = dir.path().join("data.csv");
        fs::write(&data, "x,y\n1,3\n2,5\n3,7\n4,9\n")?;
        let output = dir.path().join("weights.json");

        let args = Args::try_parse_from([
            "regressor".as_ref(),
            data.as_os_str(),
            "-o".as_ref(),
            output.as_os_str(),
        ])?;
        let mut out = Vec::new();
        let model = run(&args, &mut out)?;

        let saved = WeightVector::load_from_file(&output)?;
        assert_eq!(Some(saved.into_inner()), model.weights());

        let text = String::from_utf8(out)?;
        assert!(text.starts_with("weights [1.0000, 2.0000]"));
        assert!(text.contains("The results are written into"));
        Ok(())
    }

    #[test]
    fn test_run_constant_feature_fails() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let data = dir.path().join("data.csv");
        fs::write(&data, "x,y\n1,3\n1,5\n1,7\n")?;
        let output = dir.path().join("weights.json");

        let args = Args::try_parse_from([
            "regressor".as_ref(),
            data.as_os_str(),
            "-o".as_ref(),
            output.as_os_str(),
        ])?;
        let mut out = Vec::new();
        let err = run(&args, &mut out).unwrap_err();

        assert_eq!(err.kind(), "InvalidWeights");
        assert!(!output.exists());
        assert!(!String::from_utf8(out)?.contains("The results are written into"));
        Ok(())
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::try_parse_from([
            "regressor".as_ref(),
            dir.path().join("absent.csv").as_os_str(),
        ])
        .unwrap();
        let err = run(&args, &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), "IoError");
    }
}
