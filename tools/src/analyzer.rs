//! Scores a saved model on a CSV file and plots it against one feature.

use crate::data::CsvTable;
use crate::error::{Result, ToolError};
use crate::plot;
use crate::stats::Summary;
use clap::Parser;
use linfit::LinearRegressor;
use std::io::Write;
use std::path::PathBuf;

const RULE: &str = "====================================================";

#[derive(Parser, Debug)]
#[command(name = "analyzer")]
#[command(about = "Score and visualize a linear model on a given data set")]
#[command(version)]
pub struct Args {
    /// Path of the CSV file containing raw data
    pub data_file: PathBuf,

    /// Path of the JSON file containing the weights
    pub weights_file: PathBuf,

    /// Where to write the SVG chart
    #[arg(long, default_value = "analysis.svg")]
    pub plot: PathBuf,

    /// Index of the feature column used as the horizontal axis
    #[arg(long, default_value_t = 0)]
    pub column: usize,

    /// Skip the chart
    #[arg(long)]
    pub no_plot: bool,
}

/// Loads the data set and the model named by `args`.
pub fn load(args: &Args) -> Result<(CsvTable, LinearRegressor)> {
    let table = CsvTable::load(&args.data_file)?;
    let model = LinearRegressor::load_weights(&args.weights_file)?;
    Ok((table, model))
}

/// Prints target statistics, weights and errors, then renders the chart.
pub fn report<W: Write>(
    args: &Args,
    table: &CsvTable,
    model: &LinearRegressor,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "The data and the model have been successfully loaded.")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Observation Statistics")?;
    writeln!(out, "{}", Summary::describe(&table.target()))?;
    writeln!(out, "Name: {}", table.target_name())?;
    writeln!(out, "{RULE}")?;

    let dataset = table.to_dataset()?;
    let x = dataset.features();
    let y = dataset.targets();
    let mse = model.mse(&x, &y)?;

    writeln!(out, "{:15} : {model:.2}", "Weights")?;
    writeln!(out, "{:15} : {mse:.2}", "MSE")?;
    writeln!(out, "{:15} : {:.2}", "SQRT MSE", mse.sqrt())?;

    if args.no_plot {
        return Ok(());
    }

    let feature = table.feature_names().get(args.column).ok_or_else(|| {
        ToolError::Table(format!(
            "column {} is out of range for {} feature column(s)",
            args.column,
            dataset.n_features()
        ))
    })?;
    let xs = dataset
        .column(args.column)
        .ok_or_else(|| ToolError::Table(format!("column {} is out of range", args.column)))?;
    let predicted = model.predict(&x)?.to_vec();

    plot::draw_fit(&args.plot, feature, &xs, dataset.target_values(), &predicted)?;
    writeln!(out, "The plot is written into \"{}\"", args.plot.display())?;
    Ok(())
}
