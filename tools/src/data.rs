//! CSV loading: a header row, then numeric rows whose last column is the target.

use crate::error::{Result, ToolError};
use linfit::InMemoryDataset;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A fully numeric table read from CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl CsvTable {
    /// Reads the CSV file at `path`.
    ///
    /// # Errors
    /// - [`ToolError::Io`] if the file cannot be opened.
    /// - [`ToolError::Csv`] on malformed CSV, including rows of unequal length.
    /// - [`ToolError::Parse`] if a cell is not a number.
    /// - [`ToolError::Table`] if there are fewer than two columns.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} rows x {} columns from {}",
            table.n_rows(),
            table.n_columns(),
            path.display()
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if headers.len() < 2 {
            return Err(ToolError::Table(format!(
                "expected at least one feature column and a target column, found {} column(s)",
                headers.len()
            )));
        }

        let mut rows = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let row = record
                .iter()
                .zip(&headers)
                .map(|(cell, column)| {
                    cell.parse::<f64>().map_err(|_| ToolError::Parse {
                        row: i + 1,
                        column: column.clone(),
                        value: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.headers.len()
    }

    /// Names of every column but the last.
    pub fn feature_names(&self) -> &[String] {
        &self.headers[..self.headers.len() - 1]
    }

    pub fn target_name(&self) -> &str {
        &self.headers[self.headers.len() - 1]
    }

    /// Values of column `j`, or `None` if out of range.
    pub fn column(&self, j: usize) -> Option<Vec<f64>> {
        (j < self.n_columns()).then(|| self.rows.iter().map(|row| row[j]).collect())
    }

    pub fn target(&self) -> Vec<f64> {
        let last = self.n_columns() - 1;
        self.rows.iter().map(|row| row[last]).collect()
    }

    pub fn features(&self) -> Vec<Vec<f64>> {
        let last = self.n_columns() - 1;
        self.rows.iter().map(|row| row[..last].to_vec()).collect()
    }

    /// Splits into features and target.
    ///
    /// # Errors
    /// [`ToolError::Linear`] with `EmptyData` if the table has no data rows.
    pub fn to_dataset(&self) -> Result<InMemoryDataset> {
        Ok(InMemoryDataset::new(self.features(), self.target())?)
    }
}
