//! Errors surfaced by the command-line tools.

use linfit::LinearError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Linear(#[from] LinearError),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A data cell that is not a number. `row` counts data rows from 1.
    #[error("could not convert {value:?} in column {column:?} of row {row} to a number")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    /// A table that cannot be split into features and target.
    #[error("{0}")]
    Table(String),

    #[error("{0}")]
    Plot(String),
}

impl ToolError {
    /// Short name of the failure, printed before the message.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::Linear(inner) => match inner {
                LinearError::Untrained => "UntrainedModel",
                LinearError::DimensionMismatch { .. } => "DimensionMismatch",
                LinearError::EmptyData(_) => "EmptyData",
                LinearError::RaggedRows { .. } => "RaggedRows",
                LinearError::InvalidWeights(_) => "InvalidWeights",
                LinearError::Serialization(_) => "SerializationError",
                LinearError::Io(_) => "IoError",
            },
            ToolError::Csv(_) => "CsvError",
            ToolError::Io(_) => "IoError",
            ToolError::Parse { .. } => "ParseError",
            ToolError::Table(_) => "TableError",
            ToolError::Plot(_) => "PlotError",
        }
    }

    /// `<kind>: <message>`, the line printed before exiting.
    pub fn report(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}
