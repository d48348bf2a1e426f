
use thiserror::Error;

/// Errors raised while turning raw input into triples, or while querying a network.
///
/// Every adapter error is returned before any matrix is allocated, no partial
/// processing happens on invalid input.
#[derive(Debug, Error)]
pub enum EmbedError {

    #[error("input must be a dictionary of columns or a table of records, got {found}")]
    InputType { found: String },

    #[error("dictionary values must be sequences, got types {found:?} instead")]
    ValueType { found: Vec<String> },

    #[error("column '{column}' holds {found} where a label (integer or string) is expected")]
    LabelType { column: String, found: String },

    #[error("row {row} is {found}, a record must be an array of 2 or 3 cells")]
    RecordType { row: usize, found: String },

    #[error("column '{column}' holds integer {value}, outside the 64-bit signed label range")]
    LabelRange { column: String, value: String },

    #[error("column '{column}' mixes {first} and {found} labels")]
    MixedLabels { column: String, first: &'static str, found: &'static str },

    #[error("expected 2 or 3 columns (category, entity[, value]), got {found}")]
    ColumnCount { found: usize },

    #[error("column '{column}' has {found} entries, expected {expected}")]
    ColumnLength { column: String, expected: usize, found: usize },

    #[error("row {row}: value {value} must be a finite non-negative number")]
    InvalidValue { row: usize, value: String },

    #[error("network of {rows}x{cols} does not match {categories} category labels")]
    ShapeMismatch { rows: usize, cols: usize, categories: usize },

    #[error("category labels must be strictly increasing, position {position} is not")]
    UnsortedLabels { position: usize },

    #[error("category '{label}' is not in the network")]
    UnknownLabel { label: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Errors raised while reading the json configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {

    #[error("input should be a path to json file only")]
    Usage,

    #[error("cannot open json file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read json file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{key} was not supplied through json")]
    MissingKey { key: &'static str },

    #[error("given {key} is not {expected}")]
    WrongType { key: &'static str, expected: &'static str },
}
