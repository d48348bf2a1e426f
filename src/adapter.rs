
// imports
use crate::error::EmbedError;
use crate::labels::Label;
use crate::matrix::Triple;

use serde_json::{Map, Value};
use std::io::Read;
use tracing::debug;


// the json type of a value, used to report what did not fit
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


pub struct Adapter {}

impl Adapter {

    // every accepted input shape ends up as three columns: categories, entities and (optional) values.
    // they are validated here in full before a single triple is handed over, so that a bad input
    // never reaches the matrix stages.

    /// Converts json input into triples.
    ///
    /// Accepted shapes are a dictionary of columns (`{"category": [..], "entity": [..], "value": [..]}`,
    /// columns taken in their written order) and a table of records (`[[c, e], [c, e, v], ..]`).
    /// A missing value defaults to 1.
    pub fn from_json(data: &Value) -> Result<Vec<Triple<Label, Label>>, EmbedError> {
        match data {
            Value::Object(columns) => Self::from_columns(columns),
            Value::Array(rows) => Self::from_records(rows),
            other => Err(EmbedError::InputType { found: json_type(other).to_string() })
        }
    }

    fn from_columns(columns: &Map<String, Value>) -> Result<Vec<Triple<Label, Label>>, EmbedError> {

        if !columns.values().all(|col| col.is_array()) {
            let found = columns.values().map(|col| json_type(col).to_string()).collect();
            return Err(EmbedError::ValueType { found });
        }

        if columns.len() < 2 || columns.len() > 3 {
            return Err(EmbedError::ColumnCount { found: columns.len() });
        }

        let names: Vec<&String> = columns.keys().collect();
        let cells: Vec<Vec<&Value>> = columns
        .values()
        .map(|col| col.as_array().map(|c| c.iter().collect()).unwrap_or_default())
        .collect();

        let expected = cells[0].len();
        for (name, col) in names.iter().zip(cells.iter()) {
            if col.len() != expected {
                return Err(EmbedError::ColumnLength { column: name.to_string(), expected, found: col.len() });
            }
        }

        let categories = Self::json_labels(names[0], &cells[0])?;
        let entities = Self::json_labels(names[1], &cells[1])?;
        let values = match cells.get(2) {
            Some(col) => Self::json_values(col)?,
            None => vec![1.0; expected]
        };

        Ok(Self::assemble(categories, entities, values))
    }

    fn from_records(rows: &[Value]) -> Result<Vec<Triple<Label, Label>>, EmbedError> {

        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, row)| !row.is_array()) {
            return Err(EmbedError::RecordType { row, found: json_type(bad).to_string() });
        }

        let mut categories: Vec<&Value> = Vec::with_capacity(rows.len());
        let mut entities: Vec<&Value> = Vec::with_capacity(rows.len());
        let mut values: Vec<f64> = Vec::with_capacity(rows.len());

        for (row_i, row) in rows.iter().enumerate() {
            let row = row.as_array().map(|r| r.as_slice()).unwrap_or_default();
            match row {
                [category, entity] => {
                    categories.push(category);
                    entities.push(entity);
                    values.push(1.0);
                },
                [category, entity, value] => {
                    categories.push(category);
                    entities.push(entity);
                    values.push(Self::json_value(row_i, value)?);
                },
                _ => return Err(EmbedError::ColumnCount { found: row.len() })
            }
        }

        let categories = Self::json_labels("0", &categories)?;
        let entities = Self::json_labels("1", &entities)?;
        Ok(Self::assemble(categories, entities, values))
    }

    /// Converts a csv table into triples.
    ///
    /// The first row is a header; the table has 2 columns (category, entity) or 3
    /// (category, entity, value). A label column is read as integers only when every
    /// cell spells an integer exactly, otherwise all of its cells stay text.
    pub fn from_csv<R: Read>(reader: R) -> Result<Vec<Triple<Label, Label>>, EmbedError> {

        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
        let names: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        if names.len() < 2 || names.len() > 3 {
            return Err(EmbedError::ColumnCount { found: names.len() });
        }

        let mut categories: Vec<String> = Vec::new();
        let mut entities: Vec<String> = Vec::new();
        let mut values = Vec::new();

        for (row_i, record) in rdr.records().enumerate() {
            let record = record?;
            categories.push(record[0].to_string());
            entities.push(record[1].to_string());
            let value = match record.get(2) {
                Some(cell) => match cell.parse::<f64>() {
                    Ok(v) => Self::check_value(row_i, v)?,
                    Err(_) => return Err(EmbedError::InvalidValue { row: row_i, value: cell.to_string() })
                },
                None => 1.0
            };
            values.push(value);
        }

        Ok(Self::assemble(Self::csv_labels(categories), Self::csv_labels(entities), values))
    }

    // one kind per column, so "0101" next to "101" keeps both as distinct text labels
    fn csv_labels(cells: Vec<String>) -> Vec<Label> {

        let ints: Option<Vec<i64>> = cells.iter().map(|cell| Label::canonical_int(cell)).collect();
        match ints {
            Some(ints) if !ints.is_empty() => ints.into_iter().map(Label::Int).collect(),
            _ => cells.into_iter().map(Label::Text).collect(),
        }
    }

    fn json_labels(column: &str, cells: &[&Value]) -> Result<Vec<Label>, EmbedError> {

        let mut labels = Vec::with_capacity(cells.len());
        for cell in cells {
            let label = match cell {
                Value::String(s) => Label::Text(s.to_owned()),
                Value::Number(n) if n.is_i64() || n.is_u64() => match n.as_i64() {
                    Some(i) => Label::Int(i),
                    None => return Err(EmbedError::LabelRange { column: column.to_string(), value: n.to_string() })
                },
                other => return Err(EmbedError::LabelType { column: column.to_string(), found: json_type(other).to_string() })
            };
            labels.push(label);
        }

        Self::check_uniform(column, &labels)?;
        Ok(labels)
    }

    fn json_values(cells: &[&Value]) -> Result<Vec<f64>, EmbedError> {
        cells.iter().enumerate().map(|(row, cell)| Self::json_value(row, cell)).collect()
    }

    fn json_value(row: usize, cell: &Value) -> Result<f64, EmbedError> {
        match cell.as_f64() {
            Some(v) => Self::check_value(row, v),
            None => Err(EmbedError::InvalidValue { row, value: cell.to_string() })
        }
    }

    fn check_value(row: usize, value: f64) -> Result<f64, EmbedError> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(EmbedError::InvalidValue { row, value: value.to_string() })
        }
    }

    // labels of one axis must all be integers or all be strings
    fn check_uniform(column: &str, labels: &[Label]) -> Result<(), EmbedError> {

        if let Some(first) = labels.first() {
            if let Some(other) = labels.iter().find(|l| l.kind() != first.kind()) {
                return Err(EmbedError::MixedLabels { column: column.to_string(), first: first.kind(), found: other.kind() });
            }
        }
        Ok(())
    }

    fn assemble(categories: Vec<Label>, entities: Vec<Label>, values: Vec<f64>) -> Vec<Triple<Label, Label>> {

        let triples: Vec<Triple<Label, Label>> = categories
        .into_iter()
        .zip(entities)
        .zip(values)
        .map(|((category, entity), value)| Triple::new(category, entity, value))
        .collect();

        debug!(records = triples.len(), "adapted input records");
        triples
    }
}
