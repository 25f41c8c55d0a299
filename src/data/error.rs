use std::path::PathBuf;

use thiserror::Error;

use super::model::ColumnType;

/// Errors raised while loading records or extracting typed series.
#[derive(Debug, Error)]
pub enum DataError {
    /// Input file missing or unreadable.
    #[error("cannot open {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header and data rows do not line up, or the text is not valid CSV.
    #[error("{path}, line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// A raw field value could not be converted to the requested type.
    #[error("row {row}: cannot convert {field} value '{value}' to {target}")]
    Conversion {
        row: usize,
        field: String,
        value: String,
        target: ColumnType,
    },

    #[error("row {row}: no field named '{field}'")]
    MissingField { row: usize, field: String },
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_error_names_row_and_value() {
        let err = DataError::Conversion {
            row: 3,
            field: "mag".to_string(),
            value: "n/a".to_string(),
            target: ColumnType::Float,
        };
        assert_eq!(
            err.to_string(),
            "row 3: cannot convert mag value 'n/a' to float"
        );
    }

    #[test]
    fn parse_error_names_file_and_line() {
        let err = DataError::Parse {
            path: PathBuf::from("quakes.csv"),
            line: 7,
            reason: "expected 3 fields, found 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "quakes.csv, line 7: expected 3 fields, found 2"
        );
    }
}
