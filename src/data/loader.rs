use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use super::error::{DataError, Result};
use super::model::{Header, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every data row of a delimited text file.  Delimiter by extension.
///
/// * `.tsv` / `.tab` – tab separated
/// * anything else   – comma separated
///
/// The first line is the header. Each following line becomes one [`Record`]
/// in file order; a header-only file yields an empty vector.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let delimiter = match ext.as_str() {
        "tsv" | "tab" => b'\t',
        _ => b',',
    };

    let file = File::open(path).map_err(|source| DataError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(file, delimiter, path)?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Same as [`load`] for an already open source.
pub fn load_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Record>> {
    read_records(reader, delimiter, Path::new("<reader>"))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

fn read_records<R: Read>(source: R, delimiter: u8, path: &Path) -> Result<Vec<Record>> {
    // Row width is checked here so a mismatch reports expected/found counts.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(source);

    let names: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if names.iter().all(|n| n.trim().is_empty()) {
        return Err(DataError::Parse {
            path: path.to_path_buf(),
            line: 1,
            reason: "header line is empty".to_string(),
        });
    }

    let header = Arc::new(Header::new(names));
    let mut records = Vec::new();

    for result in reader.records() {
        let row = result.map_err(|e| csv_error(path, e))?;

        if row.len() != header.len() {
            return Err(DataError::Parse {
                path: path.to_path_buf(),
                line: row.position().map(|p| p.line()).unwrap_or(0),
                reason: format!("expected {} fields, found {}", header.len(), row.len()),
            });
        }

        let values = row.iter().map(|v| v.to_string()).collect();
        records.push(Record::new(Arc::clone(&header), values));
    }

    Ok(records)
}

fn csv_error(path: &Path, err: csv::Error) -> DataError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DataError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        _ => DataError::Parse {
            path: path.to_path_buf(),
            line,
            reason,
        },
    }
}
