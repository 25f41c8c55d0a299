use std::str::FromStr;

use super::error::{DataError, Result};
use super::model::{ColumnType, Record, Series};

/// Project `field` across `records`, converting each raw value to `column_type`.
///
/// The output has one entry per record, in record order. The first value
/// that fails to convert aborts the whole extraction.
pub fn extract(records: &[Record], field: &str, column_type: ColumnType) -> Result<Series> {
    let series = match column_type {
        ColumnType::Integer => Series::Integer(parse_column(records, field, column_type)?),
        ColumnType::Float => Series::Float(parse_column(records, field, column_type)?),
        ColumnType::Text => Series::Text(
            raw_values(records, field)
                .map(|item| item.map(|(_, raw)| raw.to_string()))
                .collect::<Result<_>>()?,
        ),
    };
    Ok(series)
}

/// Shorthand for a float column, the common case for magnitude and depth.
pub fn extract_floats(records: &[Record], field: &str) -> Result<Vec<f64>> {
    parse_column(records, field, ColumnType::Float)
}

fn parse_column<T: FromStr>(
    records: &[Record],
    field: &str,
    target: ColumnType,
) -> Result<Vec<T>> {
    raw_values(records, field)
        .map(|item| {
            let (row, raw) = item?;
            raw.trim().parse::<T>().map_err(|_| DataError::Conversion {
                row,
                field: field.to_string(),
                value: raw.to_string(),
                target,
            })
        })
        .collect()
}

fn raw_values<'a>(
    records: &'a [Record],
    field: &'a str,
) -> impl Iterator<Item = Result<(usize, &'a str)>> + 'a {
    records.iter().enumerate().map(move |(row, rec)| {
        rec.get(field)
            .map(|raw| (row, raw))
            .ok_or_else(|| DataError::MissingField {
                row,
                field: field.to_string(),
            })
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::loader::load_from_reader;
    use crate::data::model::Header;

    const QUAKES: &str = "\
mag,depth,nst,magType
5.1,40.24,,mb
4.6,32.93,17,mb
4.5, 10.0 ,3,mww
";

    fn records() -> Vec<Record> {
        load_from_reader(QUAKES.as_bytes(), b',').unwrap()
    }

    #[test]
    fn text_is_identity() {
        let recs = records();
        let series = extract(&recs, "magType", ColumnType::Text).unwrap();
        assert_eq!(
            series,
            Series::Text(vec!["mb".into(), "mb".into(), "mww".into()])
        );

        let raw: Vec<String> = recs.iter().map(|r| r.get("depth").unwrap().to_string()).collect();
        assert_eq!(extract(&recs, "depth", ColumnType::Text).unwrap(), Series::Text(raw));
    }

    #[test]
    fn floats_in_record_order() {
        let series = extract(&records(), "mag", ColumnType::Float).unwrap();
        assert_eq!(series, Series::Float(vec![5.1, 4.6, 4.5]));
    }

    #[test]
    fn surrounding_whitespace_is_ignored_for_numbers() {
        let depths = extract_floats(&records(), "depth").unwrap();
        assert_eq!(depths, vec![40.24, 32.93, 10.0]);
    }

    #[test]
    fn empty_value_fails_integer_conversion() {
        let err = extract(&records(), "nst", ColumnType::Integer).unwrap_err();
        match err {
            DataError::Conversion {
                row,
                field,
                value,
                target,
            } => {
                assert_eq!(row, 0);
                assert_eq!(field, "nst");
                assert_eq!(value, "");
                assert_eq!(target, ColumnType::Integer);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fractional_text_is_not_an_integer() {
        let err = extract(&records(), "mag", ColumnType::Integer).unwrap_err();
        assert!(matches!(err, DataError::Conversion { row: 0, .. }));
    }

    #[test]
    fn first_bad_row_is_reported() {
        let recs = load_from_reader("mag\n5.1\n4.6\nunknown\n4.7\nbad\n".as_bytes(), b',').unwrap();
        let err = extract(&recs, "mag", ColumnType::Float).unwrap_err();
        assert!(matches!(err, DataError::Conversion { row: 2, ref value, .. } if value == "unknown"));
    }

    #[test]
    fn integers_parse() {
        let recs = load_from_reader("gap\n74\n45\n".as_bytes(), b',').unwrap();
        let series = extract(&recs, "gap", ColumnType::Integer).unwrap();
        assert_eq!(series, Series::Integer(vec![74, 45]));
    }

    #[test]
    fn no_records_gives_empty_series() {
        let series = extract(&[], "mag", ColumnType::Float).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.column_type(), ColumnType::Float);
    }

    #[test]
    fn unknown_field_is_reported() {
        let err = extract(&records(), "magnitude", ColumnType::Float).unwrap_err();
        assert!(matches!(err, DataError::MissingField { row: 0, .. }));
    }

    #[test]
    fn foreign_record_without_field_is_reported() {
        let mut recs = records();
        let other = Arc::new(Header::new(vec!["depth".to_string()]));
        recs.push(Record::new(other, vec!["12.0".to_string()]));

        let err = extract(&recs, "mag", ColumnType::Float).unwrap_err();
        assert!(matches!(err, DataError::MissingField { row: 3, .. }));
    }
}
