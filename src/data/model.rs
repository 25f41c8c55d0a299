use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Header – the ordered field names shared by every record of one load
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    pub fn new(names: Vec<String>) -> Self {
        Header { names }
    }

    /// Position of `name` in the header, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the source file, values kept as raw text
// ---------------------------------------------------------------------------

/// A single data row: field name → raw text, in header order.
///
/// All records produced by one load share the same [`Header`], so the field
/// set is identical across a dataset. Records are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    header: Arc<Header>,
    values: Vec<String>,
}

impl Record {
    /// Build a record whose `values` are positionally aligned with `header`.
    pub fn new(header: Arc<Header>, values: Vec<String>) -> Self {
        Record { header, values }
    }

    /// Raw text of the named field.
    pub fn get(&self, field: &str) -> Option<&str> {
        let idx = self.header.position(field)?;
        self.values.get(idx).map(String::as_str)
    }

    /// `(field, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header
            .names()
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn field_names(&self) -> &[String] {
        self.header.names()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn header(&self) -> &Arc<Header> {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ColumnType – the target type of an extraction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
        };
        f.write_str(name)
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(ColumnType::Integer),
            "float" => Ok(ColumnType::Float),
            "str" | "text" => Ok(ColumnType::Text),
            other => Err(format!("unknown column type '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Scalar / Series – typed projection of one column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float(v) => Some(*v),
            Scalar::Integer(i) => Some(*i as f64),
            Scalar::Text(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A homogeneous column of converted values, one per source record.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Integer(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl Series {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Series::Integer(_) => ColumnType::Integer,
            Series::Float(_) => ColumnType::Float,
            Series::Text(_) => ColumnType::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Series::Integer(v) => v.len(),
            Series::Float(v) => v.len(),
            Series::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, idx: usize) -> Option<Scalar> {
        match self {
            Series::Integer(v) => v.get(idx).copied().map(Scalar::Integer),
            Series::Float(v) => v.get(idx).copied().map(Scalar::Float),
            Series::Text(v) => v.get(idx).cloned().map(Scalar::Text),
        }
    }

    /// Numeric view of the series; integers are widened, text has none.
    pub fn as_floats(&self) -> Option<Vec<f64>> {
        match self {
            Series::Integer(v) => Some(v.iter().map(|&i| i as f64).collect()),
            Series::Float(v) => Some(v.clone()),
            Series::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        let header = Arc::new(Header::new(vec![
            "time".to_string(),
            "mag".to_string(),
            "place".to_string(),
        ]));
        Record::new(
            header,
            vec![
                "2020-01-01T00:28:20.289Z".to_string(),
                "5.1".to_string(),
                "112 km SSE of Kokopo, Papua New Guinea".to_string(),
            ],
        )
    }

    #[test]
    fn record_lookup_by_name() {
        let rec = sample_record();
        assert_eq!(rec.get("mag"), Some("5.1"));
        assert_eq!(rec.get("depth"), None);
        assert_eq!(rec.len(), 3);
    }

    #[test]
    fn record_iterates_in_header_order() {
        let rec = sample_record();
        let names: Vec<&str> = rec.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["time", "mag", "place"]);
    }

    #[test]
    fn column_type_from_str_accepts_short_names() {
        assert_eq!("int".parse::<ColumnType>(), Ok(ColumnType::Integer));
        assert_eq!("Float".parse::<ColumnType>(), Ok(ColumnType::Float));
        assert_eq!("str".parse::<ColumnType>(), Ok(ColumnType::Text));
        assert!("bool".parse::<ColumnType>().is_err());
    }

    #[test]
    fn series_numeric_view() {
        let ints = Series::Integer(vec![1, 2]);
        assert_eq!(ints.as_floats(), Some(vec![1.0, 2.0]));
        assert_eq!(ints.get(1), Some(Scalar::Integer(2)));
        assert_eq!(Series::Text(vec!["a".into()]).as_floats(), None);
        assert_eq!(Series::Float(vec![]).column_type(), ColumnType::Float);
    }

    #[test]
    fn column_type_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&[ColumnType::Integer, ColumnType::Float, ColumnType::Text])
            .unwrap();
        assert_eq!(json, r#"["integer","float","text"]"#);

        let back: Vec<ColumnType> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, [ColumnType::Integer, ColumnType::Float, ColumnType::Text]);
        assert!(serde_json::from_str::<ColumnType>(r#""Float""#).is_err());
    }
}
