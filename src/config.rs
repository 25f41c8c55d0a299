use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Comparison settings
// ---------------------------------------------------------------------------

/// One input catalogue and the label used for it in titles and headings.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSource {
    pub label: String,
    pub path: PathBuf,
}

impl DatasetSource {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        DatasetSource {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Everything a comparison run needs. Built from constants; there is no
/// runtime override.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonConfig {
    /// Earlier dataset (subtracted from).
    pub baseline: DatasetSource,
    /// Later dataset.
    pub comparison: DatasetSource,
    pub magnitude_column: String,
    pub depth_column: String,
    /// Where chart images are written.
    pub output_dir: PathBuf,
    /// Open rendered charts in the platform viewer.
    pub display_charts: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            baseline: DatasetSource::new("2020", "earthquakes-2020.csv"),
            comparison: DatasetSource::new("2021", "earthquakes-2021.csv"),
            magnitude_column: "mag".to_string(),
            depth_column: "depth".to_string(),
            output_dir: PathBuf::from("."),
            display_charts: true,
        }
    }
}

impl ComparisonConfig {
    /// e.g. `2021 - 2020 Earthquakes`
    pub fn difference_title(&self) -> String {
        format!(
            "{} - {} Earthquakes",
            self.comparison.label, self.baseline.label
        )
    }

    /// e.g. `2021 Depth vs Magnitude`
    pub fn scatter_title(&self) -> String {
        format!("{} Depth vs Magnitude", self.comparison.label)
    }
}
