use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::{info, warn};

use crate::chart::{self, BarChart, ScatterChart};
use crate::config::{ComparisonConfig, DatasetSource};
use crate::data::category::{categorize, Category, CategoryCounts};
use crate::data::extract::extract_floats;
use crate::data::loader::load;
use crate::data::model::Record;

// ---------------------------------------------------------------------------
// Two-year comparison workflow
// ---------------------------------------------------------------------------

/// Magnitude summary of one dataset.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub label: String,
    pub magnitudes: Vec<f64>,
    pub counts: CategoryCounts,
}

/// Everything computed before any chart is drawn.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub baseline: DatasetSummary,
    pub comparison: DatasetSummary,
    /// Per-category change, comparison minus baseline.
    pub difference: Vec<(Category, i64)>,
    /// Depth/magnitude pairs of the comparison dataset with both values finite.
    pub scatter: ScatterPoints,
}

/// Paired scatter inputs, always the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterPoints {
    pub depths: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl ScatterPoints {
    /// Keep the pairs whose depth and magnitude are both finite.
    pub fn finite_pairs(depths: &[f64], magnitudes: &[f64]) -> Self {
        let (depths, magnitudes) = depths
            .iter()
            .zip(magnitudes.iter())
            .filter(|(d, m)| d.is_finite() && m.is_finite())
            .map(|(&d, &m)| (d, m))
            .unzip();
        ScatterPoints { depths, magnitudes }
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ChartPaths {
    pub bar: PathBuf,
    pub scatter: PathBuf,
}

/// Load, categorise and diff both datasets, printing each frequency table.
///
/// Nothing is rendered here, so any input error surfaces before a chart
/// file is touched.
pub fn prepare(config: &ComparisonConfig) -> Result<Comparison> {
    let baseline = summarize(&config.baseline, &config.magnitude_column)?;
    println!();
    let comparison_records =
        load(&config.comparison.path).context("loading comparison catalogue")?;
    let comparison = summarize_records(
        &config.comparison,
        &comparison_records,
        &config.magnitude_column,
    )?;

    let depths = extract_floats(&comparison_records, &config.depth_column)
        .with_context(|| format!("reading '{}' column", config.depth_column))?;
    let scatter = ScatterPoints::finite_pairs(&depths, &comparison.magnitudes);
    if scatter.len() < depths.len() {
        warn!(
            "skipping {} rows with a non-finite depth or magnitude",
            depths.len() - scatter.len()
        );
    }
    ensure!(
        !scatter.is_empty(),
        "{} has no records to plot",
        config.comparison.path.display()
    );

    let difference = baseline.counts.difference(&comparison.counts);

    Ok(Comparison {
        baseline,
        comparison,
        difference,
        scatter,
    })
}

/// Draw the difference bar chart and the depth/magnitude scatter chart.
pub fn render(comparison: &Comparison, config: &ComparisonConfig) -> Result<ChartPaths> {
    let labels: Vec<&str> = comparison
        .difference
        .iter()
        .map(|(c, _)| c.label())
        .collect();
    let values: Vec<f64> = comparison
        .difference
        .iter()
        .map(|&(_, d)| d as f64)
        .collect();

    let bar = BarChart::new(config.difference_title())
        .y_desc("Change in number of earthquakes")
        .render(&labels, &values, &config.output_dir)
        .context("rendering bar chart")?;
    show(&bar, config);

    let scatter = ScatterChart::new(config.scatter_title())
        .x_desc("Depth (km)")
        .y_desc("Magnitude")
        .render(
            &comparison.scatter.depths,
            &comparison.scatter.magnitudes,
            &config.output_dir,
        )
        .context("rendering scatter chart")?;
    show(&scatter, config);

    Ok(ChartPaths { bar, scatter })
}

/// Full run: [`prepare`] then [`render`].
pub fn run(config: &ComparisonConfig) -> Result<ChartPaths> {
    let comparison = prepare(config)?;
    info!(
        "{} vs {}: {:?}",
        comparison.comparison.label, comparison.baseline.label, comparison.difference
    );
    render(&comparison, config)
}

fn summarize(source: &DatasetSource, magnitude_column: &str) -> Result<DatasetSummary> {
    let records = load(&source.path).context("loading baseline catalogue")?;
    summarize_records(source, &records, magnitude_column)
}

fn summarize_records(
    source: &DatasetSource,
    records: &[Record],
    magnitude_column: &str,
) -> Result<DatasetSummary> {
    let magnitudes = extract_floats(records, magnitude_column)
        .with_context(|| format!("reading '{magnitude_column}' from {}", source.path.display()))?;

    println!("{} Earthquakes:", source.label);
    let counts = categorize(&magnitudes, true);

    Ok(DatasetSummary {
        label: source.label.clone(),
        magnitudes,
        counts,
    })
}

fn show(path: &Path, config: &ComparisonConfig) {
    if config.display_charts {
        chart::display(path);
    }
}
