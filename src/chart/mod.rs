//! Chart rendering to PNG files.
//!
//! Each chart builder owns its own drawing area for the duration of one
//! `render` call, so consecutive charts never share plotting state.

pub mod bar;
pub mod scatter;

use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

pub use bar::BarChart;
pub use scatter::ScatterChart;

/// Output resolution of every chart.
pub const CHART_SIZE: (u32, u32) = (1200, 800);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("nothing to plot")]
    EmptyData,

    #[error("paired sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to draw chart: {0}")]
    Drawing(String),

    #[error("failed to prepare output directory: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, ChartError>;

/// `<dir>/<prefix>-<title>.png`, with path separators in the title replaced.
pub fn output_path(output_dir: &Path, prefix: &str, title: &str) -> PathBuf {
    let safe_title: String = title
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    output_dir.join(format!("{prefix}-{safe_title}.png"))
}

/// Hand a rendered chart to the platform viewer without waiting for it.
pub fn display(path: &Path) {
    match open::that_detached(path) {
        Ok(()) => debug!("opened {} in viewer", path.display()),
        Err(e) => warn!("could not open {} in a viewer: {e}", path.display()),
    }
}

fn check_pairs(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(ChartError::LengthMismatch { left, right });
    }
    if left == 0 {
        return Err(ChartError::EmptyData);
    }
    Ok(())
}

fn check_finite(values: &[f64], what: &str) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(ChartError::InvalidData(format!(
            "{what}[{i}] is not a finite number"
        ))),
        None => Ok(()),
    }
}

/// Axis range covering `values` (and `0.0` when `include_zero`), padded by 5%.
fn padded_range(values: &[f64], include_zero: bool) -> std::ops::Range<f64> {
    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = span * 0.05;
    (lo - pad)..(hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_combines_prefix_and_title() {
        let path = output_path(Path::new("out"), "barplot", "2021 - 2020 Earthquakes");
        assert_eq!(path, Path::new("out").join("barplot-2021 - 2020 Earthquakes.png"));
    }

    #[test]
    fn output_path_stays_in_directory() {
        let path = output_path(Path::new("out"), "scatterplot", "depth/magnitude");
        assert_eq!(path.parent(), Some(Path::new("out")));
        assert!(path.ends_with("scatterplot-depth_magnitude.png"));
    }

    #[test]
    fn pairs_must_match_and_be_non_empty() {
        assert!(matches!(
            check_pairs(3, 2),
            Err(ChartError::LengthMismatch { left: 3, right: 2 })
        ));
        assert!(matches!(check_pairs(0, 0), Err(ChartError::EmptyData)));
        assert!(check_pairs(4, 4).is_ok());
    }

    #[test]
    fn non_finite_values_rejected() {
        assert!(check_finite(&[1.0, f64::NAN], "y").is_err());
        assert!(check_finite(&[1.0, -2.0], "y").is_ok());
    }

    #[test]
    fn range_includes_zero_for_signed_bars() {
        let range = padded_range(&[-136.0, 97.0, 29.0, 10.0], true);
        assert!(range.start < -136.0);
        assert!(range.end > 97.0);

        let positive = padded_range(&[5.0, 10.0], true);
        assert!(positive.start < 0.0);
    }

    #[test]
    fn flat_data_still_has_a_range() {
        let range = padded_range(&[4.5, 4.5], false);
        assert_eq!(range, 3.5..5.5);
    }
}
