use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;

use super::{check_finite, check_pairs, output_path, padded_range, ChartError, Result, CHART_SIZE};
use crate::color::series_color;

/// Marker radius in pixels.
const POINT_RADIUS: i32 = 3;

// ---------------------------------------------------------------------------
// Scatter chart: one marker per (x, y) pair
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ScatterChart {
    title: String,
    x_desc: Option<String>,
    y_desc: Option<String>,
}

impl ScatterChart {
    pub fn new(title: impl Into<String>) -> Self {
        ScatterChart {
            title: title.into(),
            x_desc: None,
            y_desc: None,
        }
    }

    pub fn x_desc(mut self, desc: impl Into<String>) -> Self {
        self.x_desc = Some(desc.into());
        self
    }

    pub fn y_desc(mut self, desc: impl Into<String>) -> Self {
        self.y_desc = Some(desc.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path_in(&self, output_dir: &Path) -> PathBuf {
        output_path(output_dir, "scatterplot", &self.title)
    }

    /// Plot `ys` against `xs` and save the PNG, returning its path.
    pub fn render(&self, xs: &[f64], ys: &[f64], output_dir: &Path) -> Result<PathBuf> {
        check_pairs(xs.len(), ys.len())?;
        check_finite(xs, "x")?;
        check_finite(ys, "y")?;

        std::fs::create_dir_all(output_dir)?;
        let path = self.path_in(output_dir);

        let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(85)
            .build_cartesian_2d(padded_range(xs, false), padded_range(ys, false))
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        let mut mesh = chart.configure_mesh();
        mesh.label_style(("sans-serif", 25));
        if let Some(desc) = &self.x_desc {
            mesh.x_desc(desc);
        }
        if let Some(desc) = &self.y_desc {
            mesh.y_desc(desc);
        }
        mesh.draw()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        let style = series_color().filled();
        chart
            .draw_series(
                xs.iter()
                    .zip(ys.iter())
                    .map(|(&x, &y)| Circle::new((x, y), POINT_RADIUS, style)),
            )
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        drop(chart);
        drop(root);

        info!("wrote {} ({} points)", path.display(), xs.len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_uses_scatterplot_prefix() {
        let chart = ScatterChart::new("2021 Depth vs Magnitude");
        assert!(chart
            .path_in(Path::new("charts"))
            .ends_with("scatterplot-2021 Depth vs Magnitude.png"));
    }

    #[test]
    fn unequal_series_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScatterChart::new("depth")
            .render(&[10.0, 35.0], &[4.6], dir.path())
            .unwrap_err();
        assert!(matches!(err, ChartError::LengthMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn nan_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScatterChart::new("depth")
            .render(&[10.0, f64::NAN], &[4.6, 5.0], dir.path())
            .unwrap_err();
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn renders_points_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let chart = ScatterChart::new("2021 Depth vs Magnitude")
            .x_desc("Depth (km)")
            .y_desc("Magnitude");

        let path = chart
            .render(&[40.24, 32.93, 10.0, 600.0], &[5.1, 4.6, 4.5, 7.2], dir.path())
            .unwrap();

        assert_eq!(path, chart.path_in(dir.path()));
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn single_point_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = ScatterChart::new("one")
            .render(&[10.0], &[4.5], dir.path())
            .unwrap();
        assert!(path.exists());
    }
}
