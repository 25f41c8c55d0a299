use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;

use super::{check_finite, check_pairs, output_path, padded_range, ChartError, Result, CHART_SIZE};
use crate::color::generate_palette;

// ---------------------------------------------------------------------------
// Bar chart: one labelled bar per value, signed values allowed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BarChart {
    title: String,
    y_desc: Option<String>,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        BarChart {
            title: title.into(),
            y_desc: None,
        }
    }

    pub fn y_desc(mut self, desc: impl Into<String>) -> Self {
        self.y_desc = Some(desc.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Where [`render`](Self::render) writes the chart inside `output_dir`.
    pub fn path_in(&self, output_dir: &Path) -> PathBuf {
        output_path(output_dir, "barplot", &self.title)
    }

    /// Draw `values` against `labels` and save the PNG, returning its path.
    pub fn render<L: AsRef<str>>(
        &self,
        labels: &[L],
        values: &[f64],
        output_dir: &Path,
    ) -> Result<PathBuf> {
        check_pairs(labels.len(), values.len())?;
        check_finite(values, "values")?;

        std::fs::create_dir_all(output_dir)?;
        let path = self.path_in(output_dir);

        let n = values.len();
        let colors = generate_palette(n);
        let y_range = padded_range(values, true);

        let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(85)
            .build_cartesian_2d((0..n).into_segmented(), y_range)
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        let label_of = |v: &SegmentValue<usize>| -> String {
            match v {
                SegmentValue::CenterOf(i) => labels
                    .get(*i)
                    .map(|l| l.as_ref().to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            }
        };

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&label_of)
            .label_style(("sans-serif", 25));
        if let Some(desc) = &self.y_desc {
            mesh.y_desc(desc);
        }
        mesh.draw()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        chart
            .draw_series(values.iter().enumerate().map(|(i, &v)| {
                // Top-left corner first so negative bars extend downwards.
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), v.max(0.0)),
                        (SegmentValue::Exact(i + 1), v.min(0.0)),
                    ],
                    colors[i].filled(),
                );
                bar.set_margin(0, 0, 30, 30);
                bar
            }))
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        drop(chart);
        drop(root);

        info!("wrote {}", path.display());
        Ok(path)
    }
}
