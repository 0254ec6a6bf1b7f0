//! SVG chart of observations and predictions against one feature.

use crate::error::{Result, ToolError};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

type Point = (f64, f64);

/// Draws observed and predicted values against `xs` and the fitted line.
///
/// The line joins the predictions at the smallest and the largest `xs`.
///
/// # Errors
/// [`ToolError::Plot`] if the inputs are empty, have different lengths, contain
/// no finite value, or if rendering fails.
pub fn draw_fit<P: AsRef<Path>>(
    path: P,
    feature_name: &str,
    xs: &[f64],
    observed: &[f64],
    predicted: &[f64],
) -> Result<()> {
    if observed.len() != xs.len() || predicted.len() != xs.len() {
        return Err(ToolError::Plot(format!(
            "{} feature values, {} observations and {} predictions",
            xs.len(),
            observed.len(),
            predicted.len()
        )));
    }
    let (start, end) =
        fit_line(xs, predicted).ok_or_else(|| ToolError::Plot("nothing to plot".to_string()))?;
    let x_range = padded_range(xs.iter().copied())?;
    let y_range = padded_range(observed.iter().chain(predicted).copied())?;

    let chart = Chart {
        feature_name,
        xs,
        observed,
        predicted,
        line: [start, end],
        x_range,
        y_range,
    };

    let path = path.as_ref();
    if let Err(err) = chart.render(path, true) {
        log::warn!("labelled plot failed ({err}), drawing without text");
        chart.render(path, false)?;
    }
    log::debug!("plot written to {}", path.display());
    Ok(())
}

struct Chart<'a> {
    feature_name: &'a str,
    xs: &'a [f64],
    observed: &'a [f64],
    predicted: &'a [f64],
    line: [Point; 2],
    x_range: Range<f64>,
    y_range: Range<f64>,
}

impl Chart<'_> {
    /// Text needs a system font; `labelled = false` draws only markers and the line.
    fn render(&self, path: &Path, labelled: bool) -> Result<()> {
        let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(10);
        if labelled {
            builder
                .caption(
                    format!("observation and prediction by {}", self.feature_name),
                    ("sans-serif", 24),
                )
                .x_label_area_size(40)
                .y_label_area_size(60);
        }
        let mut chart = builder
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())
            .map_err(plot_err)?;

        if labelled {
            chart
                .configure_mesh()
                .x_desc(self.feature_name)
                .y_desc("value")
                .draw()
                .map_err(plot_err)?;
        }

        chart
            .draw_series(
                self.xs
                    .iter()
                    .zip(self.observed)
                    .map(|(&x, &y)| Circle::new((x, y), 3, BLUE.filled())),
            )
            .map_err(plot_err)?
            .label("observation")
            .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));

        chart
            .draw_series(
                self.xs
                    .iter()
                    .zip(self.predicted)
                    .map(|(&x, &y)| Circle::new((x, y), 3, RED.filled())),
            )
            .map_err(plot_err)?
            .label("prediction")
            .legend(|(x, y)| Circle::new((x, y), 3, RED.filled()));

        chart
            .draw_series(LineSeries::new(self.line, &RED))
            .map_err(plot_err)?;

        if labelled {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(plot_err)?;
        }

        root.present().map_err(plot_err)
    }
}

/// End points of the fitted line: the predictions at the smallest and largest `xs`.
pub fn fit_line(xs: &[f64], predicted: &[f64]) -> Option<(Point, Point)> {
    let indexed = || xs.iter().zip(predicted).filter(|(x, _)| x.is_finite());
    let (&x_min, &y_min) = indexed().min_by(|a, b| a.0.total_cmp(b.0))?;
    let (&x_max, &y_max) = indexed().max_by(|a, b| a.0.total_cmp(b.0))?;
    Some(((x_min, y_min), (x_max, y_max)))
}

/// Range covering the finite `values` with a 5% margin on each side.
fn padded_range(values: impl Iterator<Item = f64>) -> Result<Range<f64>> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .ok_or_else(|| ToolError::Plot("no finite value to plot".to_string()))?;

    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    Ok((lo - pad)..(hi + pad))
}

fn plot_err<E: std::fmt::Display>(err: E) -> ToolError {
    ToolError::Plot(err.to_string())
}
