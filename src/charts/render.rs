//! Writing charts somewhere a person can look at them.

use std::{fmt::Debug, fs, path::PathBuf};

use crate::{
    Error,
    html::{ECHARTS_SCRIPT_URL, HeadElement, base},
};

use super::{
    SalesChart,
    page::{charts_script, charts_view},
};

/// Presents a chart as a side effect of a chart endpoint.
///
/// Rendering never changes what the endpoint returns: handlers log a failed
/// render and carry on.
pub trait ChartRenderer: Debug + Send + Sync {
    /// Render `chart`.
    ///
    /// # Errors
    /// Returns [Error::ChartRender] if the chart could not be rendered.
    fn render(&self, chart: &SalesChart) -> Result<(), Error>;
}

/// Does not render anything. Used when chart rendering is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoChartRenderer;

impl ChartRenderer for NoChartRenderer {
    fn render(&self, _chart: &SalesChart) -> Result<(), Error> {
        Ok(())
    }
}

/// Writes each chart to a standalone HTML file in `output_dir`.
///
/// Files are named by [SalesChart::file_name], so rendering the same chart
/// for the same month again overwrites the previous file.
#[derive(Debug, Clone)]
pub struct HtmlChartRenderer {
    output_dir: PathBuf,
}

impl HtmlChartRenderer {
    /// Create a renderer that writes into `output_dir`, creating it on first
    /// use if needed.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The path a chart will be written to.
    pub fn path_for(&self, chart: &SalesChart) -> PathBuf {
        self.output_dir.join(chart.file_name())
    }
}

impl ChartRenderer for HtmlChartRenderer {
    fn render(&self, chart: &SalesChart) -> Result<(), Error> {
        fs::create_dir_all(&self.output_dir).map_err(|error| {
            Error::ChartRender(format!(
                "could not create {}: {error}",
                self.output_dir.display()
            ))
        })?;

        let charts = std::slice::from_ref(chart);
        let head_elements = [
            HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
            charts_script(charts),
        ];
        let document = base(&chart.month, &head_elements, &charts_view(charts));

        let path = self.path_for(chart);
        fs::write(&path, document.into_string()).map_err(|error| {
            Error::ChartRender(format!("could not write {}: {error}", path.display()))
        })?;

        tracing::debug!("Rendered chart to {}", path.display());

        Ok(())
    }
}
