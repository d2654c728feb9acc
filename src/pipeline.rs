use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::filter::MeasureRange;
use crate::data::loader::load_file;
use crate::data::model::{Series, SeriesOrder};

/// Number of leading points always dropped before plotting (warm-up samples).
pub const WARMUP_SKIP: usize = 2;

// ---------------------------------------------------------------------------
// Configuration handed to the pipeline
// ---------------------------------------------------------------------------

/// Everything one run needs, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub path: PathBuf,
    pub range: MeasureRange,
    pub parameter: String,
    pub order: SeriesOrder,
}

impl PlotConfig {
    /// Title shown by the viewer.
    pub fn title(&self) -> String {
        let file = self
            .path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        format!("{file} – {}", self.parameter)
    }
}

// ---------------------------------------------------------------------------
// Renderer – where the final series goes
// ---------------------------------------------------------------------------

/// Display collaborator. The production implementation blocks until the
/// viewer window is closed.
pub trait Renderer {
    fn render(&mut self, title: &str, series: &Series) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Load, filter, trim and render one series.
pub fn run(config: &PlotConfig, renderer: &mut dyn Renderer) -> Result<()> {
    if !config.range.is_unbounded() {
        log::info!("restricting measures to {}", config.range);
    }
    let series = load_file(&config.path, &config.parameter, &config.range, config.order)
        .with_context(|| format!("loading '{}'", config.path.display()))?;

    let plotted = series.trimmed(WARMUP_SKIP);
    log::debug!(
        "skipped {} warm-up points, plotting {plotted}",
        series.len() - plotted.len()
    );
    if plotted.is_empty() {
        log::warn!("no points left to plot");
    }

    renderer.render(&config.title(), &plotted)
}
