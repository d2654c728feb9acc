/// Display layer: the native viewer window behind the pipeline's `Renderer`.
pub mod plot;

use anyhow::{Result, anyhow};
use eframe::egui;

use crate::app::SeriesViewerApp;
use crate::data::model::Series;
use crate::pipeline::Renderer;

/// Opens a native window with the plot and blocks until the user closes it.
pub struct ViewerRenderer;

impl Renderer for ViewerRenderer {
    fn render(&mut self, title: &str, series: &Series) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title)
                .with_inner_size([1200.0, 800.0])
                .with_min_inner_size([600.0, 400.0]),
            ..Default::default()
        };

        let series = series.clone();
        log::info!("opening viewer '{title}'");
        eframe::run_native(
            title,
            options,
            Box::new(move |_cc| Ok(Box::new(SeriesViewerApp::new(series)))),
        )
        .map_err(|e| anyhow!("plot viewer failed: {e}"))
    }
}
