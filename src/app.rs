use eframe::egui;

use crate::data::model::Series;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Viewer holding the one series it displays until the window is closed.
pub struct SeriesViewerApp {
    pub series: Series,
}

impl SeriesViewerApp {
    pub fn new(series: Series) -> Self {
        Self { series }
    }
}

impl eframe::App for SeriesViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::series_plot(ui, &self.series);
        });
    }
}
