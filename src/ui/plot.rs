use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::data::model::Series;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the series as a single line with the plot widget's default look.
/// An empty series gives an empty plot.
pub fn series_plot(ui: &mut Ui, series: &Series) {
    Plot::new("series_plot").show(ui, |plot_ui| {
        let points: PlotPoints = series
            .xs()
            .iter()
            .zip(series.ys().iter())
            .map(|(&xi, &yi)| [xi, yi])
            .collect();

        plot_ui.line(Line::new(points));
    });
}
