//! Chart styling constants

use eframe::egui::Color32;

pub struct PlotConfig {
    pub color_value_line: Color32,
    pub color_vested_line: Color32,
    pub color_price_line: Color32,
    pub color_unlock_marker: Color32,
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_text_subdued: Color32,
    pub color_widget_border: Color32,

    pub line_width: f32,

    /// Gradient stops for the vested-progress bar (locked -> fully vested).
    pub progress_gradient: [&'static str; 3],
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    color_value_line: Color32::from_rgb(247, 147, 26), // bitcoin orange
    color_vested_line: Color32::from_rgb(80, 200, 120),
    color_price_line: Color32::from_rgb(110, 140, 255),
    color_unlock_marker: Color32::from_gray(180),
    color_profit: Color32::from_rgb(80, 200, 120),
    color_loss: Color32::from_rgb(220, 80, 80),
    color_text_subdued: Color32::GRAY,
    color_widget_border: Color32::from_gray(70),

    line_width: 2.0,

    progress_gradient: ["#8a4f4f", "#c9a227", "#50c878"],
};
