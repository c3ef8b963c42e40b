use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, VLine};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::plot::PLOT_CONFIG;
use crate::engine::SchemeOutcome;
use crate::ui::UI_TEXT;
use crate::utils::get_max;

/// Which series the secondary strip shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default)]
pub enum StripSeries {
    #[strum(to_string = "Vested BTC")]
    #[default]
    VestedBtc,
    #[strum(to_string = "BTC Price")]
    Price,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlotView {
    pub strip: StripSeries,
    pub show_unlocks: bool,
}

impl Default for PlotView {
    fn default() -> Self {
        Self {
            strip: StripSeries::default(),
            show_unlocks: true,
        }
    }
}

impl PlotView {
    /// Main chart: vested USD value over the horizon, with unlock markers.
    pub fn render_main(&self, ui: &mut Ui, outcome: &SchemeOutcome) {
        let height = (ui.available_height() - 140.0).max(220.0);

        // Pad the top so the value line never hugs the frame
        let y_max = get_max(&outcome.timeline.value_usd);

        Plot::new("vesting_value_plot")
            .height(height)
            .legend(Legend::default())
            .x_axis_label(&UI_TEXT.plot_x_axis)
            .include_y(0.0)
            .include_y(y_max * 1.08)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                if self.show_unlocks {
                    for &(month, pct) in &outcome.unlock_markers {
                        plot_ui.vline(
                            VLine::new(format!("{:.0}%", pct), month)
                                .color(PLOT_CONFIG.color_unlock_marker)
                                .style(LineStyle::Dashed { length: 6.0 })
                                .width(1.0),
                        );
                    }
                }

                plot_ui.line(
                    Line::new(
                        &UI_TEXT.plot_value_series,
                        PlotPoints::new(outcome.timeline.value_points()),
                    )
                    .color(PLOT_CONFIG.color_value_line)
                    .width(PLOT_CONFIG.line_width),
                );
            });
    }

    /// Secondary strip: vested BTC (step curve) or the price path.
    pub fn render_strip(&self, ui: &mut Ui, outcome: &SchemeOutcome) {
        let (name, points, color): (&str, Vec<[f64; 2]>, Color32) = match self.strip {
            StripSeries::VestedBtc => (
                &UI_TEXT.plot_vested_series,
                outcome.timeline.vested_points(),
                PLOT_CONFIG.color_vested_line,
            ),
            StripSeries::Price => (
                &UI_TEXT.plot_price_series,
                outcome.timeline.price_points(),
                PLOT_CONFIG.color_price_line,
            ),
        };

        Plot::new("vesting_strip_plot")
            .height(110.0)
            .legend(Legend::default())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(name, PlotPoints::new(points))
                        .color(color)
                        .width(PLOT_CONFIG.line_width),
                );
            });
    }
}
