//! Analytics cards row above the chart.

use eframe::egui::{Color32, ProgressBar, RichText, Ui};

use crate::config::plot::PLOT_CONFIG;
use crate::models::BenefitSummary;
use crate::ui::styles::{get_outcome_color, progress_color};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::format_month_count;

pub fn render_cards(ui: &mut Ui, summary: &BenefitSummary) {
    ui.horizontal_wrapped(|ui| {
        card(ui, &UI_TEXT.card_total_grant, |ui| {
            ui.label(big_value(format!("{}", summary.total_granted)));
        });

        card(ui, &UI_TEXT.card_vested_today, |ui| {
            ui.label(big_value(format!("{}", summary.vested_now)));
            let fraction = summary.vested_pct_now.fraction();
            ui.add(
                ProgressBar::new(fraction as f32)
                    .desired_width(120.0)
                    .fill(progress_color(fraction))
                    .text(format!("{}", summary.vested_pct_now)),
            );
        });

        card(ui, &UI_TEXT.card_value_today, |ui| {
            ui.label(big_value(format!("{}", summary.value_now)));
        });

        card(ui, &UI_TEXT.card_value_horizon, |ui| {
            ui.label(big_value(format!("{}", summary.value_at_horizon)));
            ui.label(
                RichText::new(format!("{} vested", summary.vested_at_horizon))
                    .small()
                    .color(PLOT_CONFIG.color_text_subdued),
            );
        });

        card(ui, &UI_TEXT.card_growth_multiple, |ui| {
            let color = get_outcome_color(summary.growth_multiple - 1.0);
            ui.label(big_value(format!("{:.2}x", summary.growth_multiple)).color(color));
        });

        card(ui, &UI_TEXT.card_next_unlock, |ui| {
            match summary.next_unlock {
                Some(unlock) => {
                    ui.label(big_value(format_month_count(unlock.month.round() as u32)));
                    ui.label(
                        RichText::new(format!("to {}", unlock.grant_percent))
                            .small()
                            .color(PLOT_CONFIG.color_text_subdued),
                    );
                }
                None => {
                    ui.label(big_value(&UI_TEXT.card_fully_vested).color(PLOT_CONFIG.color_profit));
                }
            };
        });
    });
}

fn big_value(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).size(18.0).color(Color32::WHITE)
}

fn card(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_min_width(130.0);
        ui.vertical(|ui| {
            ui.label(
                RichText::new(title)
                    .small()
                    .color(UI_CONFIG.colors.subsection_heading),
            );
            ui.add_space(4.0);
            add_contents(ui);
        });
    });
}
