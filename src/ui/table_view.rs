use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::plot::PLOT_CONFIG;
use crate::engine::SchemeOutcome;
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::month_label;

/// Month table below the chart. Yearly rows by default; monthly on demand.
pub fn render_table(ui: &mut Ui, outcome: &SchemeOutcome, show_monthly: bool) {
    let timeline = &outcome.timeline;
    let step = if show_monthly { 1 } else { 12 };
    let row_indices: Vec<usize> = (0..timeline.len()).step_by(step).collect();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(54.0))
        .column(Column::auto().at_least(72.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in [
                &UI_TEXT.tbl_month,
                &UI_TEXT.tbl_date,
                &UI_TEXT.tbl_granted,
                &UI_TEXT.tbl_vested,
                &UI_TEXT.tbl_unvested,
                &UI_TEXT.tbl_price,
                &UI_TEXT.tbl_value,
            ] {
                header.col(|ui| {
                    ui.label(
                        RichText::new(title)
                            .strong()
                            .color(UI_CONFIG.colors.subsection_heading),
                    );
                });
            }
        })
        .body(|body| {
            body.rows(18.0, row_indices.len(), |mut row| {
                let point = timeline.point(row_indices[row.index()]);
                row.col(|ui| {
                    ui.label(format!("{}", point.month));
                });
                row.col(|ui| {
                    ui.label(month_label(point.month));
                });
                row.col(|ui| {
                    ui.label(format!("{}", point.total_balance));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(format!("{}", point.employee_balance))
                            .color(PLOT_CONFIG.color_vested_line),
                    );
                });
                row.col(|ui| {
                    ui.label(format!("{}", point.employer_balance));
                });
                row.col(|ui| {
                    ui.label(format!("{}", point.bitcoin_price));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(format!("{}", point.usd_value))
                            .color(PLOT_CONFIG.color_value_line),
                    );
                });
            });
        });
}
