use eframe::egui::{Context, ProgressBar, RichText};

use crate::app::BootstrapState;
use crate::ui::{UI_CONFIG, UI_TEXT};

pub fn render_bootstrap(ctx: &Context, state: &BootstrapState) {
    eframe::egui::CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.vertical(|ui| {
                    ui.add_space(ui.available_height() * 0.35);
                    ui.vertical_centered(|ui| {
                        ui.heading(
                            RichText::new(&UI_TEXT.ls_title).color(UI_CONFIG.colors.heading),
                        );
                        ui.add_space(10.0);
                        ui.label(&UI_TEXT.ls_main);
                        ui.add_space(16.0);
                        ui.add(
                            ProgressBar::new(state.progress)
                                .desired_width(320.0)
                                .text(&state.status),
                        );
                    });
                });
            });
        });
}
