use eframe::egui::{
    Color32, Context, DragValue, RichText, ScrollArea, SidePanel, Slider, Spinner, TextEdit,
    TopBottomPanel,
};
use strum::IntoEnumIterator;

use crate::app::App;
use crate::config::{GrowthPct, PriceMode, SchemeId, UsdPrice, VestedPct, preset};
use crate::config::constants::projection;
use crate::domain::CustomVestingEvent;
use crate::ui::cards::render_cards;
use crate::ui::plot_view::StripSeries;
use crate::ui::styles::UiStyleExt;
use crate::ui::table_view::render_table;
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::current_year;

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("VestScope").color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();
                    ui.label_subdued(preset(self.selected).tagline);
                });
            });
    }

    pub(crate) fn render_left_panel(&mut self, ctx: &Context) {
        SidePanel::left("left_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(250.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.render_scheme_selector(ui);
                    ui.add_space(12.0);
                    self.render_projection_settings(ui);
                    ui.add_space(12.0);
                    self.render_schedule_editor(ui);
                });
            });
    }

    fn render_scheme_selector(&mut self, ui: &mut eframe::egui::Ui) {
        ui.label_subheader(&UI_TEXT.lp_scheme_heading);
        ui.add_space(4.0);

        let mut switched = None;
        for id in SchemeId::iter() {
            let label = format!("{} {}", id.icon(), id);
            if ui.selectable_label(self.selected == id, label).clicked() && self.selected != id {
                switched = Some(id);
            }
        }

        if let Some(id) = switched {
            self.selected = id;
            if let Some(engine) = &mut self.engine {
                // Make the fresh selection jump the queue
                engine.force_recalc(id);
            }
        }
    }

    fn render_projection_settings(&mut self, ui: &mut eframe::egui::Ui) {
        let Some(engine) = &mut self.engine else {
            return;
        };

        ui.label_subheader(&UI_TEXT.lp_settings_heading);
        ui.add_space(4.0);

        let mut settings = engine.settings.clone();

        // Mode switch
        ui.horizontal(|ui| {
            ui.label_subdued(&UI_TEXT.lp_mode_label);
            for mode in PriceMode::iter() {
                if ui
                    .selectable_label(settings.mode == mode, mode.to_string())
                    .clicked()
                {
                    settings.mode = mode;
                }
            }
        });

        match settings.mode {
            PriceMode::Projected => {
                let mut growth_pct = settings.annual_growth.value() * 100.0;
                ui.horizontal(|ui| {
                    ui.label_subdued(&UI_TEXT.lp_growth_label);
                    ui.add(
                        Slider::new(
                            &mut growth_pct,
                            GrowthPct::MIN_VALUE * 100.0..=GrowthPct::MAX_VALUE * 100.0,
                        )
                        .suffix("%/yr"),
                    );
                });
                settings.annual_growth = GrowthPct::new(growth_pct / 100.0);

                // Manual spot override: 0 = follow the live stream
                let mut manual = settings
                    .manual_spot_price
                    .map(|p| p.value())
                    .unwrap_or(0.0);
                ui.horizontal(|ui| {
                    ui.label_subdued("Spot override");
                    ui.add(DragValue::new(&mut manual).speed(100.0).prefix("$"));
                });
                settings.manual_spot_price =
                    (manual > f64::EPSILON).then(|| UsdPrice::new(manual));
            }
            PriceMode::Historical => {
                ui.horizontal(|ui| {
                    ui.label_subdued(&UI_TEXT.lp_start_year_label);
                    ui.add(Slider::new(
                        &mut settings.historical_start_year,
                        projection::HISTORICAL_MIN_YEAR..=current_year(),
                    ));
                });
            }
        }

        ui.horizontal(|ui| {
            ui.label_subdued(&UI_TEXT.lp_horizon_label);
            ui.add(
                Slider::new(
                    &mut settings.horizon_months,
                    projection::MIN_HORIZON_MONTHS..=projection::MAX_HORIZON_MONTHS,
                )
                .custom_formatter(|m, _| format!("{:.0}y", m / 12.0)),
            );
        });

        engine.update_settings(settings);
    }

    fn render_schedule_editor(&mut self, ui: &mut eframe::egui::Ui) {
        let selected = self.selected;
        let Some(engine) = &mut self.engine else {
            return;
        };

        ui.label_subheader(&UI_TEXT.lp_schedule_heading);
        ui.add_space(4.0);

        let Some(scheme) = engine.scheme(selected) else {
            return;
        };
        let mut events = scheme.vesting.custom_events.clone();
        let mut changed = false;

        if events.is_empty() {
            // Milestone mode: show the preset steps read-only
            for m in &scheme.vesting.milestones {
                ui.horizontal(|ui| {
                    ui.label_subdued(format!("month {}", m.months));
                    ui.label(format!("{}", m.grant_percent));
                });
            }
        } else {
            let mut remove_idx = None;
            for (idx, event) in events.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    let mut months = event.time_period;
                    if ui
                        .add(DragValue::new(&mut months).range(0.0..=240.0).suffix("mo"))
                        .changed()
                    {
                        event.time_period = months;
                        changed = true;
                    }

                    let mut pct = event.percentage_vested.value();
                    if ui
                        .add(DragValue::new(&mut pct).range(0.0..=100.0).suffix("%"))
                        .changed()
                    {
                        event.percentage_vested = VestedPct::new(pct);
                        changed = true;
                    }

                    if ui
                        .add(TextEdit::singleline(&mut event.label).desired_width(70.0))
                        .changed()
                    {
                        changed = true;
                    }

                    if ui.small_button(&UI_TEXT.lp_remove_event).clicked() {
                        remove_idx = Some(idx);
                    }
                });
            }
            if let Some(idx) = remove_idx {
                events.remove(idx);
                changed = true;
            }
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.small_button(&UI_TEXT.lp_add_event).clicked() {
                let (next_month, next_pct) = events
                    .last()
                    .map(|e| {
                        (
                            e.time_period + 12.0,
                            (e.percentage_vested.value() + 10.0).min(100.0),
                        )
                    })
                    .unwrap_or((12.0, 10.0));
                events.push(CustomVestingEvent::new(next_month, next_pct, "Custom unlock"));
                changed = true;
            }

            if !events.is_empty() && ui.small_button(&UI_TEXT.lp_reset_schedule).clicked() {
                events.clear();
                changed = true;
            }
        });

        if changed {
            engine.set_custom_events(selected, events);
        }

        // Surface construction failures (e.g. decreasing percentages)
        let (_, last_error) = engine.scheme_status(selected);
        if last_error.is_some() {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    UI_TEXT.label_warning, UI_TEXT.lp_schedule_invalid
                ))
                .small()
                .color(Color32::from_rgb(220, 80, 80)),
            );
        }
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let Some(engine) = &self.engine else {
                        ui.label_subdued(&UI_TEXT.cp_system_starting);
                        return;
                    };

                    match engine.get_spot_price() {
                        Some(p) => ui.metric(
                            &UI_TEXT.sp_spot,
                            &format!("{}", UsdPrice::new(p)),
                            Color32::WHITE,
                        ),
                        None => ui.label_subdued("waiting for spot price"),
                    }

                    ui.separator();
                    ui.metric(
                        &UI_TEXT.sp_stream_status,
                        &engine.price_stream.status().to_string(),
                        Color32::GRAY,
                    );

                    if cfg!(target_arch = "wasm32") {
                        ui.separator();
                        ui.label_subdued(&UI_TEXT.sp_demo_mode);
                    }

                    if let Some(sig) = self.data_signature {
                        ui.separator();
                        ui.label_subdued(sig);
                    }

                    if let Some(msg) = engine.worker_status_msg() {
                        ui.separator();
                        ui.label_subdued(format!("{} {}", UI_TEXT.label_working, msg));
                    }
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        // Snapshot engine state up front so the panel closure can mutate
        // view toggles without fighting the borrow on self.engine.
        let snapshot = self.engine.as_ref().map(|engine| {
            let (is_calculating, last_error) = engine.scheme_status(self.selected);
            (is_calculating, last_error, engine.outcome(self.selected))
        });

        eframe::egui::CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let Some((is_calculating, last_error, outcome)) = snapshot else {
                    ui.centered_and_justified(|ui| {
                        ui.label(&UI_TEXT.cp_system_starting);
                    });
                    return;
                };

                match outcome {
                    Some(outcome) => {
                        render_cards(ui, &outcome.summary);
                        ui.add_space(8.0);

                        self.plot_view.render_main(ui, &outcome);

                        ui.horizontal(|ui| {
                            for series in StripSeries::iter() {
                                if ui
                                    .selectable_label(
                                        self.plot_view.strip == series,
                                        series.to_string(),
                                    )
                                    .clicked()
                                {
                                    self.plot_view.strip = series;
                                }
                            }
                            ui.separator();
                            ui.checkbox(&mut self.plot_view.show_unlocks, "Unlock markers");
                            ui.separator();
                            ui.checkbox(&mut self.show_monthly_rows, &UI_TEXT.tbl_show_monthly);
                        });

                        self.plot_view.render_strip(ui, &outcome);
                        ui.add_space(6.0);

                        // TableBuilder scrolls internally within the leftover height
                        render_table(ui, &outcome, self.show_monthly_rows);
                    }
                    None if is_calculating => {
                        ui.centered_and_justified(|ui| {
                            ui.horizontal(|ui| {
                                ui.add(Spinner::new());
                                ui.label(format!("{} {}", UI_TEXT.cp_projecting, self.selected));
                            });
                        });
                    }
                    None => {
                        ui.centered_and_justified(|ui| {
                            ui.vertical_centered(|ui| {
                                match last_error {
                                    Some(err) => {
                                        ui.heading(&UI_TEXT.error_projection_failed);
                                        ui.label_subdued(err);
                                        ui.add_space(6.0);
                                        ui.label(&UI_TEXT.error_no_history_body);
                                    }
                                    None => {
                                        ui.label(&UI_TEXT.cp_queued);
                                    }
                                };
                            });
                        });
                    }
                }
            });
    }
}
