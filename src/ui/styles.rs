use {
    crate::{config::plot::PLOT_CONFIG, ui::UI_CONFIG},
    colorgrad::Gradient,
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub fn get_outcome_color(value: f64) -> Color32 {
    if value > 0.0 {
        PLOT_CONFIG.color_profit
    } else {
        PLOT_CONFIG.color_loss
    }
}

/// Sample the vested-progress gradient at `t` in [0, 1].
/// Falls back to the profit color if the gradient stops fail to parse.
pub fn progress_color(t: f64) -> Color32 {
    match colorgrad::GradientBuilder::new()
        .html_colors(&PLOT_CONFIG.progress_gradient)
        .build::<colorgrad::LinearGradient>()
    {
        Ok(gradient) => {
            let [r, g, b, _] = gradient.at(t.clamp(0.0, 1.0) as f32).to_rgba8();
            Color32::from_rgb(r, g, b)
        }
        Err(_) => PLOT_CONFIG.color_profit,
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }
}
