use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card_fill: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(247, 147, 26), // bitcoin orange
        subsection_heading: Color32::from_rgb(230, 190, 120),
        central_panel: Color32::from_rgb(18, 18, 22),
        side_panel: Color32::from_rgb(25, 25, 25),
        card_fill: Color32::from_rgb(32, 32, 38),
    },
};

impl UiConfig {
    /// Frame for Left/Right panels (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4), // Tighter vertically
            ..Default::default()
        }
    }

    // Frame for the Plot area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for one analytics card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card_fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(10),
            corner_radius: eframe::egui::CornerRadius::same(6),
            ..Default::default()
        }
    }
}
