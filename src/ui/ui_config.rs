use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::config::PLOT_CONFIG;

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Width of the centred content column on wide windows
    pub content_max_width: f32,
    pub url_column_min_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::LIGHT_GRAY,
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(52, 152, 219),
        central_panel: Color32::from_rgb(24, 26, 31),
        side_panel: Color32::from_rgb(32, 35, 42),
        card: Color32::from_rgb(38, 42, 51),
    },
    content_max_width: 960.0,
    url_column_min_width: 320.0,
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Rounded box around each section of a screen
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, PLOT_CONFIG.color_widget_border),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
