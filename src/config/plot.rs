//! Plot and semantic colour configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Height of the profit chart in points
    pub chart_height: f32,
    /// Width of the profit line
    pub line_width: f32,
    /// Y-Axis padding factor applied above/below the data range
    pub plot_y_padding_pct: f32,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_error: Color32,
    pub color_warning: Color32,

    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    // Debug overlay ("terminal" look)
    pub color_debug_fg: Color32,
    pub color_debug_bg: Color32,

    pub color_widget_border: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    chart_height: 300.0,
    line_width: 2.0,
    plot_y_padding_pct: 0.05,

    color_profit: Color32::from_rgb(46, 204, 113), // #2ecc71
    color_loss: Color32::from_rgb(231, 76, 60),    // #e74c3c
    color_error: Color32::from_rgb(255, 165, 0),
    color_warning: Color32::from_rgb(255, 215, 0),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_debug_fg: Color32::from_rgb(0, 255, 0),
    color_debug_bg: Color32::from_black_alpha(205),

    color_widget_border: Color32::from_gray(60),
};
