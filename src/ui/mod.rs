mod debug_overlay;
mod profit_plot;
mod registry_panels;
mod results_table;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub use debug_overlay::debug_lines;
pub(crate) use debug_overlay::render_debug_overlay;

pub use profit_plot::{ChartSegment, chart_points, chart_segments};
pub(crate) use profit_plot::render_profit_plot;

pub use registry_panels::{AliasPanel, EntryPanel, GamesPanel, Panel, RegistryEvent};
pub(crate) use results_table::render_results_table;

pub(crate) use screens::{
    SetupAction, SetupView, TrackingAction, TrackingView, render_setup, render_tracking,
};

pub(crate) use styles::UiStyleExt;
pub use styles::{get_outcome_color, get_tone_color};

pub use ui_config::{UI_CONFIG, UI_TEXT};
