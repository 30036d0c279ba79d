use {
    crate::{
        config::PLOT_CONFIG,
        engine::{TimerState, Tracker},
        ui::UI_TEXT,
        utils::format_clock_secs,
    },
    eframe::egui::{Align2, Area, Context, CornerRadius, Frame, Id, Margin, Order, RichText},
};

/// Key / value lines echoed by the diagnostics overlay, in display order.
pub fn debug_lines(games_count: usize, tracker: &Tracker) -> Vec<(String, String)> {
    let none = || UI_TEXT.debug_none.clone();
    let timer = match tracker.poller().timer() {
        TimerState::Stopped => "stopped".to_string(),
        TimerState::Paused => "paused".to_string(),
        TimerState::Active { next_tick_at } => format!("next {}", format_clock_secs(next_tick_at)),
    };

    vec![
        (UI_TEXT.debug_games.clone(), games_count.to_string()),
        (
            UI_TEXT.debug_last_poll.clone(),
            tracker
                .poller()
                .last_attempt_at()
                .map(format_clock_secs)
                .unwrap_or_else(none),
        ),
        (
            UI_TEXT.debug_history.clone(),
            tracker.history().len().to_string(),
        ),
        (
            UI_TEXT.debug_last_profit.clone(),
            tracker
                .history()
                .last()
                .map(|p| format!("{:.2}", p.aggregate_profit))
                .unwrap_or_else(none),
        ),
        (
            UI_TEXT.debug_error.clone(),
            tracker.error().map(str::to_owned).unwrap_or_else(none),
        ),
        (UI_TEXT.debug_timer.clone(), timer),
    ]
}

pub(crate) fn render_debug_overlay(ctx: &Context, lines: &[(String, String)]) {
    Area::new(Id::new("debug_overlay"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_TOP, [-10.0, 10.0])
        .interactable(false)
        .show(ctx, |ui| {
            Frame::NONE
                .fill(PLOT_CONFIG.color_debug_bg)
                .corner_radius(CornerRadius::same(5))
                .inner_margin(Margin::same(10))
                .show(ui, |ui| {
                    ui.set_max_width(300.0);
                    ui.label(
                        RichText::new(&UI_TEXT.debug_heading)
                            .strong()
                            .color(PLOT_CONFIG.color_debug_fg),
                    );
                    for (key, value) in lines {
                        ui.label(
                            RichText::new(format!("{}: {}", key, value))
                                .monospace()
                                .small()
                                .color(PLOT_CONFIG.color_debug_fg),
                        );
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Visibility;
    use chrono::{TimeZone, Utc};

    #[test]
    fn fresh_tracker_reports_nulls() {
        let mut tracker = Tracker::new();
        tracker.start(Utc.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap(), Visibility::Hidden);
        let lines = debug_lines(2, &tracker);

        assert_eq!(lines[0], ("gamesCount".to_string(), "2".to_string()));
        assert_eq!(lines[1].1, "null");
        assert_eq!(lines[2].1, "0");
        assert_eq!(lines[4].1, "null");
        assert_eq!(lines[5].1, "paused");
    }
}
