use {
    crate::{
        config::{PLOT_CONFIG, POLLING},
        domain::HistoryPoint,
        ui::{UI_TEXT, get_outcome_color},
        utils::{TimeUtils, epoch_secs, epoch_secs_to_clock, format_amount, format_axis_amount},
    },
    eframe::egui::{Color32, Ui, vec2},
    egui_plot::{Axis, AxisHints, HPlacement, Line, Plot, PlotPoints},
};

/// One straight piece of the profit line, coloured by where it ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub color: Color32,
}

/// History as `[epoch_secs, profit]`. A lone point gets a zero lead-in so a line is still drawn.
pub fn chart_points(history: &[HistoryPoint]) -> Vec<[f64; 2]> {
    let mut points: Vec<[f64; 2]> = history
        .iter()
        .map(|p| [epoch_secs(p.timestamp), p.aggregate_profit])
        .collect();

    if let [only] = history {
        let lead_in = only.timestamp - TimeUtils::delta_ms(POLLING.chart_lead_in_ms);
        points.insert(0, [epoch_secs(lead_in), 0.0]);
    }
    points
}

pub fn chart_segments(points: &[[f64; 2]]) -> Vec<ChartSegment> {
    points
        .windows(2)
        .map(|w| ChartSegment {
            from: w[0],
            to: w[1],
            color: get_outcome_color(w[1][1]),
        })
        .collect()
}

fn time_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(|mark, _range| epoch_secs_to_clock(mark.value))
}

fn profit_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::Y)
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(|mark, _range| format_axis_amount(mark.value))
        .placement(HPlacement::Left)
}

pub(crate) fn render_profit_plot(ui: &mut Ui, history: &[HistoryPoint]) {
    let segments = crate::trace_time!("Profit segments", 1_000, {
        chart_segments(&chart_points(history))
    });

    Plot::new("profit_plot")
        .height(PLOT_CONFIG.chart_height)
        .custom_x_axes(vec![time_axis()])
        .custom_y_axes(vec![profit_axis()])
        .include_y(0.0)
        .set_margin_fraction(vec2(0.02, PLOT_CONFIG.plot_y_padding_pct))
        .label_formatter(|_, value| {
            format!(
                "{}\n{}",
                epoch_secs_to_clock(value.x),
                format_amount(value.y)
            )
        })
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            for segment in segments {
                plot_ui.line(
                    Line::new("", PlotPoints::new(vec![segment.from, segment.to]))
                        .color(segment.color)
                        .width(PLOT_CONFIG.line_width),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap()
    }

    #[test]
    fn single_point_gets_a_zero_lead_in() {
        let points = chart_points(&[HistoryPoint::new(t0(), 12.0)]);
        assert_eq!(
            points,
            vec![
                [epoch_secs(t0() - TimeDelta::minutes(15)), 0.0],
                [epoch_secs(t0()), 12.0]
            ]
        );
    }

    #[test]
    fn segments_are_coloured_by_their_end_value() {
        let history = [
            HistoryPoint::new(t0() - TimeDelta::minutes(5), 0.0),
            HistoryPoint::new(t0(), -4.0),
            HistoryPoint::new(t0() + TimeDelta::seconds(5), 0.0),
        ];
        let segments = chart_segments(&chart_points(&history));
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].color, PLOT_CONFIG.color_loss);
        assert_eq!(segments[1].color, PLOT_CONFIG.color_profit);
        assert_eq!(segments[1].from, [epoch_secs(t0()), -4.0]);
    }

    #[test]
    fn empty_history_draws_nothing() {
        assert!(chart_segments(&chart_points(&[])).is_empty());
    }
}
