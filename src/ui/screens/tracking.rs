use {
    crate::{
        app::RegistryForms,
        config::PLOT_CONFIG,
        domain::{AliasSet, SessionRegistry},
        engine::{TimerState, Tracker, build_rows, build_total},
        ui::{
            AliasPanel, EntryPanel, GamesPanel, Panel, RegistryEvent, UI_CONFIG, UI_TEXT,
            UiStyleExt, get_outcome_color, render_profit_plot, render_results_table,
        },
        utils::{format_amount, format_clock_secs},
    },
    eframe::egui::{
        Button, CentralPanel, Context, RichText, ScrollArea, Spinner, TopBottomPanel, Ui,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TrackingAction {
    Registry(RegistryEvent),
    Stop,
}

pub(crate) struct TrackingView<'a> {
    pub player_name: &'a str,
    pub forms: &'a mut RegistryForms,
    pub sessions: &'a SessionRegistry,
    pub aliases: &'a AliasSet,
    pub tracker: &'a Tracker,
}

pub(crate) fn render_tracking(ctx: &Context, view: TrackingView<'_>) -> Vec<TrackingAction> {
    let TrackingView {
        player_name,
        forms,
        sessions,
        aliases,
        tracker,
    } = view;
    let mut actions = Vec::new();

    TopBottomPanel::top("tracking_top")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new(&UI_TEXT.app_title).strong());
                ui.separator();
                render_status(ui, tracker);
            });
        });

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.set_max_width(UI_CONFIG.content_max_width);
                ui.heading(UI_TEXT.tracking_heading.as_str());
                ui.add_space(8.0);

                UI_CONFIG.card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    render_summary(ui, player_name, sessions, tracker);
                });
                ui.add_space(10.0);

                if tracker.is_loading() {
                    ui.horizontal(|ui| {
                        ui.add(Spinner::new());
                        ui.label_subdued(&UI_TEXT.label_loading);
                    });
                }

                if let Some(results) = tracker.results() {
                    let rows = build_rows(results, sessions);
                    let total = build_total(results, sessions);
                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        render_results_table(ui, &rows, &total);
                    });
                } else if !tracker.is_loading() {
                    ui.label_subdued(&UI_TEXT.label_waiting_first_poll);
                }

                if let Some(error) = tracker.error() {
                    ui.add_space(10.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(format!("{} {}", UI_TEXT.icon_warning, error))
                                .color(PLOT_CONFIG.color_loss),
                        );
                    });
                }
                ui.add_space(20.0);

                UI_CONFIG.card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.columns(2, |cols| {
                        let events = EntryPanel::game_url(
                            &mut forms.game_url,
                            forms.game_url_error.as_deref(),
                        )
                        .render(&mut cols[0]);
                        actions.extend(events.into_iter().map(TrackingAction::Registry));
                        cols[0].add_space(6.0);
                        let events = GamesPanel::new(sessions).render(&mut cols[0]);
                        actions.extend(events.into_iter().map(TrackingAction::Registry));

                        let events =
                            EntryPanel::alias(&mut forms.alias, forms.alias_error.as_deref())
                                .render(&mut cols[1]);
                        actions.extend(events.into_iter().map(TrackingAction::Registry));
                        cols[1].add_space(6.0);
                        let events = AliasPanel::new(aliases).render(&mut cols[1]);
                        actions.extend(events.into_iter().map(TrackingAction::Registry));
                    });
                });
                ui.add_space(16.0);

                ui.vertical_centered(|ui| {
                    let stop = Button::new(
                        RichText::new(UI_TEXT.button_stop.as_str())
                            .strong()
                            .color(PLOT_CONFIG.color_loss),
                    )
                    .min_size([180.0, 32.0].into());
                    if ui.add(stop).clicked() {
                        actions.push(TrackingAction::Stop);
                    }
                });
            });
        });

    actions
}

/// Player title, running total and the chart.
fn render_summary(ui: &mut Ui, player_name: &str, sessions: &SessionRegistry, tracker: &Tracker) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(player_name)
                .strong()
                .size(18.0)
                .color(UI_CONFIG.colors.subsection_heading),
        );
        ui.label(RichText::new(UI_TEXT.label_profit_loss.as_str()).size(18.0));
        if tracker.results().is_some() {
            let total = tracker.total_profit(sessions);
            ui.label(
                RichText::new(format_amount(total))
                    .strong()
                    .size(18.0)
                    .color(get_outcome_color(total)),
            );
        }
    });
    ui.add_space(6.0);

    if tracker.results().is_some() {
        render_profit_plot(ui, tracker.history().points());
    }
}

fn render_status(ui: &mut Ui, tracker: &Tracker) {
    if tracker.poller().timer() == TimerState::Paused {
        ui.label(
            RichText::new(UI_TEXT.label_paused.as_str())
                .small()
                .color(PLOT_CONFIG.color_warning),
        );
    }
    if let Some(last) = tracker.history().last() {
        ui.metric(
            &UI_TEXT.label_last_update,
            &format_clock_secs(last.timestamp),
            PLOT_CONFIG.color_text_neutral,
        );
    }
    if tracker.has_errors() {
        ui.label(
            RichText::new(UI_TEXT.icon_warning.as_str())
                .small()
                .color(PLOT_CONFIG.color_error),
        );
    }
}
