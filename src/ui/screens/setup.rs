use {
    crate::{
        app::RegistryForms,
        config::PLOT_CONFIG,
        domain::{AliasSet, SessionRegistry},
        ui::{
            AliasPanel, EntryPanel, GamesPanel, Panel, RegistryEvent, UI_CONFIG, UI_TEXT,
            UiStyleExt,
        },
    },
    eframe::egui::{
        Button, CentralPanel, Context, RichText, ScrollArea, Spinner, TextEdit, TopBottomPanel,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SetupAction {
    Registry(RegistryEvent),
    Start,
}

pub(crate) struct SetupView<'a> {
    pub player_name: &'a mut String,
    pub forms: &'a mut RegistryForms,
    pub sessions: &'a SessionRegistry,
    pub aliases: &'a AliasSet,
    pub verifying: bool,
}

pub(crate) fn render_setup(ctx: &Context, view: SetupView<'_>) -> Vec<SetupAction> {
    let SetupView {
        player_name,
        forms,
        sessions,
        aliases,
        verifying,
    } = view;
    let mut actions = Vec::new();

    TopBottomPanel::top("setup_top")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| {
            ui.heading(RichText::new(&UI_TEXT.app_title).strong());
        });

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(UI_CONFIG.content_max_width);
                    ui.heading(UI_TEXT.setup_heading.as_str());
                    ui.add_space(10.0);

                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        let events = EntryPanel::game_url(
                            &mut forms.game_url,
                            forms.game_url_error.as_deref(),
                        )
                        .render(ui);
                        actions.extend(events.into_iter().map(SetupAction::Registry));
                        ui.add_space(6.0);
                        let events = GamesPanel::new(sessions).render(ui);
                        actions.extend(events.into_iter().map(SetupAction::Registry));
                    });
                    ui.add_space(10.0);

                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label_subheader(&UI_TEXT.label_player_name);
                        ui.add(
                            TextEdit::singleline(&mut *player_name)
                                .hint_text(UI_TEXT.hint_player_name.as_str())
                                .desired_width(f32::INFINITY),
                        );
                        ui.field_error(forms.player_name_error.as_deref());
                    });
                    ui.add_space(10.0);

                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        let events =
                            EntryPanel::alias(&mut forms.alias, forms.alias_error.as_deref())
                                .render(ui);
                        actions.extend(events.into_iter().map(SetupAction::Registry));
                        ui.add_space(6.0);
                        let events = AliasPanel::new(aliases).render(ui);
                        actions.extend(events.into_iter().map(SetupAction::Registry));
                    });
                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        let label = ui.button_text_primary(UI_TEXT.button_start.as_str());
                        let start = Button::new(label).min_size([180.0, 32.0].into());
                        if ui.add_enabled(!verifying, start).clicked() {
                            actions.push(SetupAction::Start);
                        }
                        if verifying {
                            ui.add(Spinner::new());
                            ui.label(
                                RichText::new(&UI_TEXT.label_verifying)
                                    .italics()
                                    .color(PLOT_CONFIG.color_text_neutral),
                            );
                        }
                    });
                });
            });
        });

    actions
}
