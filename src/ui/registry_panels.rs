use {
    crate::{
        config::PLOT_CONFIG,
        domain::{AliasSet, SessionRegistry},
        ui::{UI_TEXT, UiStyleExt},
    },
    eframe::egui::{Key, RichText, TextEdit, Ui},
};

/// Edits requested by the registry widgets. Applied by the app, never by the widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    AddGame(String),
    RemoveGame(String),
    ToggleCents(String),
    AddAlias(String),
    RemoveAlias(String),
}

pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Single-line input with an Add button. Enter submits too.
pub struct EntryPanel<'a> {
    label: &'a str,
    hint: &'a str,
    input: &'a mut String,
    error: Option<&'a str>,
    on_submit: fn(String) -> RegistryEvent,
}

impl<'a> EntryPanel<'a> {
    pub fn game_url(input: &'a mut String, error: Option<&'a str>) -> Self {
        Self {
            label: &UI_TEXT.label_game_url,
            hint: &UI_TEXT.hint_game_url,
            input,
            error,
            on_submit: RegistryEvent::AddGame,
        }
    }

    pub fn alias(input: &'a mut String, error: Option<&'a str>) -> Self {
        Self {
            label: &UI_TEXT.label_alias,
            hint: &UI_TEXT.hint_alias,
            input,
            error,
            on_submit: RegistryEvent::AddAlias,
        }
    }
}

impl Panel for EntryPanel<'_> {
    type Event = RegistryEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label_subheader(self.label);
        ui.horizontal(|ui| {
            let response = ui.add(
                TextEdit::singleline(&mut *self.input)
                    .hint_text(self.hint)
                    .desired_width(ui.available_width() - 80.0),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            let add = ui.button_text_secondary(UI_TEXT.button_add.as_str());
            let clicked = ui.button(add).clicked();
            if entered || clicked {
                events.push((self.on_submit)(self.input.clone()));
                if entered {
                    response.request_focus();
                }
            }
        });
        ui.field_error(self.error);
        events
    }
}

/// Tracked games with their cents toggle.
pub struct GamesPanel<'a> {
    sessions: &'a SessionRegistry,
}

impl<'a> GamesPanel<'a> {
    pub fn new(sessions: &'a SessionRegistry) -> Self {
        Self { sessions }
    }
}

impl Panel for GamesPanel<'_> {
    type Event = RegistryEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label_subheader(&UI_TEXT.heading_games);
        if self.sessions.is_empty() {
            ui.label_subdued(&UI_TEXT.label_no_games);
            return events;
        }

        for session in self.sessions.iter() {
            ui.horizontal(|ui| {
                let mut uses_cents = session.uses_subunits;
                if ui
                    .checkbox(&mut uses_cents, UI_TEXT.label_uses_cents.as_str())
                    .on_hover_text(UI_TEXT.hover_uses_cents.as_str())
                    .changed()
                {
                    events.push(RegistryEvent::ToggleCents(session.url.clone()));
                }
                if ui
                    .small_button(RichText::new(&UI_TEXT.button_remove).color(PLOT_CONFIG.color_loss))
                    .clicked()
                {
                    events.push(RegistryEvent::RemoveGame(session.url.clone()));
                }
                ui.label(RichText::new(&session.url).color(PLOT_CONFIG.color_text_neutral));
            });
        }
        events
    }
}

/// Aliases as removable tags.
pub struct AliasPanel<'a> {
    aliases: &'a AliasSet,
}

impl<'a> AliasPanel<'a> {
    pub fn new(aliases: &'a AliasSet) -> Self {
        Self { aliases }
    }
}

impl Panel for AliasPanel<'_> {
    type Event = RegistryEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label_subheader(&UI_TEXT.heading_aliases);
        if self.aliases.is_empty() {
            ui.label_subdued(&UI_TEXT.label_no_aliases);
            return events;
        }

        ui.horizontal_wrapped(|ui| {
            for alias in self.aliases.iter() {
                let tag = format!("{} {}", alias, UI_TEXT.icon_close);
                if ui.button(tag).on_hover_text(UI_TEXT.button_remove.as_str()).clicked() {
                    events.push(RegistryEvent::RemoveAlias(alias.clone()));
                }
            }
        });
        events
    }
}
