use {
    crate::{config::PLOT_CONFIG, engine::RowTone, ui::UI_CONFIG},
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Break-even counts as profit.
pub fn get_outcome_color(value: f64) -> Color32 {
    if value >= 0.0 {
        PLOT_CONFIG.color_profit
    } else {
        PLOT_CONFIG.color_loss
    }
}

pub fn get_tone_color(tone: RowTone) -> Color32 {
    match tone {
        RowTone::Positive => PLOT_CONFIG.color_profit,
        RowTone::Negative => PLOT_CONFIG.color_loss,
        RowTone::Error => PLOT_CONFIG.color_error,
        RowTone::Malformed => PLOT_CONFIG.color_text_subdued,
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    /// Inline validation message under a field. Draws nothing for `None`.
    fn field_error(&mut self, message: Option<&str>);
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
    fn button_text_secondary(&self, text: impl Into<String>) -> RichText;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
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

    fn field_error(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            self.label(RichText::new(message).small().color(PLOT_CONFIG.color_loss));
        }
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(PLOT_CONFIG.color_profit)
    }

    fn button_text_secondary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(PLOT_CONFIG.color_text_primary)
    }
}
