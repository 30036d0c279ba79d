use {
    crate::{
        engine::{ResultRow, TotalRow},
        ui::{UI_CONFIG, UI_TEXT, get_tone_color},
    },
    eframe::egui::{RichText, Ui},
    egui_extras::{Column, TableBuilder},
};

const ROW_HEIGHT: f32 = 22.0;

pub(crate) fn render_results_table(ui: &mut Ui, rows: &[ResultRow], total: &TotalRow) {
    TableBuilder::new(ui)
        .id_salt("results_table")
        .striped(true)
        .resizable(false)
        .column(Column::remainder().at_least(UI_CONFIG.url_column_min_width).clip(true))
        .column(Column::auto().at_least(140.0))
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong(UI_TEXT.table_header_game.as_str());
            });
            header.col(|ui| {
                ui.strong(UI_TEXT.table_header_profit.as_str());
            });
        })
        .body(|mut body| {
            for row in rows {
                body.row(ROW_HEIGHT, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(row.url.as_str()).on_hover_text(row.url.as_str());
                    });
                    table_row.col(|ui| {
                        ui.label(RichText::new(&row.display).color(get_tone_color(row.tone)));
                    });
                });
            }
            body.row(ROW_HEIGHT, |mut table_row| {
                table_row.col(|ui| {
                    ui.strong(UI_TEXT.table_total.as_str());
                });
                table_row.col(|ui| {
                    ui.label(
                        RichText::new(&total.display)
                            .strong()
                            .color(get_tone_color(total.tone)),
                    );
                });
            });
        });
}
