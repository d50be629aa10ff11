use eframe::egui::{self, Align, Align2, Layout, RichText, Sense, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color;
use crate::data::model::CaseStatus;
use crate::format::{format_date, format_rub};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Summary cards
// ---------------------------------------------------------------------------

/// Three headline cards above the table. The first and the last follow the
/// filtered view; the middle one counts active cases within it.
fn summary_cards(ui: &mut Ui, state: &AppState) {
    let summary = state.summary();
    ui.columns(3, |columns: &mut [Ui]| {
        card(
            &mut columns[0],
            "Всего записей",
            RichText::new(summary.count.to_string()).heading().strong(),
            format!("из {} в базе", state.registry.len()),
        );
        card(
            &mut columns[1],
            "Активных дел",
            RichText::new(summary.active_count.to_string())
                .heading()
                .color(color::status_color(CaseStatus::Active)),
            "в процессе".to_string(),
        );
        card(
            &mut columns[2],
            "Общая задолженность",
            RichText::new(format_rub(summary.total_debt))
                .heading()
                .color(color::DEBT),
            "по фильтрам".to_string(),
        );
    });
}

fn card(ui: &mut Ui, title: &str, value: RichText, caption: String) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).weak());
        ui.label(value);
        ui.label(RichText::new(caption).weak().small());
    });
}

// ---------------------------------------------------------------------------
// Record table (central panel)
// ---------------------------------------------------------------------------

/// Render the summary cards and the record table for the current view.
pub fn registry_table(ui: &mut Ui, state: &mut AppState) {
    summary_cards(ui, state);
    ui.add_space(8.0);

    if state.visible.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(RichText::new("Нет результатов по заданным критериям").weak());
        });
        return;
    }

    // Clicks are collected here and applied after the table releases its
    // borrows.
    let mut clicked: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .auto_shrink([false, false])
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto().at_least(110.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .header(22.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Название/ФИО");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("ИНН");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Тип");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Статус");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Сумма долга");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Номер дела");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Дата начала");
            });
            header.col(|_ui: &mut Ui| {});
        })
        .body(|mut body| {
            for &index in &state.visible {
                let Some(record) = state.registry.get(index) else {
                    continue;
                };
                body.row(26.0, |mut row| {
                    row.set_selected(state.selected == Some(index));

                    row.col(|ui: &mut Ui| {
                        ui.label(&record.name);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.monospace(&record.tax_id);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(
                            RichText::new(record.kind.short_label())
                                .color(color::kind_color(record.kind)),
                        );
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(
                            RichText::new(record.status.label())
                                .color(color::status_color(record.status)),
                        );
                    });
                    row.col(|ui: &mut Ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                            ui.label(RichText::new(format_rub(record.debt_amount)).color(color::DEBT));
                        });
                    });
                    row.col(|ui: &mut Ui| {
                        ui.monospace(&record.case_number);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_date(record.start_date));
                    });
                    row.col(|ui: &mut Ui| {
                        if ui.small_button("Подробнее").clicked() {
                            clicked = Some(index);
                        }
                    });

                    if row.response().clicked() {
                        clicked = Some(index);
                    }
                });
            }
        });

    if let Some(index) = clicked {
        state.select(index);
    }
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// Anchored window with the full record, shown while a row is selected.
pub fn detail_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(record) = state.selected_record().cloned() else {
        return;
    };

    let mut open = true;
    egui::Window::new(RichText::new(&record.name).strong())
        .id(egui::Id::new("case_detail"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui: &mut Ui| {
            ui.label(RichText::new("Полная информация о деле о банкротстве").weak());
            ui.add_space(8.0);

            egui::Grid::new("case_detail_fields")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    ui.label(RichText::new("ИНН").weak());
                    ui.monospace(&record.tax_id);
                    ui.end_row();

                    ui.label(RichText::new("Номер дела").weak());
                    ui.monospace(&record.case_number);
                    ui.end_row();

                    ui.label(RichText::new("Тип").weak());
                    ui.label(
                        RichText::new(record.kind.label()).color(color::kind_color(record.kind)),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Статус").weak());
                    ui.label(
                        RichText::new(record.status.label())
                            .color(color::status_color(record.status)),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Сумма долга").weak());
                    ui.label(
                        RichText::new(format_rub(record.debt_amount))
                            .strong()
                            .color(color::DEBT),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Дата начала процедуры").weak());
                    ui.label(format_date(record.start_date));
                    ui.end_row();

                    ui.label(RichText::new("Регион").weak());
                    ui.label(&record.region);
                    ui.end_row();

                    ui.label(RichText::new("Арбитражный управляющий").weak());
                    ui.label(&record.administrator);
                    ui.end_row();
                });
        });

    if !open {
        state.close_detail();
    }
}
