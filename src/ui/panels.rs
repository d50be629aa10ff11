use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use eframe::egui::{self, Align, Color32, Layout, ProgressBar, RichText, ScrollArea, Ui};

use crate::color;
use crate::data::export;
use crate::data::model::{CaseRecord, CaseStatus, PartyKind};
use crate::data::stats::{average_debt, kind_shares, status_shares};
use crate::format::format_rub;
use crate::state::{AppState, Notice};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: title, record counts, export buttons, notices.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Реестр банкротов");
        ui.label(RichText::new("Федеральный ресурс").weak());
        ui.separator();

        ui.label(format!(
            "{} из {} записей",
            state.visible.len(),
            state.registry.len()
        ));
        ui.separator();

        if let Some(notice) = &state.notice {
            let text = match notice {
                Notice::Info(msg) => RichText::new(msg),
                Notice::Error(msg) => RichText::new(msg).color(Color32::RED),
            };
            ui.label(text);
            if ui.small_button("✕").clicked() {
                state.notice = None;
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
            if ui.button("Экспорт Excel").clicked() {
                export_excel(state);
            }
            if ui.button("Экспорт CSV").clicked() {
                export_csv_dialog(state);
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and registry distributions
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Фильтры");
    ui.separator();

    // ---- Search ----
    ui.strong("Поиск");
    ui.add(
        egui::TextEdit::singleline(&mut state.criteria.search)
            .hint_text("Поиск по названию, ИНН или номеру дела...")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);

    // ---- Status ----
    ui.strong("Статус");
    let status_text = state
        .criteria
        .status
        .map_or("Все статусы", |status| status.label());
    egui::ComboBox::from_id_salt("status_filter")
        .selected_text(status_text)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut state.criteria.status, None, "Все статусы");
            for status in CaseStatus::ALL {
                ui.selectable_value(&mut state.criteria.status, Some(status), status.label());
            }
        });
    ui.add_space(4.0);

    // ---- Kind ----
    ui.strong("Тип банкрота");
    let kind_text = state.criteria.kind.map_or("Все типы", |kind| kind.label());
    egui::ComboBox::from_id_salt("kind_filter")
        .selected_text(kind_text)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut state.criteria.kind, None, "Все типы");
            for kind in PartyKind::ALL {
                ui.selectable_value(&mut state.criteria.kind, Some(kind), kind.label());
            }
        });

    if state.criteria.is_active() {
        ui.add_space(4.0);
        if ui.button("✕ Сбросить").clicked() {
            state.reset_filters();
        }
    }

    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            distribution_panels(ui, state);
        });

    // Recompute visible indices after any control changes.
    state.refilter();
}

/// Registry-wide distributions. Independent of the active filters.
fn distribution_panels(ui: &mut Ui, state: &AppState) {
    ui.strong("Распределение по статусам");
    ui.add_space(2.0);
    for (status, share) in status_shares(&state.registry) {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(status.plural_label()).color(color::status_color(status)));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                ui.label(
                    RichText::new(format!("{} · {:.1}%", share.count, share.percentage)).weak(),
                );
            });
        });
        ui.add(ProgressBar::new(share.fraction()).fill(color::status_color(status)));
        ui.add_space(4.0);
    }

    ui.separator();

    ui.strong("Типы банкротов");
    ui.add_space(2.0);
    for (kind, share) in kind_shares(&state.registry) {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(kind.plural_label()).color(color::kind_color(kind)));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                ui.label(
                    RichText::new(format!("{} · {:.1}%", share.count, share.percentage)).weak(),
                );
            });
        });
        ui.add(ProgressBar::new(share.fraction()).fill(color::kind_color(kind)));
        ui.add_space(4.0);
    }

    ui.separator();

    ui.strong("Средняя задолженность");
    let average = average_debt(&state.registry).round() as u64;
    ui.label(RichText::new(format_rub(average)).heading().color(color::DEBT));
    ui.label(RichText::new("на одно дело в реестре").weak());
}

// ---------------------------------------------------------------------------
// Export actions
// ---------------------------------------------------------------------------

/// Ask for a target path and write the current view as CSV.
pub fn export_csv_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Сохранить CSV")
        .set_file_name(export::file_name(Utc::now()))
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = file else {
        return;
    };

    let records = state.visible_records();
    match write_view(&path, &records) {
        Ok(written) => {
            log::info!("Exported {written} records to {}", path.display());
            state.notice = Some(Notice::Info(format!("Экспортировано записей: {written}")));
        }
        Err(e) => {
            log::error!("CSV export failed: {e:#}");
            state.notice = Some(Notice::Error(format!("Ошибка экспорта: {e:#}")));
        }
    }
}

fn write_view(path: &Path, records: &[&CaseRecord]) -> anyhow::Result<usize> {
    let written = export::write_csv(path, records)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(written)
}

/// Excel export is not wired up; post the notice instead of failing silently.
pub fn export_excel(state: &mut AppState) {
    log::info!("Excel export requested, feature not implemented");
    state.notice = Some(Notice::Info(
        "Экспорт в Excel не реализован. Используйте экспорт в CSV.".to_string(),
    ));
}
