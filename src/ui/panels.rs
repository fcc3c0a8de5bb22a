use std::ops::RangeInclusive;
use std::sync::Arc;

use article_explorer::config::{MAX_RESULTS, MIN_RESULTS};
use article_explorer::data::loader::load_file;
use article_explorer::data::model::Field;
use article_explorer::data::search::SearchMode;
use article_explorer::state::{AppState, SearchStatus, StatusMessage};
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

// ---------------------------------------------------------------------------
// Left side panel – search settings
// ---------------------------------------------------------------------------

/// Render the left search panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Search settings");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Field + mode + text ----
            ui.strong("Search field");
            egui::ComboBox::from_id_salt("search_field")
                .selected_text(state.controls.field.column_name())
                .show_ui(ui, |ui: &mut Ui| {
                    for field in Field::ALL {
                        ui.selectable_value(&mut state.controls.field, field, field.column_name());
                    }
                });

            ui.add_space(4.0);
            ui.strong("Search mode");
            ui.horizontal(|ui: &mut Ui| {
                ui.radio_value(&mut state.controls.mode, SearchMode::Literal, "Keyword");
                ui.radio_value(&mut state.controls.mode, SearchMode::Regex, "Regex");
            });
            if state.controls.mode == SearchMode::Regex {
                ui.checkbox(&mut state.controls.regex_case_insensitive, "Ignore case");
            }

            let response = ui.add(
                egui::TextEdit::singleline(&mut state.controls.text).hint_text("Search text"),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.separator();

            // ---- Author count range (top bucket means "cap or more") ----
            let top = dataset.capped_max();
            let cap = dataset.author_cap();
            let bucket_label = move |n: f64, _: RangeInclusive<usize>| {
                if n as u32 >= top {
                    format!("{cap}+")
                } else {
                    format!("{n}")
                }
            };
            ui.strong("Number of authors");
            ui.add(
                egui::Slider::new(&mut state.controls.author_min, 1..=top)
                    .text("min")
                    .custom_formatter(bucket_label),
            );
            ui.add(
                egui::Slider::new(&mut state.controls.author_max, 1..=top)
                    .text("max")
                    .custom_formatter(bucket_label),
            );
            if state.controls.author_min > state.controls.author_max {
                state.controls.author_max = state.controls.author_min;
            }
            ui.separator();

            // ---- Publication years ----
            let years: Vec<i32> = dataset.years().iter().copied().collect();
            let header_text = format!(
                "Publication years  ({}/{})",
                state.controls.selected_years.len(),
                years.len()
            );
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("years")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_years();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_years();
                        }
                    });
                    for year in years {
                        let mut checked = state.controls.selected_years.contains(&year);
                        if ui.checkbox(&mut checked, year.to_string()).changed() {
                            state.toggle_year(year);
                        }
                    }
                });
            ui.separator();

            // ---- Roles ----
            ui.strong("Author role");
            let labels = state.config.role_labels.clone();
            for label in &labels {
                let mut checked = state.controls.selected_roles.contains(label);
                if ui.checkbox(&mut checked, label.as_str()).changed() {
                    state.toggle_role(label);
                }
            }
            ui.separator();

            ui.strong("Articles to show");
            ui.add(egui::Slider::new(
                &mut state.controls.max_results,
                MIN_RESULTS..=MAX_RESULTS,
            ));

            ui.add_space(8.0);
            if ui.button(RichText::new("Search").strong()).clicked() || submitted {
                state.run_search();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let has_results = matches!(state.status, SearchStatus::Found(_));
            if ui
                .add_enabled(has_results, egui::Button::new("Export results…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} author rows, {} articles loaded",
                ds.len(),
                ds.article_count()
            ));
        }

        ui.separator();

        match &state.status_message {
            Some(StatusMessage::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            Some(StatusMessage::Info(msg)) => {
                ui.label(msg.as_str());
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open article table")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match load_file(&path, state.config.author_cap) {
            Ok(table) => {
                state.config.data_path = path;
                state.set_dataset(Arc::new(table));
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(StatusMessage::Error(format!("Error: {e}")));
            }
        }
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export results")
        .set_file_name(state.config.export_file_name.as_str())
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        state.status_message = Some(match state.export_results(&path) {
            Ok(n) => StatusMessage::Info(format!("Exported {n} articles to {}", path.display())),
            Err(e) => {
                log::error!("Export failed: {e}");
                StatusMessage::Error(format!("Error: {e}"))
            }
        });
    }
}
