use article_explorer::data::model::{ArticleTable, AuthorEntry};
use article_explorer::data::results::ArticleResult;
use article_explorer::state::{AppState, SearchStatus};
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use super::panels;

const FOUND_COLOR: Color32 = Color32::from_rgb(90, 180, 90);
const EMPTY_COLOR: Color32 = Color32::from_rgb(230, 160, 40);

// ---------------------------------------------------------------------------
// Grouped results (central panel)
// ---------------------------------------------------------------------------

/// Render the article list for the last search.
pub fn results_view(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = state.dataset.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to browse articles  (File → Open…)");
        });
        return;
    };

    let mut export_clicked = false;
    match &state.status {
        SearchStatus::NotSearched => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Choose search settings on the left, then press Search");
            });
        }
        SearchStatus::NoMatch => {
            ui.label(
                RichText::new("No matching articles. Adjust the search settings and try again.")
                    .color(EMPTY_COLOR),
            );
        }
        SearchStatus::Found(outcome) => {
            let assembly = &outcome.assembly;
            ui.horizontal(|ui: &mut Ui| {
                ui.label(
                    RichText::new(format!(
                        "Found {} matching articles, showing {}",
                        assembly.matched_articles,
                        assembly.articles.len()
                    ))
                    .color(FOUND_COLOR),
                );
                if ui.button("Export CSV…").clicked() {
                    export_clicked = true;
                }
            });
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    for (index, article) in assembly.articles.iter().enumerate() {
                        article_entry(ui, &dataset, index, article);
                    }
                });
        }
    }

    if export_clicked {
        panels::export_dialog(state);
    }
}

fn article_entry(ui: &mut Ui, table: &ArticleTable, index: usize, article: &ArticleResult) {
    let record = table.record(article.row);
    let derived = table.derived(article.row);
    let header = format!("{} ({})", record.title, record.identifier);

    egui::CollapsingHeader::new(header)
        .id_salt(("article", index))
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            let year = derived
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            detail_line(ui, "DOI", &record.identifier);
            detail_line(ui, "Year", &year);
            detail_line(ui, "Authors", &derived.author_count.to_string());
            detail_line(ui, "Subjects", &record.subjects);
            detail_line(ui, "Keywords", &record.keywords);
            detail_line(ui, "Abstract", &record.abstract_text);

            ui.add_space(4.0);
            ui.strong("Matching authors:");
            ui.push_id(("roster", index), |ui: &mut Ui| {
                roster_table(ui, &article.roster);
            });
        });
}

fn detail_line(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.strong(format!("{label}:"));
        ui.label(value);
    });
}

fn roster_table(ui: &mut Ui, roster: &[AuthorEntry]) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(200.0).clip(true))
        .column(Column::remainder().at_least(120.0))
        .header(20.0, |mut header| {
            for name in ["Author", "Affiliation", "Role"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for entry in roster {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(entry.author.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(entry.affiliation.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(entry.role.as_str());
                    });
                });
            }
        });
}
