/// Data tab: the filtered records in a virtualised table.
use crate::state::DashboardState;
use crate::widgets::plot::no_data;
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use filmsleuth_core::model::format::format_score;
use filmsleuth_core::model::CleanedRecord;

const HEADERS: [&str; 10] = [
    "Title",
    "Genre",
    "Year",
    "Country",
    "Rating",
    "Popularity",
    "Votes",
    "Duration",
    "Type",
    "Language",
];

pub fn table_panel(ui: &mut Ui, state: &DashboardState) {
    let indices = &state.view().indices;
    if indices.is_empty() {
        no_data(ui);
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::initial(260.0).at_least(120.0).clip(true))
        .column(Column::initial(200.0).clip(true))
        .columns(Column::auto(), HEADERS.len() - 2)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let record = &state.records[indices[row.index()]];
                row.col(|ui| {
                    let title = ui.label(record.title.as_str());
                    if let Some(overview) = title_hover(record) {
                        title.on_hover_text(overview);
                    }
                });
                row.col(|ui| {
                    ui.label(record.genre_label());
                });
                row.col(|ui| {
                    ui.label(record.year.to_string());
                });
                row.col(|ui| {
                    ui.label(record.country.as_str());
                });
                row.col(|ui| {
                    ui.label(format_score(record.rating));
                });
                row.col(|ui| {
                    ui.label(format_score(record.popularity));
                });
                row.col(|ui| {
                    ui.label(record.vote_count.to_string());
                });
                row.col(|ui| {
                    ui.label(record.runtime.map(|r| r.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(record.media_type.label());
                });
                row.col(|ui| {
                    ui.label(record.language.as_deref().unwrap_or_default());
                });
            });
        });
}

/// Hover text for a title cell: the synopsis, when the source has one.
fn title_hover(record: &CleanedRecord) -> Option<&str> {
    record
        .overview
        .as_deref()
        .map(str::trim)
        .filter(|o| !o.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_is_the_title_hover() {
        let mut record = CleanedRecord::new(2, "Heat", 1995, 8.3);
        assert_eq!(title_hover(&record), None);
        record.overview = Some("A group of professional bank robbers".into());
        assert_eq!(
            title_hover(&record),
            Some("A group of professional bank robbers")
        );
    }

    #[test]
    fn one_header_per_column() {
        assert_eq!(HEADERS.len(), 10);
        assert_eq!(HEADERS[HEADERS.len() - 1], "Language");
    }
}
