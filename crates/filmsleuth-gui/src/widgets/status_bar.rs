/// Bottom status bar: dataset source, load/clean counts, export outcome.
use crate::state::DashboardState;
use crate::theme::FilmSleuthTheme;
use egui::Ui;
use filmsleuth_core::model::format::format_count;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &DashboardState, theme: &FilmSleuthTheme) {
    let cleaning = &state.report.cleaning;
    let color_weak = theme.text_muted;
    let color_normal = theme.text_primary;

    ui.horizontal(|ui| {
        let source = state
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| state.report.source.clone());
        ui.label(egui::RichText::new(source).size(12.0).color(color_normal))
            .on_hover_text(state.report.source.as_str());

        ui.separator();

        ui.label(
            egui::RichText::new(format!(
                "{} rows loaded",
                format_count(cleaning.input_rows as u64)
            ))
            .size(12.0)
            .color(color_normal),
        );

        ui.separator();

        let dropped = egui::RichText::new(format!(
            "{} dropped",
            format_count(cleaning.dropped as u64)
        ))
        .size(12.0);
        let dropped = if cleaning.dropped > 0 {
            dropped.color(theme.warning)
        } else {
            dropped.color(color_weak)
        };
        ui.label(dropped).on_hover_text(format!(
            "Missing title: {}\nMissing rating: {}\nInvalid rating: {}\nInvalid date: {}\nUnreadable: {}",
            cleaning.missing_title,
            cleaning.missing_rating,
            cleaning.invalid_rating,
            cleaning.invalid_date,
            cleaning.unreadable
        ));

        ui.separator();

        ui.label(
            egui::RichText::new(format!(
                "{} of {} shown",
                format_count(state.view().indices.len() as u64),
                format_count(state.records.len() as u64)
            ))
            .size(12.0)
            .color(color_normal),
        );

        if let Some(status) = &state.export_status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (text, color) = match status {
                    Ok(msg) => (msg.as_str(), theme.success),
                    Err(msg) => (msg.as_str(), theme.warning),
                };
                ui.label(egui::RichText::new(text).size(11.0).color(color));
            });
        }
    });
}
