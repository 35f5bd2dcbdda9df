/// Top action bar -- branding, filtered-data export, theme toggle, about.
use crate::state::DashboardState;
use crate::theme::{FilmSleuthTheme, ThemeMode};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut DashboardState, theme: &FilmSleuthTheme) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("🎬 FilmSleuth")
                .size(18.0)
                .strong()
                .color(theme.chart),
        );

        ui.separator();

        let can_export = !state.view().is_empty();
        let target = state.default_export_path();
        if ui
            .add_enabled(can_export, egui::Button::new("📤 Download CSV"))
            .on_hover_text(if can_export {
                format!("Write the filtered data to {}", target.display())
            } else {
                "Nothing to export for the current filters".to_owned()
            })
            .clicked()
        {
            // Outcome is recorded in `export_status` for the status bar.
            let _ = state.export_filtered(&target);
        }

        if ui.button("↺ Reset filters").clicked() {
            state.reset_filters();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About FilmSleuth").clicked() {
                state.show_about = true;
            }

            let (label, tip) = match state.theme {
                ThemeMode::Dark => ("☀", "Switch to light mode"),
                ThemeMode::Light => ("🌙", "Switch to dark mode"),
            };
            if ui.button(label).on_hover_text(tip).clicked() {
                state.toggle_theme();
            }
        });
    });
}
