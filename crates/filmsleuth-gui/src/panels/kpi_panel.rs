/// Row of KPI cards above the charts.
use crate::state::DashboardView;
use crate::theme::FilmSleuthTheme;
use egui::Ui;
use filmsleuth_core::model::format::{format_count, format_score};

pub fn kpi_panel(ui: &mut Ui, view: &DashboardView, theme: &FilmSleuthTheme) {
    let k = &view.kpis;
    let cards = [
        ("🎬 Total Titles", format_count(k.total as u64)),
        ("⭐ Average Rating", format_score(k.avg_rating)),
        ("🔥 Average Popularity", format_score(k.avg_popularity)),
    ];

    ui.columns(cards.len(), |columns| {
        for (ui, (label, value)) in columns.iter_mut().zip(cards) {
            egui::Frame::group(ui.style())
                .fill(theme.chart.gamma_multiply(0.06))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new(label).size(12.0).color(theme.text_muted));
                    ui.label(
                        egui::RichText::new(value)
                            .size(24.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                });
        }
    });
}
