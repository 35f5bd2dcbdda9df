/// Sidebar filter controls and theme selector.
///
/// Every control writes through a `DashboardState` setter, which recomputes
/// the view before the next frame is drawn.
use crate::state::DashboardState;
use crate::theme::{FilmSleuthTheme, ThemeMode};
use egui::Ui;
use filmsleuth_core::model::MediaType;

pub fn filter_panel(ui: &mut Ui, state: &mut DashboardState, theme: &FilmSleuthTheme) {
    ui.heading("Filters");
    ui.add_space(6.0);

    // ── Release year ─────────────────────────────────────────────────
    if let (Some((lo, hi)), Some((mut from, mut to))) =
        (state.facets.year_span(), state.year_range())
    {
        ui.label(egui::RichText::new("Release year").strong());
        let mut changed = ui
            .add(egui::Slider::new(&mut from, lo..=hi).text("from"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut to, lo..=hi).text("to"))
            .changed();
        if changed {
            state.set_year_range(from, to);
        }
        ui.add_space(6.0);
    }

    // ── Rating ───────────────────────────────────────────────────────
    ui.label(egui::RichText::new("Minimum rating").strong());
    let mut min_rating = state.min_rating();
    if ui
        .add(egui::Slider::new(&mut min_rating, 0.0..=10.0).step_by(0.1))
        .changed()
    {
        state.set_min_rating(min_rating);
    }
    ui.add_space(6.0);

    // ── Type ─────────────────────────────────────────────────────────
    let mut media_type = state.predicate().media_type;
    egui::ComboBox::from_label("Type")
        .selected_text(media_type.map_or("All", MediaType::label))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut media_type, None, "All");
            ui.selectable_value(&mut media_type, Some(MediaType::Movie), MediaType::Movie.label());
            ui.selectable_value(&mut media_type, Some(MediaType::Show), MediaType::Show.label());
        });
    if media_type != state.predicate().media_type {
        state.set_media_type(media_type);
    }
    ui.add_space(6.0);

    // ── Genres / countries ───────────────────────────────────────────
    let genres = state.facets.genres.clone();
    egui::CollapsingHeader::new(format!("Genres ({} selected)", state.predicate().genres.len()))
        .default_open(true)
        .show(ui, |ui| {
            if genres.is_empty() {
                ui.label(egui::RichText::new("No genre column").color(theme.text_muted));
            }
            for genre in &genres {
                let mut checked = state.is_genre_selected(genre);
                if ui.checkbox(&mut checked, genre.as_str()).changed() {
                    state.toggle_genre(genre);
                }
            }
        });

    let countries = state.facets.countries.clone();
    egui::CollapsingHeader::new(format!(
        "Countries ({} selected)",
        state.predicate().countries.len()
    ))
    .default_open(countries.len() <= 12)
    .show(ui, |ui| {
        for country in &countries {
            let mut checked = state.is_country_selected(country);
            if ui.checkbox(&mut checked, country.as_str()).changed() {
                state.toggle_country(country);
            }
        }
    });

    ui.add_space(8.0);
    ui.separator();

    // ── Appearance ───────────────────────────────────────────────────
    ui.label(egui::RichText::new("Theme").strong());
    let mut mode = state.theme;
    ui.horizontal(|ui| {
        ui.radio_value(&mut mode, ThemeMode::Dark, ThemeMode::Dark.label());
        ui.radio_value(&mut mode, ThemeMode::Light, ThemeMode::Light.label());
    });
    if mode != state.theme {
        state.set_theme(mode);
    }
}
