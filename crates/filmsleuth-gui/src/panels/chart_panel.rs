/// Central chart tabs.
use super::table_panel::table_panel;
use crate::state::{ChartTab, DashboardState};
use crate::theme::FilmSleuthTheme;
use crate::widgets::bar_chart::{bar_chart, Bar};
use crate::widgets::line_chart::line_chart;
use crate::widgets::pie_chart::pie_chart;
use crate::widgets::scatter_plot::scatter_plot;
use egui::Ui;
use filmsleuth_core::model::format::{format_count, format_score};

/// Draw the tab strip and the active tab's chart.
pub fn chart_panel(ui: &mut Ui, state: &mut DashboardState, theme: &FilmSleuthTheme) {
    ui.horizontal(|ui| {
        for tab in ChartTab::ALL {
            ui.selectable_value(&mut state.tab, tab, tab.label());
        }
    });
    ui.separator();
    ui.add_space(4.0);

    let state = &*state;
    let view = state.view();
    match state.tab {
        ChartTab::RatingByYear => {
            ui.label(egui::RichText::new("Average Rating by Year").strong());
            line_chart(ui, &view.rating_by_year, theme);
        }
        ChartTab::TopPopular => {
            ui.label(egui::RichText::new("Top 10 Most Popular Titles").strong());
            let bars: Vec<Bar<'_>> = view
                .top_popular
                .iter()
                .map(|&i| {
                    let r = &state.records[i];
                    Bar {
                        label: r.title.as_str(),
                        value: r.popularity,
                        shade: r.rating,
                        tooltip: format!(
                            "{} ({})\nPopularity: {}\nRating: {}\nVotes: {}",
                            r.title,
                            r.year,
                            format_score(r.popularity),
                            format_score(r.rating),
                            format_count(r.vote_count)
                        ),
                    }
                })
                .collect();
            bar_chart(ui, &bars, theme);
        }
        ChartTab::GenreDistribution => {
            ui.label(egui::RichText::new("Genre Distribution").strong());
            pie_chart(ui, &view.genres, theme);
        }
        ChartTab::PopularityVsRating => {
            ui.label(egui::RichText::new("Popularity vs Rating").strong());
            scatter_plot(ui, &view.scatter, &state.records, theme);
        }
        ChartTab::Data => table_panel(ui, state),
    }
}
