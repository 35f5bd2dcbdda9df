/// Popularity (x) vs. rating (y) scatter. Marker diameter follows vote
/// count; colour follows release year along the sequential scale.
use super::plot::{allocate_canvas, extent, no_data, PlotArea};
use crate::theme::FilmSleuthTheme;
use egui::{Stroke, Ui};
use filmsleuth_core::analysis::ScatterPoint;
use filmsleuth_core::model::format::{format_count, format_score};
use filmsleuth_core::model::CleanedRecord;

/// Draw `points`, whose `index` fields refer into `records`.
pub fn scatter_plot(
    ui: &mut Ui,
    points: &[ScatterPoint],
    records: &[CleanedRecord],
    theme: &FilmSleuthTheme,
) {
    let (Some(xs), Some(ys)) = (
        extent(points.iter().map(|p| p.popularity)),
        extent(points.iter().map(|p| p.rating)),
    ) else {
        no_data(ui);
        return;
    };
    let years = extent(points.iter().map(|p| p.year as f64)).unwrap_or((0.0, 0.0));

    let (rect, response) = allocate_canvas(ui, 300.0);
    let painter = ui.painter_at(rect);
    let area = PlotArea::new(rect, (0.0_f64.min(xs.0), xs.1), (0.0_f64.min(ys.0), ys.1.max(10.0)));
    area.draw_axes(
        &painter,
        theme,
        5,
        |x| format!("{x:.0}"),
        |y| format!("{y:.1}"),
    );

    let pointer = response.hover_pos();
    let mut hovered: Option<(f32, &ScatterPoint)> = None;

    for point in points {
        let pos = area.to_screen(point.popularity, point.rating);
        let radius = point.marker_size * 0.5;
        let t = if years.1 > years.0 {
            ((point.year as f64 - years.0) / (years.1 - years.0)) as f32
        } else {
            0.5
        };
        let color = theme.sequential(t).gamma_multiply(0.75);
        painter.circle_filled(pos, radius, color);

        if let Some(p) = pointer {
            let d = p.distance(pos);
            if d <= radius.max(4.0) && hovered.map_or(true, |(best, _)| d < best) {
                hovered = Some((d, point));
            }
        }
    }

    if let Some((_, point)) = hovered {
        let pos = area.to_screen(point.popularity, point.rating);
        painter.circle_stroke(pos, point.marker_size * 0.5 + 1.5, Stroke::new(1.5, theme.chart));
        if let Some(record) = records.get(point.index) {
            response.on_hover_text_at_pointer(format!(
                "{} ({})\nPopularity: {}\nRating: {}\nVotes: {}",
                record.title,
                record.year,
                format_score(record.popularity),
                format_score(record.rating),
                format_count(record.vote_count)
            ));
        }
    }
}
