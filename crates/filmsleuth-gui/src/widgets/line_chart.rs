/// Line chart of mean rating per release year.
use super::plot::{allocate_canvas, extent, PlotArea};
use crate::theme::FilmSleuthTheme;
use egui::{Shape, Stroke, Ui};
use filmsleuth_core::analysis::YearPoint;
use filmsleuth_core::model::format::{format_count, format_score};

pub fn line_chart(ui: &mut Ui, points: &[YearPoint], theme: &FilmSleuthTheme) {
    let (Some(xs), Some(ys)) = (
        extent(points.iter().map(|p| p.year as f64)),
        extent(points.iter().map(|p| p.mean_rating)),
    ) else {
        super::plot::no_data(ui);
        return;
    };

    let (rect, response) = allocate_canvas(ui, 260.0);
    let painter = ui.painter_at(rect);
    let area = PlotArea::new(rect, xs, (0.0_f64.min(ys.0), ys.1.max(10.0)));
    area.draw_axes(
        &painter,
        theme,
        5,
        |x| format!("{}", x.round() as i64),
        |y| format!("{y:.1}"),
    );

    let screen: Vec<egui::Pos2> = points
        .iter()
        .map(|p| area.to_screen(p.year as f64, p.mean_rating))
        .collect();
    if screen.len() > 1 {
        painter.add(Shape::line(screen.clone(), Stroke::new(2.0, theme.chart)));
    }
    for p in &screen {
        painter.circle_filled(*p, 3.0, theme.chart);
    }

    // Tooltip for the year nearest the pointer.
    if let Some(pointer) = response.hover_pos() {
        let nearest = screen
            .iter()
            .enumerate()
            .min_by(|a, b| (a.1.x - pointer.x).abs().total_cmp(&(b.1.x - pointer.x).abs()));
        if let Some((i, pos)) = nearest {
            painter.circle_filled(*pos, 5.0, theme.chart);
            let p = &points[i];
            response.on_hover_text_at_pointer(format!(
                "{}\nAverage rating: {}\nTitles: {}",
                p.year,
                format_score(p.mean_rating),
                format_count(p.titles)
            ));
        }
    }
}
