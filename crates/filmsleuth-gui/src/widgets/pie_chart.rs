/// Donut chart of genre shares with a legend.
use super::plot::no_data;
use crate::theme::FilmSleuthTheme;
use egui::{Pos2, Sense, Shape, Stroke, Ui, Vec2};
use filmsleuth_core::analysis::GenreShare;
use filmsleuth_core::model::format::{format_count, format_percent};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Maximum arc swept by one polygon; wider slices are split so every piece
/// stays convex.
const MAX_WEDGE: f32 = 0.1;
const HOLE_RATIO: f32 = 0.45;

pub fn pie_chart(ui: &mut Ui, shares: &[GenreShare], theme: &FilmSleuthTheme) {
    if shares.is_empty() {
        no_data(ui);
        return;
    }

    ui.horizontal_top(|ui| {
        let diameter = ui.available_height().clamp(200.0, 420.0).min(ui.available_width() * 0.6);
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::hover());
        let painter = ui.painter_at(rect);
        let centre = rect.center();
        let outer = diameter * 0.5 - 4.0;
        let inner = outer * HOLE_RATIO;

        let hovered = response.hover_pos().and_then(|p| {
            let d = p - centre;
            let r = d.length();
            if r >= inner && r <= outer {
                slice_at(shares, angle_from_top(d))
            } else {
                None
            }
        });

        let mut start = 0.0_f32;
        for (i, share) in shares.iter().enumerate() {
            let sweep = share.percent as f32 / 100.0 * TAU;
            let radius = if hovered == Some(i) { outer + 3.0 } else { outer };
            let color = theme.categorical(i);

            let steps = (sweep / MAX_WEDGE).ceil().max(1.0) as usize;
            for s in 0..steps {
                let a0 = start + sweep * s as f32 / steps as f32;
                let a1 = start + sweep * (s + 1) as f32 / steps as f32;
                painter.add(Shape::convex_polygon(
                    vec![
                        polar(centre, inner, a0),
                        polar(centre, radius, a0),
                        polar(centre, radius, a1),
                        polar(centre, inner, a1),
                    ],
                    color,
                    Stroke::NONE,
                ));
            }
            start += sweep;
        }

        if let Some(i) = hovered {
            let share = &shares[i];
            response.on_hover_text_at_pointer(format!(
                "{}\n{} titles ({})",
                share.genre,
                format_count(share.count),
                format_percent(share.percent)
            ));
        }

        ui.add_space(12.0);
        egui::ScrollArea::vertical()
            .id_salt("genre_legend")
            .show(ui, |ui| {
                for (i, share) in shares.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let (dot, _) =
                            ui.allocate_exact_size(Vec2::new(10.0, 10.0), Sense::hover());
                        ui.painter_at(dot)
                            .circle_filled(dot.center(), 4.0, theme.categorical(i));
                        let text = egui::RichText::new(share.genre.as_str()).size(12.0);
                        ui.label(if hovered == Some(i) { text.strong() } else { text });
                        ui.label(
                            egui::RichText::new(format_percent(share.percent))
                                .size(11.0)
                                .color(theme.text_muted),
                        );
                    });
                }
            });
    });
}

/// Angle clockwise from twelve o'clock, in 0..TAU.
fn angle_from_top(d: Vec2) -> f32 {
    (d.y.atan2(d.x) + FRAC_PI_2).rem_euclid(TAU)
}

fn polar(centre: Pos2, radius: f32, angle_from_top: f32) -> Pos2 {
    let a = angle_from_top - FRAC_PI_2;
    Pos2::new(centre.x + radius * a.cos(), centre.y + radius * a.sin())
}

/// Index of the slice covering `angle`, measured like [`angle_from_top`].
fn slice_at(shares: &[GenreShare], angle: f32) -> Option<usize> {
    let target = angle / TAU * 100.0;
    let mut acc = 0.0_f32;
    for (i, share) in shares.iter().enumerate() {
        acc += share.percent as f32;
        if target < acc {
            return Some(i);
        }
    }
    shares.len().checked_sub(1)
}
