/// Horizontal bar chart, one bar per labelled value, drawn top to bottom in
/// the given order.
use super::plot::no_data;
use crate::theme::FilmSleuthTheme;
use egui::{Align2, FontId, Pos2, Rect, Sense, Ui, Vec2};

/// One bar.
pub struct Bar<'a> {
    pub label: &'a str,
    pub value: f64,
    /// Drives the bar colour along the sequential scale.
    pub shade: f64,
    pub tooltip: String,
}

const BAR_HEIGHT: f32 = 24.0;
const LABEL_WIDTH: f32 = 220.0;

pub fn bar_chart(ui: &mut Ui, bars: &[Bar<'_>], theme: &FilmSleuthTheme) {
    if bars.is_empty() {
        no_data(ui);
        return;
    }

    let max_value = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let (shade_lo, shade_hi) = bars
        .iter()
        .map(|b| b.shade)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    let font = FontId::proportional(12.0);
    let bar_track = ui.available_width() - LABEL_WIDTH - 80.0;

    for bar in bars {
        let (row, response) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), BAR_HEIGHT), Sense::hover());
        let painter = ui.painter_at(row);

        if response.hovered() {
            painter.rect_filled(row, 2.0, theme.surface_hover);
        }

        painter.text(
            Pos2::new(row.left() + LABEL_WIDTH - 8.0, row.center().y),
            Align2::RIGHT_CENTER,
            truncate(bar.label, 32),
            font.clone(),
            theme.text_primary,
        );

        let frac = if max_value > 0.0 {
            (bar.value / max_value) as f32
        } else {
            0.0
        };
        let width = (bar_track * frac).max(1.0);
        let bar_rect = Rect::from_min_size(
            Pos2::new(row.left() + LABEL_WIDTH, row.top() + 3.0),
            Vec2::new(width, BAR_HEIGHT - 6.0),
        );
        let t = if shade_hi > shade_lo {
            ((bar.shade - shade_lo) / (shade_hi - shade_lo)) as f32
        } else {
            0.5
        };
        painter.rect_filled(bar_rect, 2.0, theme.sequential(t));

        painter.text(
            Pos2::new(bar_rect.right() + 6.0, row.center().y),
            Align2::LEFT_CENTER,
            format!("{:.1}", bar.value),
            font.clone(),
            theme.text_muted,
        );

        response.on_hover_text_at_pointer(bar.tooltip.as_str());
    }
}

/// Shorten `label` to at most `max_chars` characters, marking the cut with
/// an ellipsis.
fn truncate(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }
    let mut out: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
