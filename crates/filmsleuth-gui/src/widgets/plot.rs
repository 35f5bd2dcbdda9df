/// Shared plotting frame: data-to-screen mapping, axes, and the empty-state
/// message used by every chart.
use crate::theme::FilmSleuthTheme;
use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke, Ui, Vec2};

/// Shown in place of a chart when the filtered subset is empty.
pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

/// Space reserved around the plot area for tick labels.
const MARGIN_LEFT: f32 = 52.0;
const MARGIN_BOTTOM: f32 = 28.0;
const MARGIN_TOP: f32 = 10.0;
const MARGIN_RIGHT: f32 = 16.0;

/// A rectangular plot area with linear x and y axes.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    /// Inner rect, excluding tick-label margins.
    pub rect: Rect,
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl PlotArea {
    /// Fit a plot area inside `outer`, leaving room for axis labels.
    pub fn new(outer: Rect, x: (f64, f64), y: (f64, f64)) -> Self {
        let rect = Rect::from_min_max(
            Pos2::new(outer.left() + MARGIN_LEFT, outer.top() + MARGIN_TOP),
            Pos2::new(outer.right() - MARGIN_RIGHT, outer.bottom() - MARGIN_BOTTOM),
        );
        Self {
            rect,
            x: padded(x),
            y: padded(y),
        }
    }

    /// Map a data point to screen coordinates. Larger y is higher up.
    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        let tx = ((x - self.x.0) / (self.x.1 - self.x.0)) as f32;
        let ty = ((y - self.y.0) / (self.y.1 - self.y.0)) as f32;
        Pos2::new(
            self.rect.left() + tx * self.rect.width(),
            self.rect.bottom() - ty * self.rect.height(),
        )
    }

    /// Draw gridlines, both axes, and tick labels.
    pub fn draw_axes(
        &self,
        painter: &Painter,
        theme: &FilmSleuthTheme,
        ticks: usize,
        x_label: impl Fn(f64) -> String,
        y_label: impl Fn(f64) -> String,
    ) {
        let font = FontId::proportional(11.0);
        let grid = Stroke::new(1.0, theme.grid);
        let axis = Stroke::new(1.0, theme.text_muted);

        for i in 0..=ticks {
            let t = i as f64 / ticks as f64;

            let yv = self.y.0 + t * (self.y.1 - self.y.0);
            let p = self.to_screen(self.x.0, yv);
            painter.line_segment([p, Pos2::new(self.rect.right(), p.y)], grid);
            painter.text(
                Pos2::new(p.x - 6.0, p.y),
                Align2::RIGHT_CENTER,
                y_label(yv),
                font.clone(),
                theme.text_muted,
            );

            let xv = self.x.0 + t * (self.x.1 - self.x.0);
            let p = self.to_screen(xv, self.y.0);
            painter.text(
                Pos2::new(p.x, p.y + 4.0),
                Align2::CENTER_TOP,
                x_label(xv),
                font.clone(),
                theme.text_muted,
            );
        }

        painter.line_segment([self.rect.left_bottom(), self.rect.right_bottom()], axis);
        painter.line_segment([self.rect.left_top(), self.rect.left_bottom()], axis);
    }
}

/// Widen a degenerate range so a single value still plots mid-axis.
pub fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    if !(lo.is_finite() && hi.is_finite()) {
        return (0.0, 1.0);
    }
    if hi > lo {
        (lo, hi)
    } else {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        (lo - pad, hi + pad)
    }
}

/// Min and max of `values`, `None` when empty.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Allocate the chart canvas: full width, at least `min_height` tall.
pub fn allocate_canvas(ui: &mut Ui, min_height: f32) -> (Rect, egui::Response) {
    let size = Vec2::new(
        ui.available_width(),
        ui.available_height().max(min_height),
    );
    ui.allocate_exact_size(size, egui::Sense::hover())
}

/// Draw the empty-state message centred in the remaining space.
pub fn no_data(ui: &mut Ui) {
    let color = ui.visuals().weak_text_color();
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new(NO_DATA_MESSAGE).color(color).italics());
    });
}
