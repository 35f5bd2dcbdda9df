/// Colour scheme and visual theme for FilmSleuth.
///
/// Dark is the default: gold text and chart ink on a near-black background.
/// Light swaps to a white background with slate text and a deeper gold.
/// All colour constants live here so the rest of the UI code references
/// semantically-named values rather than raw hex codes.
use egui::{Color32, Stroke, Visuals};

/// Which theme is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Toggle between dark and light.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Sequential scale used for bar fills, low to high.
const SUNSET: [[u8; 3]; 7] = [
    [243, 231, 155],
    [250, 196, 132],
    [248, 160, 126],
    [235, 127, 134],
    [206, 102, 147],
    [160, 89, 160],
    [92, 83, 165],
];

/// Categorical palette used for pie slices and scatter years.
const AGSUNSET: [[u8; 3]; 7] = [
    [75, 41, 145],
    [135, 44, 162],
    [192, 54, 157],
    [234, 79, 136],
    [250, 120, 118],
    [246, 169, 122],
    [237, 217, 163],
];

/// Semantic colour palette for FilmSleuth.
pub struct FilmSleuthTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    /// Ink for lines, markers, and axis labels.
    pub chart: Color32,
    pub grid: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub separator: Color32,
    pub selection: Color32,
}

impl FilmSleuthTheme {
    /// Dark theme, the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x0e, 0x11, 0x17),
            surface: Color32::from_rgb(0x1a, 0x1d, 0x24),
            surface_hover: Color32::from_rgb(0x26, 0x2a, 0x33),
            text_primary: Color32::from_rgb(0xf2, 0xc9, 0x4c),
            text_muted: Color32::from_rgb(0x9c, 0x8a, 0x5a),
            chart: Color32::from_rgb(0xf2, 0xc9, 0x4c),
            grid: Color32::from_rgb(0x2e, 0x32, 0x3c),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            separator: Color32::from_rgb(0x30, 0x33, 0x3d),
            selection: Color32::from_rgb(0x4a, 0x3c, 0x12),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xff, 0xff, 0xff),
            surface: Color32::from_rgb(0xf3, 0xf4, 0xf6),
            surface_hover: Color32::from_rgb(0xe5, 0xe7, 0xeb),
            text_primary: Color32::from_rgb(0x11, 0x18, 0x27),
            text_muted: Color32::from_rgb(0x6b, 0x72, 0x80),
            chart: Color32::from_rgb(0xe6, 0xb8, 0x00),
            grid: Color32::from_rgb(0xe5, 0xe7, 0xeb),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
            separator: Color32::from_rgb(0xd1, 0xd5, 0xdb),
            selection: Color32::from_rgba_premultiplied(0xe6, 0xb8, 0x00, 0x40),
        }
    }

    /// Get the theme for the given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.override_text_color = Some(self.text_primary);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.hyperlink_color = self.chart;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.chart);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.separator);

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.weak_bg_fill = self.surface;

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.weak_bg_fill = self.surface_hover;

        visuals.widgets.active.bg_fill = self.chart;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Colour on the sequential scale for `t` in 0.0 – 1.0.
    pub fn sequential(&self, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0) * (SUNSET.len() - 1) as f32;
        let lo = t.floor() as usize;
        let hi = (lo + 1).min(SUNSET.len() - 1);
        lerp_color(rgb(SUNSET[lo]), rgb(SUNSET[hi]), t - lo as f32)
    }

    /// The `i`-th categorical colour, cycling through the palette.
    pub fn categorical(&self, i: usize) -> Color32 {
        rgb(AGSUNSET[i % AGSUNSET.len()])
    }
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Linear interpolation between two colours.
fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        (a.r() as f32 * (1.0 - t) + b.r() as f32 * t) as u8,
        (a.g() as f32 * (1.0 - t) + b.g() as f32 * t) as u8,
        (a.b() as f32 * (1.0 - t) + b.b() as f32 * t) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let mut mode = ThemeMode::default();
        assert_eq!(mode, ThemeMode::Dark);
        mode.toggle();
        assert_eq!(mode, ThemeMode::Light);
        mode.toggle();
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn sequential_scale_endpoints() {
        let theme = FilmSleuthTheme::dark();
        assert_eq!(theme.sequential(0.0), Color32::from_rgb(243, 231, 155));
        assert_eq!(theme.sequential(1.0), Color32::from_rgb(92, 83, 165));
        assert_eq!(theme.sequential(7.0), theme.sequential(1.0));
    }

    #[test]
    fn categorical_palette_cycles() {
        let theme = FilmSleuthTheme::light();
        assert_eq!(theme.categorical(0), theme.categorical(7));
        assert_ne!(theme.categorical(0), theme.categorical(1));
    }
}
