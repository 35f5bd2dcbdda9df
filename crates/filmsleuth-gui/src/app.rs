/// Main `eframe::App` implementation for FilmSleuth.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::DashboardState;
use crate::theme::FilmSleuthTheme;
use crate::widgets;

/// The FilmSleuth dashboard application.
pub struct FilmSleuthApp {
    state: DashboardState,
}

impl FilmSleuthApp {
    /// Create the app from pre-built state.
    ///
    /// The dataset should already be loaded and cleaned (see
    /// [`DashboardState::from_path`]) *before* `eframe::run_native` is
    /// called, so the first frame has data to draw.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: DashboardState) -> Self {
        FilmSleuthTheme::for_mode(state.theme).apply(&cc.egui_ctx);
        Self { state }
    }
}

impl eframe::App for FilmSleuthApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Every frame, so a toggle takes effect on the next rendered frame.
        let theme = FilmSleuthTheme::for_mode(self.state.theme);
        theme.apply(ctx);

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state, &theme);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About FilmSleuth")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let muted = theme.text_muted;
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🎬 FilmSleuth")
                            .size(24.0)
                            .strong()
                            .color(theme.chart),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Explore a movie metadata spreadsheet:\n\
                             filter by year, genre, country and rating,\n\
                             and compare titles across four charts.",
                        )
                        .size(12.0),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.hyperlink_to(
                        "github.com/Swatto86/FilmSleuth",
                        "https://github.com/Swatto86/FilmSleuth",
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("MIT License - Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &theme);
                ui.add_space(2.0);
            });

        // ── Left sidebar ──────────────────────────────────────────────────
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .min_width(200.0)
            .max_width(420.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("filters")
                    .show(ui, |ui| {
                        panels::filter_panel::filter_panel(ui, &mut self.state, &theme);
                    });
            });

        // ── Central panel (KPIs + charts) ─────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::kpi_panel::kpi_panel(ui, self.state.view(), &theme);
            ui.add_space(8.0);
            panels::chart_panel::chart_panel(ui, &mut self.state, &theme);
        });
    }
}
