/// FilmSleuth GUI: egui-based dashboard frontend.
///
/// This crate contains all UI code. Loading, cleaning, filtering, and
/// aggregation live in `filmsleuth-core`; [`state::DashboardState`] is the
/// only mutable state and can be driven without a window.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::FilmSleuthApp;
pub use state::{ChartTab, DashboardState, DashboardView};
pub use theme::ThemeMode;
