/// UI widgets for FilmSleuth.

pub mod bar_chart;
pub mod line_chart;
pub mod pie_chart;
pub mod plot;
pub mod scatter_plot;
pub mod status_bar;
pub mod toolbar;
