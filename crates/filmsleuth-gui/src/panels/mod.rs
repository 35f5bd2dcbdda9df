/// Dashboard panels composed by the app layout.

pub mod chart_panel;
pub mod filter_panel;
pub mod kpi_panel;
pub mod table_panel;
