/// Analysis modules: summary statistics and chart series over a filtered subset.

pub mod facets;
pub mod genres;
pub mod kpis;
pub mod scatter;
pub mod top_titles;
pub mod trends;

pub use facets::{facets, Facets};
pub use genres::{genre_distribution, GenreShare};
pub use kpis::{kpis, Kpis};
pub use scatter::{popularity_vs_rating, ScatterPoint, MAX_MARKER_SIZE, MIN_MARKER_SIZE};
pub use top_titles::{top_popular, top_popular_indices};
pub use trends::{rating_by_year, YearPoint};
