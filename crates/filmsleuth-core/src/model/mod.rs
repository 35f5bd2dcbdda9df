/// Data model for FilmSleuth.
///
/// Raw rows as read from the source file, the cleaned records derived from
/// them, and the display-formatting helpers shared by every frontend.
pub mod cleaned;
pub mod format;
pub mod raw;

pub use cleaned::{CleanedRecord, MediaType, Runtime, UNKNOWN_LABEL};
pub use raw::{RawRecord, RawValue};
