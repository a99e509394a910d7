pub mod coverage;
pub mod data_window;
pub mod resolution;
pub mod time_scale;
pub mod types;

pub use coverage::is_sufficient;
pub use data_window::{DataWindow, SliceData, SliceRecord, SummaryData, TrackData};
pub use resolution::select_resolution;
pub use time_scale::TimeScale;
pub use types::{GroupId, OwnerId, TimeSpan, TrackId, Viewport};
