//! tracklane-rs: per-CPU scheduling track engine for trace timeline viewers.
//!
//! This crate owns one horizontal lane of a zoomable timeline: it decides
//! when held slice data is stale, schedules debounced re-fetches at a
//! quantized resolution, paints either an aggregated utilization curve or
//! individual thread slices, and maps pointer positions back to records.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{CpuTrack, CpuTrackConfig};
pub use error::{TrackError, TrackResult};
