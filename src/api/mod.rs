mod colorizer;
mod fetch_scheduler;
mod hover;
mod metadata;
mod track;
mod track_config;
mod track_scene;

pub use colorizer::{Colorizer, PaletteColorizer, hue_for_cpu};
pub use fetch_scheduler::{DEFAULT_FETCH_DELAY, DataRequest, DataSupplier, FetchScheduler};
pub use hover::HoverBroadcast;
pub use metadata::{InMemoryMetadataStore, MetadataStore, ThreadInfo};
pub use track::{CpuTrack, TrackContext};
pub use track_config::{CpuTrackConfig, SliceBand, TrackTuning};
