use serde::{Deserialize, Serialize};

use crate::api::fetch_scheduler::DEFAULT_FETCH_DELAY;
use crate::core::TrackId;
use crate::error::{TrackError, TrackResult};

/// Vertical band slices and the summary curve occupy inside the lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceBand {
    pub margin_top: f64,
    pub height: f64,
}

impl Default for SliceBand {
    fn default() -> Self {
        Self {
            margin_top: 5.0,
            height: 30.0,
        }
    }
}

impl SliceBand {
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.margin_top + self.height
    }

    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        y >= self.margin_top && y <= self.bottom()
    }

    fn validate(self) -> TrackResult<()> {
        if !self.margin_top.is_finite() || self.margin_top < 0.0 {
            return Err(TrackError::InvalidData(
                "band margin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(TrackError::InvalidData(
                "band height must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Tuning for one track's rendering and fetch behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackTuning {
    pub band: SliceBand,
    /// Debounce window between insufficiency and the issued fetch.
    pub fetch_delay: f64,
    pub title_font_size_px: f64,
    pub subtitle_font_size_px: f64,
    /// Slices narrower than this are numerical noise and are not drawn.
    pub min_visible_slice_px: f64,
    /// Slices narrower than this draw without labels.
    pub min_labeled_slice_px: f64,
    pub tooltip_padding_px: f64,
}

impl Default for TrackTuning {
    fn default() -> Self {
        Self {
            band: SliceBand::default(),
            fetch_delay: DEFAULT_FETCH_DELAY,
            title_font_size_px: 12.0,
            subtitle_font_size_px: 10.0,
            min_visible_slice_px: 0.1,
            min_labeled_slice_px: 5.0,
            tooltip_padding_px: 16.0,
        }
    }
}

impl TrackTuning {
    pub fn validate(self) -> TrackResult<Self> {
        self.band.validate()?;

        for (name, value) in [
            ("fetch delay", self.fetch_delay),
            ("title font size", self.title_font_size_px),
            ("subtitle font size", self.subtitle_font_size_px),
            ("labeled slice threshold", self.min_labeled_slice_px),
            ("tooltip padding", self.tooltip_padding_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TrackError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        if !self.min_visible_slice_px.is_finite() || self.min_visible_slice_px < 0.0 {
            return Err(TrackError::InvalidData(
                "visible slice threshold must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Public track bootstrap configuration.
///
/// Serializable so host applications can persist/load lane setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpuTrackConfig {
    pub track_id: TrackId,
    pub cpu: u32,
    #[serde(default)]
    pub tuning: TrackTuning,
}

impl CpuTrackConfig {
    #[must_use]
    pub fn new(track_id: TrackId, cpu: u32) -> Self {
        Self {
            track_id,
            cpu,
            tuning: TrackTuning::default(),
        }
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: TrackTuning) -> Self {
        self.tuning = tuning;
        self
    }
}
