use serde::{Deserialize, Serialize};

use crate::core::{TimeSpan, Viewport};
use crate::error::{TrackError, TrackResult};

/// Time axis model mapping the visible time range onto viewport pixels.
///
/// The host's pan/zoom interaction mutates the visible range; tracks only
/// read the mapping, so the scale is `Copy` and every conversion revalidates
/// the viewport it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    visible_start: f64,
    visible_end: f64,
}

impl TimeScale {
    pub fn new(visible_start: f64, visible_end: f64) -> TrackResult<Self> {
        let (start, end) = normalize_range(visible_start, visible_end)?;
        Ok(Self {
            visible_start: start,
            visible_end: end,
        })
    }

    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.visible_start, self.visible_end)
    }

    #[must_use]
    pub fn visible_window(self) -> TimeSpan {
        TimeSpan {
            start: self.visible_start,
            end: self.visible_end,
        }
    }

    pub fn set_visible_range(&mut self, start: f64, end: f64) -> TrackResult<()> {
        let normalized = normalize_range(start, end)?;
        self.visible_start = normalized.0;
        self.visible_end = normalized.1;
        Ok(())
    }

    /// Pans the visible range by an additive time delta.
    pub fn pan_visible_by_delta(&mut self, delta_time: f64) -> TrackResult<()> {
        if !delta_time.is_finite() {
            return Err(TrackError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }

        self.visible_start += delta_time;
        self.visible_end += delta_time;
        Ok(())
    }

    /// Zooms visible range around an anchor time.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out.
    /// The resulting span is clamped by `min_span_absolute`.
    pub fn zoom_visible_by_factor(
        &mut self,
        factor: f64,
        anchor_time: f64,
        min_span_absolute: f64,
    ) -> TrackResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TrackError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_time.is_finite() {
            return Err(TrackError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        if !min_span_absolute.is_finite() || min_span_absolute <= 0.0 {
            return Err(TrackError::InvalidData(
                "zoom min span must be finite and > 0".to_owned(),
            ));
        }

        let current_span = self.visible_end - self.visible_start;
        let target_span = (current_span / factor).max(min_span_absolute);
        let left_ratio = (anchor_time - self.visible_start) / current_span;

        let new_start = anchor_time - left_ratio * target_span;
        let new_end = new_start + target_span;
        self.set_visible_range(new_start, new_end)
    }

    pub fn time_to_pixel(self, time: f64, viewport: Viewport) -> TrackResult<f64> {
        if !viewport.is_valid() {
            return Err(TrackError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !time.is_finite() {
            return Err(TrackError::InvalidData("time must be finite".to_owned()));
        }

        let span = self.visible_end - self.visible_start;
        let normalized = (time - self.visible_start) / span;
        Ok(normalized * f64::from(viewport.width))
    }

    pub fn pixel_to_time(self, pixel: f64, viewport: Viewport) -> TrackResult<f64> {
        if !viewport.is_valid() {
            return Err(TrackError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !pixel.is_finite() {
            return Err(TrackError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.visible_end - self.visible_start;
        let normalized = pixel / f64::from(viewport.width);
        Ok(self.visible_start + normalized * span)
    }

    /// Time span covered by `pixels` horizontal pixels at the current zoom.
    pub fn pixel_delta_to_duration(self, pixels: f64, viewport: Viewport) -> TrackResult<f64> {
        if !viewport.is_valid() {
            return Err(TrackError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !pixels.is_finite() || pixels <= 0.0 {
            return Err(TrackError::InvalidData(
                "pixel delta must be finite and > 0".to_owned(),
            ));
        }

        let span = self.visible_end - self.visible_start;
        Ok(pixels * span / f64::from(viewport.width))
    }
}

fn normalize_range(start: f64, end: f64) -> TrackResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() || start >= end {
        return Err(TrackError::InvalidData(
            "visible range must be finite and non-empty".to_owned(),
        ));
    }

    Ok((start, end))
}
