use tracing::debug;

use crate::core::{TimeScale, TrackId, Viewport, select_resolution};
use crate::error::{TrackError, TrackResult};

/// Debounce window between the first insufficiency signal and the request,
/// in host clock units.
pub const DEFAULT_FETCH_DELAY: f64 = 50.0;

/// One fetch issued to the external data supplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRequest {
    pub track_id: TrackId,
    pub start: f64,
    pub end: f64,
    pub resolution: f64,
}

/// External transport for track data. Fire-and-forget: a response, if any,
/// comes back through `CpuTrack::apply_data` whenever the supplier finishes.
/// There is no error channel; a failed fetch simply never arrives and a
/// later paint re-schedules.
pub trait DataSupplier {
    fn request_data(&mut self, request: DataRequest);
}

/// Coalesces repeated "need more data" signals into one deferred request.
///
/// Paints report their coverage verdict every frame; the first insufficient
/// one arms a deadline and later ones are absorbed. The request itself is
/// built when the deadline fires, against whatever viewport and zoom are
/// current then, so a burst of pan/zoom deltas yields a single request
/// reflecting the final viewport. Driven by a caller-supplied clock so tests
/// advance time deterministically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchScheduler {
    delay: f64,
    due_at: Option<f64>,
}

impl FetchScheduler {
    pub fn new(delay: f64) -> TrackResult<Self> {
        if !delay.is_finite() || delay <= 0.0 {
            return Err(TrackError::InvalidData(
                "fetch debounce delay must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            delay,
            due_at: None,
        })
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.due_at.is_some()
    }

    /// Feeds one paint's coverage verdict into the debounce.
    pub fn observe_coverage(&mut self, sufficient: bool, now: f64) {
        if sufficient || self.due_at.is_some() {
            return;
        }
        self.due_at = Some(now + self.delay);
    }

    /// Issues the deferred request once the debounce delay has elapsed.
    ///
    /// The requested range is the visible window padded by one full viewport
    /// duration on each side. Returns `Ok(true)` when a request was issued.
    /// The pending deadline clears at issue time, never at response time, so
    /// a supplier that never answers cannot wedge the track.
    pub fn issue_due(
        &mut self,
        now: f64,
        track_id: TrackId,
        scale: TimeScale,
        viewport: Viewport,
        supplier: &mut dyn DataSupplier,
    ) -> TrackResult<bool> {
        let Some(due_at) = self.due_at else {
            return Ok(false);
        };
        if now < due_at {
            return Ok(false);
        }

        let resolution = select_resolution(scale.pixel_delta_to_duration(1.0, viewport)?)?;
        let visible = scale.visible_window();
        let duration = visible.duration();
        self.due_at = None;

        let request = DataRequest {
            track_id,
            start: visible.start - duration,
            end: visible.end + duration,
            resolution,
        };
        debug!(
            track = track_id.raw(),
            start = request.start,
            end = request.end,
            resolution = request.resolution,
            "issuing deferred track data request"
        );
        supplier.request_data(request);
        Ok(true)
    }
}

impl Default for FetchScheduler {
    fn default() -> Self {
        Self {
            delay: DEFAULT_FETCH_DELAY,
            due_at: None,
        }
    }
}
