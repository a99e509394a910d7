use crate::error::{TrackError, TrackResult};

/// Quantizes a per-pixel time span down to the nearest power of ten.
///
/// Fetching at a quantized resolution keeps sub-pixel zoom jitter from
/// re-requesting data every frame while still coarsening aggressively as the
/// user zooms out, so the number of distinct resolutions requested over a
/// session stays bounded. Callers recompute this on every paint; the zoom
/// can change between frames and nothing here is cached.
pub fn select_resolution(pixel_to_time_delta: f64) -> TrackResult<f64> {
    if !pixel_to_time_delta.is_finite() || pixel_to_time_delta <= 0.0 {
        return Err(TrackError::InvalidData(
            "per-pixel time delta must be finite and > 0".to_owned(),
        ));
    }

    Ok(10f64.powf(pixel_to_time_delta.log10().floor()))
}
