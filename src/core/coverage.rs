use crate::core::{DataWindow, TimeSpan};

/// Decides whether held data can paint the visible window at the current
/// zoom.
///
/// Partial range coverage is never painted from alone, and a held window
/// fetched at a different resolution is stale even when its time range still
/// contains the visible one: a coarser or finer dataset would misrender at
/// the new zoom.
#[must_use]
pub fn is_sufficient(held: Option<&DataWindow>, visible: TimeSpan, resolution: f64) -> bool {
    match held {
        None => false,
        Some(window) => window.span().contains(visible) && window.resolution() == resolution,
    }
}
