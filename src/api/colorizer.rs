use std::hash::{DefaultHasher, Hash, Hasher};

use crate::api::ThreadInfo;
use crate::core::OwnerId;
use crate::render::HslColor;

/// Stable hue for a CPU's summary curve.
#[must_use]
pub fn hue_for_cpu(cpu: u32) -> f64 {
    f64::from(cpu.wrapping_mul(128) % 360)
}

/// Color assignment seam: the host decides how threads map to colors so the
/// same thread keeps its tint across every lane.
pub trait Colorizer {
    fn color_for_owner(&self, owner: OwnerId, info: Option<&ThreadInfo>) -> HslColor;
}

/// Deterministic default: hashes the process name when known (threads of one
/// process share a hue), otherwise the raw owner id.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteColorizer;

impl Colorizer for PaletteColorizer {
    fn color_for_owner(&self, owner: OwnerId, info: Option<&ThreadInfo>) -> HslColor {
        let mut hasher = DefaultHasher::new();
        match info.and_then(|info| info.process_name.as_deref()) {
            Some(process_name) => process_name.hash(&mut hasher),
            None => owner.raw().hash(&mut hasher),
        }

        HslColor::new((hasher.finish() % 360) as f64, 50.0, 50.0)
    }
}
