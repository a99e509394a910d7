use serde::{Deserialize, Serialize};

use crate::error::{TrackError, TrackResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Half-open time window in trace-relative seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
}

impl TimeSpan {
    pub fn new(start: f64, end: f64) -> TrackResult<Self> {
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(TrackError::InvalidData(
                "time span bounds must be finite and ordered".to_owned(),
            ));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    #[must_use]
    pub fn contains_time(self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }

    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        other.end > self.start && other.start < self.end
    }
}

/// Stable identifier of one track instance within the host's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(u32);

impl TrackId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Unique thread id as assigned by the trace processor (utid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(u64);

impl OwnerId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Process id grouping several owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(u64);

impl GroupId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}
