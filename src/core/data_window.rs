use serde::{Deserialize, Serialize};

use crate::core::{OwnerId, TimeSpan};
use crate::error::{TrackError, TrackResult};

/// Aggregated utilization curve for coarse zoom levels.
///
/// One sample per fixed-size bucket, chronological, starting at the owning
/// window's `start`. Each sample is the fraction of the bucket the CPU spent
/// running anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    bucket_size_seconds: f64,
    utilizations: Vec<f64>,
}

impl SummaryData {
    pub fn new(bucket_size_seconds: f64, utilizations: Vec<f64>) -> TrackResult<Self> {
        if !bucket_size_seconds.is_finite() || bucket_size_seconds <= 0.0 {
            return Err(TrackError::InvalidData(
                "summary bucket size must be finite and > 0".to_owned(),
            ));
        }
        for utilization in &utilizations {
            if !utilization.is_finite() || !(0.0..=1.0).contains(utilization) {
                return Err(TrackError::InvalidData(
                    "utilization samples must be finite and in [0, 1]".to_owned(),
                ));
            }
        }

        Ok(Self {
            bucket_size_seconds,
            utilizations,
        })
    }

    #[must_use]
    pub fn bucket_size_seconds(&self) -> f64 {
        self.bucket_size_seconds
    }

    #[must_use]
    pub fn utilizations(&self) -> &[f64] {
        &self.utilizations
    }
}

/// One scheduled interval: a thread ran on this CPU from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceRecord {
    pub start: f64,
    pub end: f64,
    pub owner: OwnerId,
}

/// Individual execution slices for fine zoom levels.
///
/// Stored as structured records so a well-formed value cannot hold
/// mismatched columns; suppliers that produce columnar output go through
/// [`SliceData::from_columns`], which enforces the length invariant once at
/// construction. Records keep supplier order and are not required to be
/// sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceData {
    records: Vec<SliceRecord>,
}

impl SliceData {
    pub fn new(records: Vec<SliceRecord>) -> TrackResult<Self> {
        for record in &records {
            if !record.start.is_finite() || !record.end.is_finite() || record.start > record.end {
                return Err(TrackError::InvalidData(
                    "slice bounds must be finite and ordered".to_owned(),
                ));
            }
        }
        Ok(Self { records })
    }

    /// Builds slice data from the supplier's three parallel columns.
    pub fn from_columns(
        starts: &[f64],
        ends: &[f64],
        owners: &[OwnerId],
    ) -> TrackResult<Self> {
        if starts.len() != ends.len() || starts.len() != owners.len() {
            return Err(TrackError::SliceColumnMismatch {
                starts: starts.len(),
                ends: ends.len(),
                owners: owners.len(),
            });
        }

        let records = starts
            .iter()
            .zip(ends)
            .zip(owners)
            .map(|((&start, &end), &owner)| SliceRecord { start, end, owner })
            .collect();
        Self::new(records)
    }

    #[must_use]
    pub fn records(&self) -> &[SliceRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Payload variant of one fetched window.
///
/// Exhaustively matched by the renderer; there is deliberately no third
/// variant and none can be constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackData {
    Summary(SummaryData),
    Slices(SliceData),
}

/// One supplier response: a time window, the resolution it was fetched at,
/// and its payload. Replaced wholesale on every successful fetch; a stale
/// window keeps painting until the replacement arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataWindow {
    span: TimeSpan,
    resolution: f64,
    payload: TrackData,
}

impl DataWindow {
    pub fn new(span: TimeSpan, resolution: f64, payload: TrackData) -> TrackResult<Self> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(TrackError::InvalidData(
                "data window resolution must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            span,
            resolution,
            payload,
        })
    }

    #[must_use]
    pub fn span(&self) -> TimeSpan {
        self.span
    }

    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    #[must_use]
    pub fn payload(&self) -> &TrackData {
        &self.payload
    }
}
