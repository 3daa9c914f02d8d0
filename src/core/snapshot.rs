use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::CoordinateTransformer;

/// Identity of a series inside its collection (its position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesKey(pub usize);

/// Points of one series from the last fully revealed frame.
///
/// `captured_pixels` holds the pixel coordinates taken at `phase_y == 1`.
/// `morph_origin` is the same buffer mapped back to value space at the start
/// of the next transition, so a rescaled chart morphs from where the points
/// were actually drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviousFrameSnapshot {
    captured_pixels: Vec<f64>,
    morph_origin: Vec<f64>,
}

impl PreviousFrameSnapshot {
    #[must_use]
    pub fn from_morph_origin(morph_origin: Vec<f64>) -> Self {
        Self {
            captured_pixels: Vec::new(),
            morph_origin,
        }
    }

    #[must_use]
    pub fn captured_pixels(&self) -> &[f64] {
        &self.captured_pixels
    }

    #[must_use]
    pub fn morph_origin(&self) -> &[f64] {
        &self.morph_origin
    }

    /// Replaces the captured buffer, reusing its allocation.
    pub fn capture(&mut self, pixels: &[f64]) {
        self.captured_pixels.clear();
        self.captured_pixels.extend_from_slice(pixels);
    }

    pub fn prepare_morph_origin(&mut self, transformer: &dyn CoordinateTransformer) {
        self.morph_origin.clear();
        self.morph_origin.extend_from_slice(&self.captured_pixels);
        transformer.pixels_to_value(&mut self.morph_origin);
    }

    /// Value-space y of point `index` in the morph origin.
    ///
    /// The buffer is flat `[x, y, ...]`; a point has a previous sample iff the
    /// buffer reaches its y slot.
    #[must_use]
    pub fn previous_y(&self, index: usize) -> Option<f64> {
        sample_y(&self.morph_origin, index)
    }

    /// Morph origin mapped to pixels under `transformer`, or `None` when there
    /// is no origin yet.
    #[must_use]
    pub fn morph_origin_pixels(&self, transformer: &dyn CoordinateTransformer) -> Option<Vec<f64>> {
        if self.morph_origin.is_empty() {
            return None;
        }
        let mut pixels = self.morph_origin.clone();
        transformer.point_values_to_pixel(&mut pixels);
        Some(pixels)
    }
}

/// y slot of point `index` in a flat coordinate buffer.
#[must_use]
pub fn sample_y(buffer: &[f64], index: usize) -> Option<f64> {
    let slot = index.checked_mul(2)?.checked_add(1)?;
    (buffer.len() > slot).then(|| buffer[slot])
}

/// Previous-frame snapshots for all series of one chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotStore {
    snapshots: IndexMap<SeriesKey, PreviousFrameSnapshot>,
}

impl SnapshotStore {
    #[must_use]
    pub fn get(&self, key: SeriesKey) -> Option<&PreviousFrameSnapshot> {
        self.snapshots.get(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn insert(&mut self, key: SeriesKey, snapshot: PreviousFrameSnapshot) {
        self.snapshots.insert(key, snapshot);
    }

    pub fn capture(&mut self, key: SeriesKey, pixels: &[f64]) {
        self.snapshots.entry(key).or_default().capture(pixels);
    }

    /// Drops snapshots of series that no longer exist.
    pub fn retain_series(&mut self, series_count: usize) {
        self.snapshots.retain(|key, _| key.0 < series_count);
    }

    pub fn prepare_morph_origins(&mut self, transformer: &dyn CoordinateTransformer) {
        for snapshot in self.snapshots.values_mut() {
            snapshot.prepare_morph_origin(transformer);
        }
        debug!(series = self.snapshots.len(), "prepared morph origins");
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
