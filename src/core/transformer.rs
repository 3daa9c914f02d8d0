#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{ChartPath, ContentBounds, Entry, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Above this many coordinate pairs the parallel transform is used when the
/// `parallel-projection` feature is enabled.
#[cfg(feature = "parallel-projection")]
const PARALLEL_PAIR_THRESHOLD: usize = 4_096;

/// Value-space to pixel-space mapping consumed by the renderers.
///
/// Point buffers are flat `[x0, y0, x1, y1, ...]` slices transformed in place.
pub trait CoordinateTransformer {
    fn point_values_to_pixel(&self, points: &mut [f64]);

    fn pixels_to_value(&self, points: &mut [f64]);

    /// Current horizontal zoom factor, used for value-label thresholding.
    fn scale_x(&self) -> f64;

    fn path_value_to_pixel(&self, path: &mut ChartPath) {
        path.map_points(|x, y| {
            let mut pair = [x, y];
            self.point_values_to_pixel(&mut pair);
            (pair[0], pair[1])
        });
    }

    /// Pixel coordinates of `entries` with values scaled by `phase_y`;
    /// the result holds `2 * entries.len()` values.
    fn generate_transformed_values_line_scatter(
        &self,
        entries: &[Entry],
        phase_y: f64,
    ) -> Vec<f64> {
        let mut points = Vec::with_capacity(entries.len() * 2);
        for entry in entries {
            points.push(entry.x_index as f64);
            points.push(entry.value * phase_y);
        }
        self.point_values_to_pixel(&mut points);
        points
    }
}

/// Axis-aligned affine transform: `px = sx * x + tx`, `py = sy * y + ty`.
///
/// Built from the chart value window and the content rectangle, then
/// optionally zoomed about the content's bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransformer {
    sx: f64,
    sy: f64,
    tx: f64,
    ty: f64,
    zoom_x: f64,
    zoom_y: f64,
}

impl AffineTransformer {
    /// Maps x from `0..=delta_x` across the content width and y from
    /// `y_chart_min` (content bottom) to `y_chart_max` (content top).
    pub fn prepare(range: ValueRange, bounds: ContentBounds) -> ChartResult<Self> {
        let delta_y = range.delta_y();
        if !range.delta_x.is_finite() || range.delta_x <= 0.0 {
            return Err(ChartError::InvalidValueRange(format!(
                "delta_x must be finite and > 0, got {}",
                range.delta_x
            )));
        }
        if !range.y_chart_min.is_finite() || !delta_y.is_finite() || delta_y == 0.0 {
            return Err(ChartError::InvalidValueRange(format!(
                "y window must be finite and non-empty, got {}..{}",
                range.y_chart_min, range.y_chart_max
            )));
        }

        let sx = bounds.content_width() / range.delta_x;
        let sy = -bounds.content_height() / delta_y;
        Ok(Self {
            sx,
            sy,
            tx: bounds.content_left(),
            ty: bounds.content_bottom() - range.y_chart_min * sy,
            zoom_x: 1.0,
            zoom_y: 1.0,
        })
    }

    /// Returns a copy zoomed by the given factors about the content's
    /// bottom-left corner.
    pub fn with_zoom(self, bounds: ContentBounds, zoom_x: f64, zoom_y: f64) -> ChartResult<Self> {
        for (axis, value) in [("x", zoom_x), ("y", zoom_y)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "zoom factor `{axis}` must be finite and > 0"
                )));
            }
        }

        let origin_x = bounds.content_left();
        let origin_y = bounds.content_bottom();
        let rel_x = zoom_x / self.zoom_x;
        let rel_y = zoom_y / self.zoom_y;
        Ok(Self {
            sx: self.sx * rel_x,
            sy: self.sy * rel_y,
            tx: origin_x + (self.tx - origin_x) * rel_x,
            ty: origin_y + (self.ty - origin_y) * rel_y,
            zoom_x,
            zoom_y,
        })
    }

    /// Returns a copy shifted by a pixel offset.
    #[must_use]
    pub fn with_translation(self, dx: f64, dy: f64) -> Self {
        Self {
            tx: self.tx + dx,
            ty: self.ty + dy,
            ..self
        }
    }

    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.zoom_y
    }

    fn map_pair(&self, pair: &mut [f64]) {
        pair[0] = self.sx * pair[0] + self.tx;
        pair[1] = self.sy * pair[1] + self.ty;
    }

    fn unmap_pair(&self, pair: &mut [f64]) {
        pair[0] = (pair[0] - self.tx) / self.sx;
        pair[1] = (pair[1] - self.ty) / self.sy;
    }
}

impl CoordinateTransformer for AffineTransformer {
    fn point_values_to_pixel(&self, points: &mut [f64]) {
        #[cfg(feature = "parallel-projection")]
        if points.len() / 2 >= PARALLEL_PAIR_THRESHOLD {
            points
                .par_chunks_exact_mut(2)
                .for_each(|pair| self.map_pair(pair));
            return;
        }

        for pair in points.chunks_exact_mut(2) {
            self.map_pair(pair);
        }
    }

    fn pixels_to_value(&self, points: &mut [f64]) {
        for pair in points.chunks_exact_mut(2) {
            self.unmap_pair(pair);
        }
    }

    fn scale_x(&self) -> f64 {
        self.zoom_x
    }
}
