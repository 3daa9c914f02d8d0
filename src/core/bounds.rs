use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Pixel offsets between the view edges and the content (plot) rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentOffsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ContentOffsets {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl Default for ContentOffsets {
    fn default() -> Self {
        Self::new(40.0, 20.0, 20.0, 40.0)
    }
}

/// Content rectangle of the chart view, used for edge offsets and off-screen
/// culling of projected points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBounds {
    viewport: Viewport,
    offsets: ContentOffsets,
}

impl ContentBounds {
    pub fn new(viewport: Viewport, offsets: ContentOffsets) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        for (side, value) in [
            ("left", offsets.left),
            ("top", offsets.top),
            ("right", offsets.right),
            ("bottom", offsets.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidContentBounds(format!(
                    "offset `{side}` must be finite and >= 0"
                )));
            }
        }

        let bounds = Self { viewport, offsets };
        if bounds.content_width() <= 0.0 || bounds.content_height() <= 0.0 {
            return Err(ChartError::InvalidContentBounds(format!(
                "offsets leave no content area inside {}x{}",
                viewport.width, viewport.height
            )));
        }
        Ok(bounds)
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn offsets(self) -> ContentOffsets {
        self.offsets
    }

    #[must_use]
    pub fn width(self) -> f64 {
        f64::from(self.viewport.width)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        f64::from(self.viewport.height)
    }

    #[must_use]
    pub fn content_left(self) -> f64 {
        self.offsets.left
    }

    #[must_use]
    pub fn content_top(self) -> f64 {
        self.offsets.top
    }

    #[must_use]
    pub fn content_right(self) -> f64 {
        self.width() - self.offsets.right
    }

    /// Pixel y of the chart's bottom edge; stems start here.
    #[must_use]
    pub fn content_bottom(self) -> f64 {
        self.height() - self.offsets.bottom
    }

    #[must_use]
    pub fn content_width(self) -> f64 {
        self.content_right() - self.content_left()
    }

    #[must_use]
    pub fn content_height(self) -> f64 {
        self.content_bottom() - self.content_top()
    }

    #[must_use]
    pub fn is_off_content_left(self, x: f64) -> bool {
        x < self.content_left()
    }

    #[must_use]
    pub fn is_off_content_right(self, x: f64) -> bool {
        x > self.content_right()
    }

    #[must_use]
    pub fn is_off_content_top(self, y: f64) -> bool {
        y < self.content_top()
    }

    #[must_use]
    pub fn is_off_content_bottom(self, y: f64) -> bool {
        y > self.content_bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentBounds, ContentOffsets};
    use crate::core::Viewport;

    #[test]
    fn off_content_checks_use_strict_edges() {
        let bounds = ContentBounds::new(
            Viewport::new(200, 100),
            ContentOffsets::new(10.0, 5.0, 20.0, 15.0),
        )
        .expect("bounds");

        assert!(!bounds.is_off_content_left(10.0));
        assert!(bounds.is_off_content_left(9.9));
        assert!(!bounds.is_off_content_right(180.0));
        assert!(bounds.is_off_content_right(180.1));
        assert!(!bounds.is_off_content_top(5.0));
        assert!(bounds.is_off_content_top(4.0));
        assert!(!bounds.is_off_content_bottom(85.0));
        assert!(bounds.is_off_content_bottom(85.5));
    }

    #[test]
    fn rejects_offsets_that_consume_the_viewport() {
        let result = ContentBounds::new(
            Viewport::new(100, 100),
            ContentOffsets::new(60.0, 0.0, 40.0, 0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_negative_offsets() {
        let result = ContentBounds::new(
            Viewport::new(100, 100),
            ContentOffsets::new(-1.0, 0.0, 0.0, 0.0),
        );
        assert!(result.is_err());
    }
}
