use serde::{Deserialize, Serialize};

use crate::render::{Color, DashPattern, LineStrokeStyle};

/// Paint roles that can be read and replaced on a [`super::LineChartRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaintRole {
    /// Crosshair lines; color is overridden per series.
    Highlight,
    /// Value label text.
    Values,
    /// Stroke ring of point indicators; color is overridden per entry.
    CircleOuter,
    /// Filled center of point indicators.
    CircleInner,
    /// Vertical stem below each point indicator.
    StemLine,
}

/// Paint parameters for one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
    pub text_size: f64,
}

impl Paint {
    #[must_use]
    pub const fn new(color: Color, stroke_width: f64) -> Self {
        Self {
            color,
            stroke_width,
            stroke_style: LineStrokeStyle::Solid,
            text_size: 9.0,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    #[must_use]
    pub const fn with_text_size(mut self, text_size: f64) -> Self {
        self.text_size = text_size;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintSet {
    pub highlight: Paint,
    pub values: Paint,
    pub circle_outer: Paint,
    pub circle_inner: Paint,
    pub stem_line: Paint,
}

impl PaintSet {
    #[must_use]
    pub fn get(&self, role: PaintRole) -> Paint {
        match role {
            PaintRole::Highlight => self.highlight,
            PaintRole::Values => self.values,
            PaintRole::CircleOuter => self.circle_outer,
            PaintRole::CircleInner => self.circle_inner,
            PaintRole::StemLine => self.stem_line,
        }
    }

    pub fn set(&mut self, role: PaintRole, paint: Paint) {
        let slot = match role {
            PaintRole::Highlight => &mut self.highlight,
            PaintRole::Values => &mut self.values,
            PaintRole::CircleOuter => &mut self.circle_outer,
            PaintRole::CircleInner => &mut self.circle_inner,
            PaintRole::StemLine => &mut self.stem_line,
        };
        *slot = paint;
    }
}

impl Default for PaintSet {
    fn default() -> Self {
        Self {
            highlight: Paint::new(Color::rgb(1.0, 187.0 / 255.0, 115.0 / 255.0), 2.0),
            values: Paint::new(Color::rgb(63.0 / 255.0, 63.0 / 255.0, 63.0 / 255.0), 1.0),
            circle_outer: Paint::new(Color::WHITE, 2.0),
            circle_inner: Paint::new(Color::GRAY, 1.0),
            stem_line: Paint::new(Color::from_argb_u32(0xCCFF_FFFF), 1.0)
                .with_stroke_style(LineStrokeStyle::Dashed(DashPattern::new(3.0, 3.0, 0.0))),
        }
    }
}

/// Resolved style of one point indicator.
///
/// Selection emphasis is applied to a copy, so the shared paints are never
/// touched during a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub outer_color: Color,
    pub outer_width: f64,
    pub inner_color: Color,
    pub stem_color: Color,
    pub stem_width: f64,
    pub stem_style: LineStrokeStyle,
}

impl PointStyle {
    pub const SELECTED_STEM_WIDTH_FACTOR: f64 = 1.5;

    #[must_use]
    pub fn from_paints(paints: &PaintSet, outer_color: Color) -> Self {
        Self {
            outer_color,
            outer_width: paints.circle_outer.stroke_width,
            inner_color: paints.circle_inner.color,
            stem_color: paints.stem_line.color,
            stem_width: paints.stem_line.stroke_width,
            stem_style: paints.stem_line.stroke_style,
        }
    }

    /// Inner circle and stem take the outer color; the stem widens.
    #[must_use]
    pub fn selected(self) -> Self {
        Self {
            inner_color: self.outer_color,
            stem_color: self.outer_color,
            stem_width: self.stem_width * Self::SELECTED_STEM_WIDTH_FACTOR,
            ..self
        }
    }
}
