use serde::{Deserialize, Serialize};

use crate::core::ChartPath;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(136.0 / 255.0, 136.0 / 255.0, 136.0 / 255.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Color from packed `0xAARRGGBB`.
    #[must_use]
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self::rgba(
            ((argb >> 16) & 0xFF) as f64 / 255.0,
            ((argb >> 8) & 0xFF) as f64 / 255.0,
            (argb & 0xFF) as f64 / 255.0,
            ((argb >> 24) & 0xFF) as f64 / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// On/off dash intervals in pixels, starting `phase` pixels into the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on: f64,
    pub off: f64,
    pub phase: f64,
}

impl DashPattern {
    #[must_use]
    pub const fn new(on: f64, off: f64, phase: f64) -> Self {
        Self { on, off, phase }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.on.is_finite() || !self.off.is_finite() || !self.phase.is_finite() {
            return Err(ChartError::InvalidData(
                "dash intervals must be finite".to_owned(),
            ));
        }
        if self.on < 0.0 || self.off < 0.0 || self.on + self.off <= 0.0 {
            return Err(ChartError::InvalidData(
                "dash intervals must be >= 0 with a positive period".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed(DashPattern),
}

impl LineStrokeStyle {
    #[must_use]
    pub fn from_dash(dash: Option<DashPattern>) -> Self {
        dash.map_or(Self::Solid, Self::Dashed)
    }

    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::Solid => Ok(()),
            Self::Dashed(pattern) => pattern.validate(),
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "line")?;
        self.stroke_style.validate()?;
        self.color.validate()
    }
}

/// How a path or circle is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapePaint {
    Fill,
    Stroke {
        width: f64,
        style: LineStrokeStyle,
    },
}

impl ShapePaint {
    #[must_use]
    pub const fn stroke(width: f64) -> Self {
        Self::Stroke {
            width,
            style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub fn is_fill(self) -> bool {
        matches!(self, Self::Fill)
    }

    fn validate(self, kind: &str) -> ChartResult<()> {
        match self {
            Self::Fill => Ok(()),
            Self::Stroke { width, style } => {
                validate_stroke_width(width, kind)?;
                style.validate()
            }
        }
    }
}

/// Draw command for a pixel-space path (series line or fill polygon).
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub path: ChartPath,
    pub color: Color,
    pub paint: ShapePaint,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(path: ChartPath, color: Color, paint: ShapePaint) -> Self {
        Self { path, color, paint }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.path.validate()?;
        self.paint.validate("path")?;
        self.color.validate()
    }
}

/// Draw command for one circle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: Color,
    pub paint: ShapePaint,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, color: Color, paint: ShapePaint) -> Self {
        Self {
            cx,
            cy,
            radius,
            color,
            paint,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        self.paint.validate("circle")?;
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn validate_stroke_width(width: f64, kind: &str) -> ChartResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{kind} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Color, DashPattern, LinePrimitive, LineStrokeStyle};

    #[test]
    fn argb_unpacks_channels() {
        let color = Color::from_argb_u32(0xCCFF_8000);
        assert!((color.alpha - 0.8).abs() <= 1e-12);
        assert_eq!(color.red, 1.0);
        assert!((color.green - 128.0 / 255.0).abs() <= 1e-12);
        assert_eq!(color.blue, 0.0);
    }

    #[test]
    fn dashed_line_with_empty_period_is_invalid() {
        let line = LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 1.0, Color::WHITE)
            .with_stroke_style(LineStrokeStyle::Dashed(DashPattern::new(0.0, 0.0, 0.0)));
        assert!(line.validate().is_err());
    }
}
