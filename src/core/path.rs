use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One drawing command of a [`ChartPath`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

/// Command list describing a line or a closed fill polygon.
///
/// The same type is used in value space (as produced by the path builders)
/// and in pixel space (after `CoordinateTransformer::path_value_to_pixel`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPath {
    commands: Vec<PathCommand>,
}

impl ChartPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::CubicTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Applies `map` to every coordinate pair, control points included.
    pub fn map_points(&mut self, mut map: impl FnMut(f64, f64) -> (f64, f64)) {
        for command in &mut self.commands {
            match command {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                    (*x, *y) = map(*x, *y);
                }
                PathCommand::CubicTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    (*x1, *y1) = map(*x1, *y1);
                    (*x2, *y2) = map(*x2, *y2);
                    (*x, *y) = map(*x, *y);
                }
                PathCommand::Close => {}
            }
        }
    }

    /// End point of every non-close command, in order.
    #[must_use]
    pub fn end_points(&self) -> Vec<(f64, f64)> {
        self.commands
            .iter()
            .filter_map(|command| match *command {
                PathCommand::MoveTo { x, y }
                | PathCommand::LineTo { x, y }
                | PathCommand::CubicTo { x, y, .. } => Some((x, y)),
                PathCommand::Close => None,
            })
            .collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !matches!(self.commands.first(), Some(PathCommand::MoveTo { .. })) {
            return Err(ChartError::InvalidData(
                "path must start with a move-to command".to_owned(),
            ));
        }

        let mut finite = true;
        let mut probe = self.clone();
        probe.map_points(|x, y| {
            finite &= x.is_finite() && y.is_finite();
            (x, y)
        });
        if !finite {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
