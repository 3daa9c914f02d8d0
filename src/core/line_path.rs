use crate::core::{AnimationPhase, ChartPath, Entry, PreviousFrameSnapshot};

/// Animated y of one point: blend from the previous sample when present,
/// grow from zero otherwise.
#[must_use]
pub fn interpolate_y(target: f64, previous: Option<f64>, phase_y: f64) -> f64 {
    match previous {
        Some(previous) => previous + (target - previous) * phase_y,
        None => target * phase_y,
    }
}

/// Tangent `(dx, dy)` per point for cubic segments.
///
/// The first and last point use one-sided differences, interior points the
/// centered difference of their neighbors. Fewer than two points yield zero
/// tangents.
#[must_use]
pub fn cubic_tangents(points: &[(f64, f64)], intensity: f64) -> Vec<(f64, f64)> {
    let len = points.len();
    if len < 2 {
        return vec![(0.0, 0.0); len];
    }

    (0..len)
        .map(|j| {
            let (from, to) = if j == 0 {
                (points[0], points[1])
            } else if j == len - 1 {
                (points[j - 1], points[j])
            } else {
                (points[j - 1], points[j + 1])
            };
            ((to.0 - from.0) * intensity, (to.1 - from.1) * intensity)
        })
        .collect()
}

/// Value-space path construction for one series under the current phases.
///
/// `previous` is the series' morph snapshot; pass `None` when morphing is
/// disabled so every point grows from zero.
#[derive(Debug, Clone, Copy)]
pub struct LinePathBuilder<'a> {
    entries: &'a [Entry],
    phase: AnimationPhase,
    previous: Option<&'a PreviousFrameSnapshot>,
}

impl<'a> LinePathBuilder<'a> {
    #[must_use]
    pub fn new(
        entries: &'a [Entry],
        phase: AnimationPhase,
        previous: Option<&'a PreviousFrameSnapshot>,
    ) -> Self {
        Self {
            entries,
            phase,
            previous,
        }
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.phase.revealed_count(self.entries.len())
    }

    #[must_use]
    pub fn animated_y(&self, index: usize) -> f64 {
        let previous = self
            .previous
            .and_then(|snapshot| snapshot.previous_y(index));
        interpolate_y(self.entries[index].value, previous, self.phase.phase_y())
    }

    /// Straight segments through the revealed entries.
    #[must_use]
    pub fn linear(&self) -> ChartPath {
        let revealed = self.revealed_count();
        let mut path = ChartPath::with_capacity(revealed + 3);
        for index in 0..revealed {
            let x = self.entries[index].x_index as f64;
            let y = self.animated_y(index);
            if index == 0 {
                path.move_to(x, y);
            } else {
                path.line_to(x, y);
            }
        }
        path
    }

    /// Cubic Bezier segments through the revealed entries.
    ///
    /// Tangents are taken over the whole series, so the last revealed point
    /// of a partial reveal still bends toward its hidden neighbor.
    #[must_use]
    pub fn cubic(&self, intensity: f64) -> ChartPath {
        if self.entries.len() < 2 {
            return ChartPath::new();
        }

        let points: Vec<(f64, f64)> = (0..self.entries.len())
            .map(|index| (self.entries[index].x_index as f64, self.animated_y(index)))
            .collect();
        let tangents = cubic_tangents(&points, intensity);

        let revealed = self.revealed_count();
        let mut path = ChartPath::with_capacity(revealed + 3);
        for j in 0..revealed {
            let (x, y) = points[j];
            if j == 0 {
                path.move_to(x, y);
                continue;
            }
            let (prev_x, prev_y) = points[j - 1];
            let (prev_dx, prev_dy) = tangents[j - 1];
            let (dx, dy) = tangents[j];
            path.cubic_to(prev_x + prev_dx, prev_y + prev_dy, x - dx, y - dy, x, y);
        }
        path
    }

    #[must_use]
    pub fn linear_filled(&self, baseline: f64) -> ChartPath {
        let path = self.linear();
        self.close_against(path, baseline)
    }

    #[must_use]
    pub fn cubic_filled(&self, intensity: f64, baseline: f64) -> ChartPath {
        let path = self.cubic(intensity);
        self.close_against(path, baseline)
    }

    fn close_against(&self, mut path: ChartPath, baseline: f64) -> ChartPath {
        let revealed = self.revealed_count();
        if path.is_empty() || revealed == 0 {
            return path;
        }
        let last_x = self.entries[revealed - 1].x_index as f64;
        let first_x = self.entries[0].x_index as f64;
        path.line_to(last_x, baseline);
        path.line_to(first_x, baseline);
        path.close();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::{LinePathBuilder, cubic_tangents, interpolate_y};
    use crate::core::{AnimationPhase, Entry, PathCommand, PreviousFrameSnapshot};

    fn entries(values: &[f64]) -> Vec<Entry> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Entry::new(i, *v))
            .collect()
    }

    #[test]
    fn interpolation_blends_from_previous_or_zero() {
        assert_eq!(interpolate_y(20.0, Some(10.0), 0.5), 15.0);
        assert_eq!(interpolate_y(20.0, None, 0.5), 10.0);
    }

    #[test]
    fn interior_tangents_use_centered_difference() {
        let tangents = cubic_tangents(&[(0.0, 0.0), (1.0, 4.0), (2.0, 2.0)], 0.5);
        assert_eq!(tangents, vec![(0.5, 2.0), (1.0, 1.0), (0.5, -1.0)]);
    }

    #[test]
    fn cubic_emits_one_segment_per_revealed_pair() {
        let entries = entries(&[0.0, 4.0, 2.0]);
        let path = LinePathBuilder::new(&entries, AnimationPhase::REVEALED, None).cubic(0.5);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo { x: 0.0, y: 0.0 },
                PathCommand::CubicTo {
                    x1: 0.5,
                    y1: 2.0,
                    x2: 0.0,
                    y2: 3.0,
                    x: 1.0,
                    y: 4.0,
                },
                PathCommand::CubicTo {
                    x1: 2.0,
                    y1: 5.0,
                    x2: 1.5,
                    y2: 3.0,
                    x: 2.0,
                    y: 2.0,
                },
            ]
        );
    }

    #[test]
    fn cubic_with_single_point_is_empty() {
        let entries = entries(&[3.0]);
        let builder = LinePathBuilder::new(&entries, AnimationPhase::REVEALED, None);
        assert!(builder.cubic(0.2).is_empty());
        assert!(builder.cubic_filled(0.2, 0.0).is_empty());
    }

    #[test]
    fn filled_path_closes_at_last_revealed_entry() {
        let entries = entries(&[1.0, 2.0, 3.0, 4.0]);
        let path = LinePathBuilder::new(&entries, AnimationPhase::new(0.5, 1.0), None)
            .linear_filled(-1.0);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo { x: 0.0, y: 1.0 },
                PathCommand::LineTo { x: 1.0, y: 2.0 },
                PathCommand::LineTo { x: 1.0, y: -1.0 },
                PathCommand::LineTo { x: 0.0, y: -1.0 },
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn morph_uses_previous_samples_where_present() {
        let entries = entries(&[20.0, 20.0]);
        let previous = PreviousFrameSnapshot::from_morph_origin(vec![0.0, 10.0]);
        let builder =
            LinePathBuilder::new(&entries, AnimationPhase::new(1.0, 0.5), Some(&previous));
        assert_eq!(builder.animated_y(0), 15.0);
        assert_eq!(builder.animated_y(1), 10.0);
    }
}
