use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::warn;

use crate::core::Entry;
use crate::render::{Color, DashPattern};

/// Color palette of a series; most series carry a single color.
pub type ColorPalette = SmallVec<[Color; 4]>;

pub const DEFAULT_SERIES_COLOR: Color = Color::rgb(140.0 / 255.0, 234.0 / 255.0, 1.0);
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::rgb(1.0, 187.0 / 255.0, 115.0 / 255.0);
pub const DEFAULT_FILL_ALPHA: u8 = 85;
pub const DEFAULT_CUBIC_INTENSITY: f64 = 0.2;

/// One line series: ordered entries plus the attributes used to draw them.
///
/// Entries are kept sorted by ascending `x_index`; the value range is cached
/// and refreshed on every mutation.
/// Deserialization goes through [`LineDataSet::new`], so loaded entries are
/// filtered and sorted and the range is recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LineDataSetRepr")]
pub struct LineDataSet {
    label: String,
    entries: Vec<Entry>,
    #[serde(skip_serializing)]
    y_min: f64,
    #[serde(skip_serializing)]
    y_max: f64,
    colors: ColorPalette,
    circle_colors: ColorPalette,
    line_width: f64,
    dash: Option<DashPattern>,
    draw_filled: bool,
    fill_color: Color,
    fill_alpha: u8,
    draw_cubic: bool,
    cubic_intensity: f64,
    draw_circles: bool,
    circle_size: f64,
    highlight_color: Color,
}

impl LineDataSet {
    /// Builds a series, dropping non-finite values and sorting by index.
    #[must_use]
    pub fn new(label: impl Into<String>, entries: Vec<Entry>) -> Self {
        let label = label.into();
        let original_count = entries.len();
        let mut entries: Vec<Entry> = entries
            .into_iter()
            .filter(|entry| entry.value.is_finite())
            .collect();
        if entries.len() != original_count {
            warn!(
                label = %label,
                dropped = original_count - entries.len(),
                "dropping non-finite entries"
            );
        }
        entries.sort_by_key(|entry| entry.x_index);

        let mut data_set = Self {
            label,
            entries,
            y_min: 0.0,
            y_max: 0.0,
            colors: smallvec![DEFAULT_SERIES_COLOR],
            circle_colors: smallvec![DEFAULT_SERIES_COLOR],
            line_width: 1.0,
            dash: None,
            draw_filled: false,
            fill_color: DEFAULT_SERIES_COLOR,
            fill_alpha: DEFAULT_FILL_ALPHA,
            draw_cubic: false,
            cubic_intensity: DEFAULT_CUBIC_INTENSITY,
            draw_circles: true,
            circle_size: 4.0,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
        };
        data_set.calc_min_max();
        data_set
    }

    /// Builds a series from plain values placed at indices `0..values.len()`.
    #[must_use]
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        let entries = values
            .iter()
            .enumerate()
            .map(|(x_index, value)| Entry::new(x_index, *value))
            .collect();
        Self::new(label, entries)
    }

    /// Inserts `entry` after any existing entries with the same index.
    pub fn add_entry(&mut self, entry: Entry) {
        if !entry.value.is_finite() {
            warn!(label = %self.label, x_index = entry.x_index, "rejecting non-finite entry");
            return;
        }
        let at = self
            .entries
            .partition_point(|existing| existing.x_index <= entry.x_index);
        self.entries.insert(at, entry);
        self.calc_min_max();
    }

    fn calc_min_max(&mut self) {
        if self.entries.is_empty() {
            self.y_min = 0.0;
            self.y_max = 0.0;
            return;
        }
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for entry in &self.entries {
            y_min = y_min.min(entry.value);
            y_max = y_max.max(entry.value);
        }
        self.y_min = y_min;
        self.y_max = y_max;
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn x_max_index(&self) -> Option<usize> {
        self.entries.last().map(|entry| entry.x_index)
    }

    /// Value of the first entry placed at `x_index`.
    #[must_use]
    pub fn value_for_x_index(&self, x_index: usize) -> Option<f64> {
        let at = self
            .entries
            .partition_point(|entry| entry.x_index < x_index);
        self.entries
            .get(at)
            .filter(|entry| entry.x_index == x_index)
            .map(|entry| entry.value)
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Primary color; an empty palette falls back to the default series color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.colors.first().copied().unwrap_or(DEFAULT_SERIES_COLOR)
    }

    /// Palette color for segment or entry `index`, recycling the palette.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        palette_color(&self.colors, index)
    }

    /// More than one color switches straight lines to per-segment drawing.
    #[must_use]
    pub fn uses_segment_palette(&self) -> bool {
        self.colors.len() > 1
    }

    #[must_use]
    pub fn circle_color_at(&self, index: usize) -> Color {
        palette_color(&self.circle_colors, index)
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    #[must_use]
    pub fn dash(&self) -> Option<DashPattern> {
        self.dash
    }

    #[must_use]
    pub fn is_draw_filled_enabled(&self) -> bool {
        self.draw_filled
    }

    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    #[must_use]
    pub fn fill_alpha(&self) -> u8 {
        self.fill_alpha
    }

    /// Fill color with `fill_alpha` applied.
    #[must_use]
    pub fn effective_fill_color(&self) -> Color {
        self.fill_color
            .with_alpha(f64::from(self.fill_alpha) / 255.0)
    }

    #[must_use]
    pub fn is_draw_cubic_enabled(&self) -> bool {
        self.draw_cubic
    }

    #[must_use]
    pub fn cubic_intensity(&self) -> f64 {
        self.cubic_intensity
    }

    #[must_use]
    pub fn is_draw_circles_enabled(&self) -> bool {
        self.draw_circles
    }

    #[must_use]
    pub fn circle_size(&self) -> f64 {
        self.circle_size
    }

    #[must_use]
    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_color(self, color: Color) -> Self {
        self.with_colors([color])
    }

    #[must_use]
    pub fn with_circle_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.circle_colors = colors.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Option<DashPattern>) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill_color: Color, fill_alpha: u8) -> Self {
        self.draw_filled = true;
        self.fill_color = fill_color;
        self.fill_alpha = fill_alpha;
        self
    }

    #[must_use]
    pub fn with_draw_filled(mut self, enabled: bool) -> Self {
        self.draw_filled = enabled;
        self
    }

    /// Enables cubic drawing. `intensity` is not validated.
    #[must_use]
    pub fn with_cubic(mut self, intensity: f64) -> Self {
        self.draw_cubic = true;
        self.cubic_intensity = intensity;
        self
    }

    #[must_use]
    pub fn with_draw_circles(mut self, enabled: bool) -> Self {
        self.draw_circles = enabled;
        self
    }

    #[must_use]
    pub fn with_circle_size(mut self, circle_size: f64) -> Self {
        self.circle_size = circle_size;
        self
    }

    #[must_use]
    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }
}

/// Serialized form of [`LineDataSet`]; style fields fall back to the
/// defaults of [`LineDataSet::new`] when absent.
#[derive(Deserialize)]
#[serde(default)]
struct LineDataSetRepr {
    label: String,
    entries: Vec<Entry>,
    colors: ColorPalette,
    circle_colors: ColorPalette,
    line_width: f64,
    dash: Option<DashPattern>,
    draw_filled: bool,
    fill_color: Color,
    fill_alpha: u8,
    draw_cubic: bool,
    cubic_intensity: f64,
    draw_circles: bool,
    circle_size: f64,
    highlight_color: Color,
}

impl Default for LineDataSetRepr {
    fn default() -> Self {
        let defaults = LineDataSet::new(String::new(), Vec::new());
        Self {
            label: defaults.label,
            entries: defaults.entries,
            colors: defaults.colors,
            circle_colors: defaults.circle_colors,
            line_width: defaults.line_width,
            dash: defaults.dash,
            draw_filled: defaults.draw_filled,
            fill_color: defaults.fill_color,
            fill_alpha: defaults.fill_alpha,
            draw_cubic: defaults.draw_cubic,
            cubic_intensity: defaults.cubic_intensity,
            draw_circles: defaults.draw_circles,
            circle_size: defaults.circle_size,
            highlight_color: defaults.highlight_color,
        }
    }
}

impl From<LineDataSetRepr> for LineDataSet {
    fn from(repr: LineDataSetRepr) -> Self {
        Self {
            colors: repr.colors,
            circle_colors: repr.circle_colors,
            line_width: repr.line_width,
            dash: repr.dash,
            draw_filled: repr.draw_filled,
            fill_color: repr.fill_color,
            fill_alpha: repr.fill_alpha,
            draw_cubic: repr.draw_cubic,
            cubic_intensity: repr.cubic_intensity,
            draw_circles: repr.draw_circles,
            circle_size: repr.circle_size,
            highlight_color: repr.highlight_color,
            ..Self::new(repr.label, repr.entries)
        }
    }
}

fn palette_color(palette: &[Color], index: usize) -> Color {
    if palette.is_empty() {
        return DEFAULT_SERIES_COLOR;
    }
    palette[index % palette.len()]
}
