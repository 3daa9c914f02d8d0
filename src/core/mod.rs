pub mod animation;
pub mod bounds;
pub mod chart_data;
pub mod data_set;
pub mod fill;
pub mod line_path;
pub mod path;
pub mod snapshot;
pub mod transformer;
pub mod types;
pub mod value_range;

pub use animation::{AnimationPhase, revealed_count};
pub use bounds::{ContentBounds, ContentOffsets};
pub use chart_data::LineData;
pub use data_set::{
    ColorPalette, DEFAULT_CUBIC_INTENSITY, DEFAULT_FILL_ALPHA, DEFAULT_HIGHLIGHT_COLOR,
    DEFAULT_SERIES_COLOR, LineDataSet,
};
pub use fill::{DefaultFillFormatter, FillFormatter, FillLineContext, resolve_fill_baseline};
pub use line_path::{LinePathBuilder, cubic_tangents, interpolate_y};
pub use path::{ChartPath, PathCommand};
pub use snapshot::{PreviousFrameSnapshot, SeriesKey, SnapshotStore, sample_y};
pub use transformer::{AffineTransformer, CoordinateTransformer};
pub use types::{Entry, Highlight, Viewport};
pub use value_range::ValueRange;
