pub mod ruler;
pub mod scale;
pub mod segment;
pub mod time_normalizer;
pub mod types;

pub use ruler::{MAX_TICKS_PER_SCALE, TickMark, tick_marks};
pub use scale::{ScaleDefinition, ScaleLabelFormat, ScaleLadder};
pub use segment::{LineSegment, Segment};
pub use time_normalizer::{TimeNormalizer, clock_point};
pub use types::{ChartBounds, POINTS_PER_DAY, Padding, Point, Viewport};
