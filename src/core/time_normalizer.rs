use chrono::{DateTime, NaiveTime, TimeZone, Timelike};

use crate::core::{Point, Segment};
use crate::error::{ScaleChartError, ScaleChartResult};

/// Converts absolute timestamps into points relative to local midnight.
///
/// The timezone is explicit so conversions never depend on process-wide
/// locale state.
#[derive(Debug, Clone)]
pub struct TimeNormalizer<Tz: TimeZone> {
    timezone: Tz,
}

impl<Tz: TimeZone> TimeNormalizer<Tz> {
    #[must_use]
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    #[must_use]
    pub fn timezone(&self) -> &Tz {
        &self.timezone
    }

    /// Whole seconds between local midnight of `timestamp`'s calendar day and
    /// `timestamp`, with any sub-second remainder truncated.
    #[must_use]
    pub fn to_point<Other: TimeZone>(&self, timestamp: &DateTime<Other>) -> Point {
        let local = timestamp.with_timezone(&self.timezone);
        let midnight = local
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_local_timezone(self.timezone.clone())
            .earliest();

        match midnight {
            Some(midnight) => local.signed_duration_since(midnight).num_seconds(),
            // Midnight skipped by a DST transition: fall back to wall-clock seconds.
            None => Point::from(local.time().num_seconds_from_midnight()),
        }
    }

    /// Builds a segment from two timestamps and a title.
    #[must_use]
    pub fn segment<A: TimeZone, B: TimeZone>(
        &self,
        start: &DateTime<A>,
        end: &DateTime<B>,
        title: impl Into<String>,
    ) -> Segment {
        Segment::new(self.to_point(start), self.to_point(end), title)
    }

    /// Converts `(start, end, title)` triples into segments, keeping input order.
    pub fn segments<A, B, T, I>(&self, triples: I) -> Vec<Segment>
    where
        A: TimeZone,
        B: TimeZone,
        T: Into<String>,
        I: IntoIterator<Item = (DateTime<A>, DateTime<B>, T)>,
    {
        triples
            .into_iter()
            .map(|(start, end, title)| self.segment(&start, &end, title))
            .collect()
    }
}

/// Point for a wall-clock time of day.
pub fn clock_point(hour: u32, minute: u32, second: u32) -> ScaleChartResult<Point> {
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        ScaleChartError::InvalidData(format!(
            "invalid clock time {hour:02}:{minute:02}:{second:02}"
        ))
    })?;
    Ok(Point::from(time.num_seconds_from_midnight()))
}
