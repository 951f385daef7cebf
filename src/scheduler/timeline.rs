/*!
 * Timeline Recording
 * Gapless segment list built incrementally as the simulated clock advances
 */

use crate::core::types::{Occupant, Segment, Time};

/// Append-only timeline that merges contiguous equal-occupant segments and
/// drops zero-length ones
#[derive(Debug, Default)]
pub(crate) struct TimelineBuilder {
    segments: Vec<Segment>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, occupant: Occupant, start: Time, end: Time) {
        if end <= start {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.occupant == occupant && last.end == start {
                last.end = end;
                return;
            }
        }
        self.segments.push(Segment {
            occupant,
            start,
            end,
        });
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

/// Merge adjacent equal-occupant segments and drop empty ones
///
/// Engine output is already normalised; this is for consumers that splice or
/// edit timelines before display.
pub fn normalize_timeline(segments: &[Segment]) -> Vec<Segment> {
    let mut builder = TimelineBuilder::new();
    for segment in segments {
        builder.push(segment.occupant, segment.start, segment.end);
    }
    builder.into_segments()
}
