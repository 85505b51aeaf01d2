// SRT subtitle format
use super::{format_clock, SegmentFormatter};
use crate::transcript::Segment;

pub struct SrtFormatter;

impl SegmentFormatter for SrtFormatter {
    fn preamble(&self) -> &'static str {
        ""
    }

    fn format_segment(&self, segment: &Segment, index: usize) -> String {
        format!(
            "{}\n{} --> {}\n{}\n\n",
            index,
            format_clock(segment.start(), ','),
            format_clock(segment.end(), ','),
            segment.text
        )
    }

    fn extension(&self) -> &'static str {
        "srt"
    }
}
