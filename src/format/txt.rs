// Plain text output
use super::SegmentFormatter;
use crate::transcript::Segment;

pub struct TxtFormatter;

impl SegmentFormatter for TxtFormatter {
    fn preamble(&self) -> &'static str {
        ""
    }

    fn format_segment(&self, segment: &Segment, _index: usize) -> String {
        format!("{}\n", segment.text)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
