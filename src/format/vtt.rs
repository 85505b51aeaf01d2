// WebVTT subtitle format
use super::{format_clock, SegmentFormatter};
use crate::transcript::Segment;

pub struct VttFormatter;

impl SegmentFormatter for VttFormatter {
    fn preamble(&self) -> &'static str {
        "WEBVTT\n\n"
    }

    fn format_segment(&self, segment: &Segment, index: usize) -> String {
        format!(
            "{}\n{} --> {}\n{}\n\n",
            index,
            format_clock(segment.start(), '.'),
            format_clock(segment.end(), '.'),
            segment.text
        )
    }

    fn extension(&self) -> &'static str {
        "vtt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vtt_segment() {
        let segment = Segment {
            text: "Hello, world!".to_string(),
            timestamp: (1.5, 4.0),
        };

        let formatter = VttFormatter;
        let output = formatter.format_segment(&segment, 1);

        assert_eq!(output, "1\n00:00:01.500 --> 00:00:04.000\nHello, world!\n\n");
    }

    #[test]
    fn test_vtt_preamble() {
        assert_eq!(VttFormatter.preamble(), "WEBVTT\n\n");
    }

    #[test]
    fn test_vtt_period_separator() {
        let segment = Segment {
            text: "test".to_string(),
            timestamp: (3661.25, 3662.0),
        };

        let output = VttFormatter.format_segment(&segment, 1);

        assert!(output.contains("01:01:01.250 --> 01:01:02.000"));
        assert!(!output.contains(','));
    }
}
