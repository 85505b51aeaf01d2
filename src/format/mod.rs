pub mod srt;
pub mod txt;
pub mod vtt;

use crate::config::OutputFormat;
use crate::transcript::Segment;
use tracing::debug;

pub trait SegmentFormatter {
    /// Fixed header emitted once before any segment content.
    fn preamble(&self) -> &'static str;
    /// Render one segment given its 1-based position in the transcript.
    fn format_segment(&self, segment: &Segment, index: usize) -> String;
    fn extension(&self) -> &'static str;
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn SegmentFormatter> {
    match format {
        OutputFormat::Txt => Box::new(txt::TxtFormatter),
        OutputFormat::Srt => Box::new(srt::SrtFormatter),
        OutputFormat::Vtt => Box::new(vtt::VttFormatter),
    }
}

/// Assemble the complete output document: preamble, then every segment
/// in source order with 1-based cue numbering.
///
/// Each rendered cue is also emitted at debug level before it is
/// appended, so `--verbose` runs show cues as they are produced.
pub fn render_document(formatter: &dyn SegmentFormatter, segments: &[Segment]) -> String {
    let mut document = String::from(formatter.preamble());

    for (i, segment) in segments.iter().enumerate() {
        let entry = formatter.format_segment(segment, i + 1);
        debug!("cue {}:\n{}", i + 1, entry);
        document.push_str(&entry);
    }

    document
}

/// Render seconds as `HH:MM:SS<sep>mmm`.
///
/// Milliseconds are truncated, never rounded, so a value just below the
/// next whole second cannot carry over into it.
pub(crate) fn format_clock(seconds: f64, sep: char) -> String {
    let whole = seconds as u64;
    let millis = ((seconds - whole as f64) * 1000.0) as u64;

    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let secs = whole % 60;

    format!("{hours:02}:{minutes:02}:{secs:02}{sep}{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str, start: f64, end: f64) -> Segment {
        Segment {
            text: text.to_string(),
            timestamp: (start, end),
        }
    }

    #[test]
    fn test_format_clock_zero() {
        assert_eq!(format_clock(0.0, ','), "00:00:00,000");
        assert_eq!(format_clock(0.0, '.'), "00:00:00.000");
    }

    #[test]
    fn test_format_clock_hours_minutes_seconds() {
        assert_eq!(format_clock(3661.25, ','), "01:01:01,250");
        assert_eq!(format_clock(59.999, ','), "00:00:59,999");
    }

    #[test]
    fn test_format_clock_truncates_millis() {
        // 0.9999 seconds stays at 999 ms, never carrying into a second
        assert_eq!(format_clock(0.9999, ','), "00:00:00,999");
    }

    #[test]
    fn test_format_clock_unbounded_hours() {
        assert_eq!(format_clock(360000.0, ','), "100:00:00,000");
    }

    #[test]
    fn test_render_document_empty() {
        assert_eq!(render_document(&txt::TxtFormatter, &[]), "");
        assert_eq!(render_document(&srt::SrtFormatter, &[]), "");
        assert_eq!(render_document(&vtt::VttFormatter, &[]), "WEBVTT\n\n");
    }

    #[test]
    fn test_render_document_srt_example() {
        let segments = vec![segment("hello", 0.0, 1.5)];
        assert_eq!(
            render_document(&srt::SrtFormatter, &segments),
            "1\n00:00:00,000 --> 00:00:01,500\nhello\n\n"
        );
    }

    #[test]
    fn test_render_document_numbers_cues_in_order() {
        let segments = vec![
            segment("first", 0.0, 1.0),
            segment("second", 1.0, 2.0),
            segment("third", 2.0, 3.0),
        ];

        let output = render_document(&srt::SrtFormatter, &segments);
        let blocks: Vec<&str> = output.trim_end().split("\n\n").collect();

        assert_eq!(blocks.len(), 3);
        for (i, block) in blocks.iter().enumerate() {
            assert!(block.starts_with(&format!("{}\n", i + 1)));
        }
    }

    #[test]
    fn test_create_formatter_extensions() {
        assert_eq!(create_formatter(OutputFormat::Txt).extension(), "txt");
        assert_eq!(create_formatter(OutputFormat::Srt).extension(), "srt");
        assert_eq!(create_formatter(OutputFormat::Vtt).extension(), "vtt");
    }
}
