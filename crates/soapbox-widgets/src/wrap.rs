//! Greedy word wrapping under a pixel-width budget.
//!
//! One logical line of text goes in, an ordered sequence of display lines
//! comes out, each fitting the width budget as measured by the injected
//! [`TextMeasurer`]. The algorithm is greedy at word boundaries: words are
//! appended to a candidate line until the measured width overflows, at
//! which point the candidate is flushed without the overflowing word.
//!
//! A single word wider than the budget is emitted as its own over-wide
//! line. No mid-word breaking happens anywhere in the system, so the
//! wrapper does not attempt it either.
//!
//! The wrapper is newline-agnostic: callers normalize newlines to spaces
//! before wrapping.

use soapbox_paint::TextMeasurer;

/// Wrap `text` into display lines no wider than `max_width` pixels.
///
/// Splits on single spaces, so runs of spaces survive as empty words and
/// joining the output with single spaces reconstructs the input exactly.
/// Empty input produces no lines.
pub fn wrap_text(text: &str, measurer: &dyn TextMeasurer, max_width: f32) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split(' ') {
        current.push(word);
        let candidate = current.join(" ");

        if measurer.measure_width(&candidate) > max_width {
            if current.len() > 1 {
                current.pop();
                lines.push(current.join(" "));
                current = vec![word];
            } else {
                // A single word wider than the budget becomes its own line.
                lines.push(word.to_owned());
                current.clear();
            }
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    lines
}

/// A wrapped display line plus the byte offset of its first character in
/// the source text.
///
/// The offset lets the input field map text offsets to display positions
/// and back; the transcript panel only needs the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    /// The wrapped line content.
    pub text: String,
    /// Byte offset of the line's first character in the source text.
    pub start: usize,
}

impl DisplayLine {
    /// Byte offset one past the line's last character in the source text.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Wrap `text` and annotate each line with its source byte offset.
///
/// Each line boundary swallows exactly one separator (the space the line
/// was joined on), so line `k + 1` starts at `end(k) + 1`.
pub fn wrap_text_indexed(
    text: &str,
    measurer: &dyn TextMeasurer,
    max_width: f32,
) -> Vec<DisplayLine> {
    let mut start = 0;
    wrap_text(text, measurer, max_width)
        .into_iter()
        .map(|line| {
            let display = DisplayLine {
                start,
                text: line,
            };
            start = display.end() + 1;
            display
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soapbox_paint::FixedAdvanceMeasurer;

    fn measurer() -> FixedAdvanceMeasurer {
        FixedAdvanceMeasurer::new(10.0, 30.0)
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(wrap_text("", &measurer(), 100.0).is_empty());
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        let lines = wrap_text("hello world", &measurer(), 200.0);
        assert_eq!(lines, vec!["hello world"]);
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        // 10px per char, 60px budget: "hello" (50) fits, "hello world" (110)
        // does not.
        let lines = wrap_text("hello world", &measurer(), 60.0);
        assert_eq!(lines, vec!["hello", "world"]);
    }

    #[test]
    fn test_every_line_fits_or_is_single_word() {
        let m = measurer();
        let text = "the quick brown fox jumps over the lazy dog";
        for max_width in [30.0, 55.0, 80.0, 120.0] {
            for line in wrap_text(text, &m, max_width) {
                let fits = m.measure_width(&line) <= max_width;
                let single_word = !line.contains(' ');
                assert!(fits || single_word, "line {line:?} at width {max_width}");
            }
        }
    }

    #[test]
    fn test_joining_lines_reconstructs_input() {
        let m = measurer();
        for text in [
            "the quick brown fox jumps over the lazy dog",
            "a  double  spaced  line",
            "word",
            "incomprehensibilities overflow everywhere",
        ] {
            for max_width in [25.0, 60.0, 95.0] {
                let lines = wrap_text(text, &m, max_width);
                assert_eq!(lines.join(" "), text, "width {max_width}");
            }
        }
    }

    #[test]
    fn test_overwide_word_gets_own_line() {
        // "incomprehensibilities" is 21 chars = 210px, far over budget.
        let lines = wrap_text("an incomprehensibilities word", &measurer(), 80.0);
        assert_eq!(lines, vec!["an", "incomprehensibilities", "word"]);
    }

    #[test]
    fn test_wrap_is_idempotent_on_fitting_lines() {
        let m = measurer();
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", &m, 80.0);
        for line in &lines {
            assert_eq!(wrap_text(line, &m, 80.0), vec![line.clone()]);
        }
    }

    #[test]
    fn test_indexed_offsets_point_into_source() {
        let text = "the quick brown fox";
        let lines = wrap_text_indexed(text, &measurer(), 90.0);
        assert!(!lines.is_empty());
        for line in &lines {
            assert_eq!(&text[line.start..line.end()], line.text);
        }
        assert_eq!(lines[0].start, 0);
        // Each boundary swallows exactly one space.
        for pair in lines.windows(2) {
            assert_eq!(pair[1].start, pair[0].end() + 1);
        }
    }
}
