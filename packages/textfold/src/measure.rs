//! Line width accounting.

use crate::analysis::LineBreakAnalysis;
use crate::class::LineBreakClass;

/// Decides whether a candidate line is too wide.
///
/// The folder calls this for growing prefixes of each line; an
/// implementation must be monotonic in `len` for a fixed `start` (once a
/// range exceeds, every extension of it exceeds), which the backtracking
/// in the folder relies on. Implementations substitute other width models
/// (glyph metrics, say) without touching the folder.
pub trait LineWidthPolicy {
    /// Whether the rendered width of `text[start..start + len]` exceeds
    /// `max_width`.
    fn exceeds(
        &self,
        analysis: &LineBreakAnalysis,
        text: &[char],
        start: usize,
        len: usize,
        max_width: usize,
    ) -> bool;
}

/// The default policy: East Asian cell width summation.
///
/// Trailing spaces and break characters are free. Hangul conjoining jamo
/// runs count as one syllable block when composition is on. Hanging close
/// punctuation (and, by option, ideographic space) may protrude past the
/// margin once the line is full, and glued wide punctuation gives up its
/// glue column while there is room for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellWidthPolicy;

impl LineWidthPolicy for CellWidthPolicy {
    fn exceeds(
        &self,
        analysis: &LineBreakAnalysis,
        _text: &[char],
        start: usize,
        len: usize,
        max_width: usize,
    ) -> bool {
        use LineBreakClass::*;

        let widths = analysis.widths();
        let classes = analysis.classes();
        let options = analysis.options();
        let end = start + len;

        // `length` is the line's width if it ended right here, excluding
        // whatever may trail or hang; `real_length` counts everything.
        let mut length: usize = 0;
        let mut real_length: usize = 0;

        for i in start..end {
            let width = widths[i] as usize;
            match classes[i] {
                SP | BK | CR | LF | NL => {}

                // Choseong+jungseong(+jongseong) combine into one wide
                // syllable block.
                JV if options.combine_hangul_jamo && i > start && classes[i - 1] == JL => {
                    real_length = real_length.saturating_sub(width);
                }
                JT if options.combine_hangul_jamo
                    && i >= start + 2
                    && classes[i - 2] == JL
                    && classes[i - 1] == JV =>
                {
                    real_length = real_length.saturating_sub(width);
                }
                JV | JT => length += width,

                // Hanging punctuation is free until the line is full.
                CLH | CLHSP => {
                    if real_length > max_width {
                        length = real_length + width;
                    }
                }
                IDSP if options.hanging_ideographic_space => {
                    if real_length > max_width {
                        length = real_length + width;
                    }
                }

                // Glued punctuation spends its glue column if it still
                // fits, and reverts to full width once it cannot.
                CLSP => {
                    if real_length + width > max_width + 1 {
                        length = real_length + width;
                    } else {
                        length += width.saturating_sub(1);
                    }
                }

                _ => length = real_length + width,
            }
            real_length += width;

            if length > max_width
                || (options.hard_limit > 0 && real_length >= options.hard_limit)
            {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FoldOptions;

    fn analyze(text: &str, options: FoldOptions) -> (Vec<char>, LineBreakAnalysis) {
        let chars: Vec<char> = text.chars().collect();
        let analysis = LineBreakAnalysis::analyze(&chars, None, options).unwrap();
        (chars, analysis)
    }

    fn exceeds(text: &str, options: FoldOptions, len: usize, max_width: usize) -> bool {
        let (chars, analysis) = analyze(text, options);
        CellWidthPolicy.exceeds(&analysis, &chars, 0, len, max_width)
    }

    #[test]
    fn plain_cell_widths() {
        assert!(!exceeds("abcd", FoldOptions::default(), 4, 4));
        assert!(exceeds("abcde", FoldOptions::default(), 5, 4));
        // Wide characters cost two cells.
        assert!(!exceeds("漢字", FoldOptions::default(), 2, 4));
        assert!(exceeds("漢字", FoldOptions::default(), 2, 3));
    }

    #[test]
    fn trailing_spaces_are_free() {
        assert!(!exceeds("abcd   ", FoldOptions::default(), 7, 4));
        // But a character after them counts again.
        assert!(exceeds("abcd  x", FoldOptions::default(), 7, 4));
    }

    #[test]
    fn combined_jamo_run_is_one_wide_character() {
        // JL+JV+JT fuse: three wide jamo, one syllable, two cells.
        let text = "\u{1100}\u{1161}\u{11A8}";
        assert!(!exceeds(text, FoldOptions::default(), 3, 2));
        assert!(exceeds(text, FoldOptions::default(), 3, 1));

        let mut apart = FoldOptions::default();
        apart.combine_hangul_jamo = false;
        assert!(exceeds(text, apart.clone(), 3, 2));
        assert!(!exceeds(text, apart, 3, 6));
    }

    #[test]
    fn hanging_punctuation_protrudes() {
        // Four wide ideographs fill width 8 exactly; the trailing
        // ideographic full stop hangs past the margin.
        assert!(!exceeds("漢字漢字。", FoldOptions::default(), 5, 8));
        // With hanging disabled it counts fully.
        let mut options = FoldOptions::default();
        options.hanging_punctuation = false;
        options.glue_punctuation = false;
        assert!(exceeds("漢字漢字。", options, 5, 8));
    }

    #[test]
    fn glued_punctuation_gives_up_its_glue_column() {
        // Wide close paren counts one cell while the glue fits.
        let mut options = FoldOptions::default();
        options.hanging_punctuation = false;
        assert!(!exceeds("漢字漢）", options.clone(), 4, 7));
        assert!(exceeds("漢字漢）", options, 4, 6));
    }

    #[test]
    fn hanging_ideographic_space() {
        assert!(!exceeds("漢字漢字\u{3000}", FoldOptions::default(), 5, 8));
        let mut options = FoldOptions::default();
        options.hanging_ideographic_space = false;
        assert!(exceeds("漢字漢字\u{3000}", options, 5, 8));
    }

    #[test]
    fn hard_limit_caps_unbroken_width() {
        let mut options = FoldOptions::default();
        options.hard_limit = 10;
        let text = "aaaaaaaaaaaaaaa";
        // Far below the width limit, but past the hard cap.
        assert!(exceeds(text, options.clone(), 12, 100));
        assert!(!exceeds(text, options, 9, 100));
    }

    #[test]
    fn monotonic_in_len() {
        let (chars, analysis) = analyze("a漢 b字c。 d", FoldOptions::default());
        for max_width in 0..8 {
            let mut seen_excess = false;
            for len in 1..=chars.len() {
                let excess = CellWidthPolicy.exceeds(&analysis, &chars, 0, len, max_width);
                assert!(excess || !seen_excess, "not monotonic at len {len}");
                seen_excess = excess;
            }
        }
    }
}
