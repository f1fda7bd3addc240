//! The greedy line folder.

use crate::action::BreakAction;
use crate::analysis::LineBreakAnalysis;
use crate::measure::{CellWidthPolicy, LineWidthPolicy};
use crate::options::FoldOptions;

/// One emitted line or segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Index of the segment's first character.
    pub start: usize,
    /// Character count, any terminator characters included.
    pub len: usize,
    /// Why the segment ended; always one of `Indirect`, `Direct`,
    /// `Explicit` or `Eot`.
    pub action: BreakAction,
}

impl LineBreakAnalysis {
    /// Fold with the default cell width policy. See
    /// [`fold_with`](Self::fold_with).
    pub fn fold<F>(&self, text: &[char], max_width: usize, write: F) -> BreakAction
    where
        F: FnMut(Segment),
    {
        self.fold_with(text, max_width, &CellWidthPolicy, write)
    }

    /// Greedily pack the analyzed text into lines no wider than
    /// `max_width`, invoking `write` once per segment in strictly
    /// increasing text order.
    ///
    /// Lines end at the last break opportunity that still fits. A line
    /// with no opportunity at all is emitted overlong, unless
    /// `force_line_width` squeezes it to the limit or the hard limit caps
    /// it first. Emitted segments tile the text exactly: every character
    /// appears in exactly one segment.
    ///
    /// Returns the most severe action that occurred: `Direct` over
    /// `Indirect`, and [`BreakAction::NO_MODIFICATION`] when the text
    /// needed no width-driven breaks at all.
    pub fn fold_with<P, F>(
        &self,
        text: &[char],
        max_width: usize,
        policy: &P,
        mut write: F,
    ) -> BreakAction
    where
        P: LineWidthPolicy + ?Sized,
        F: FnMut(Segment),
    {
        use BreakAction::*;

        let len = self.len();
        let actions = self.actions();
        let options = self.options();
        let mut summary = BreakAction::NO_MODIFICATION;
        let mut i = 0;

        while i < len {
            let linestart = i;
            let mut prevopp = i;
            let mut prevaction = Prohibited;

            while i < len {
                let mut action = actions[i];
                if action == CombiningIndirect {
                    action = Indirect;
                }

                if action == Prohibited || action == CombiningProhibited {
                    i += 1;
                    continue;
                }
                if !options.direct_breaks && action == Direct {
                    i += 1;
                    continue;
                }

                if policy.exceeds(self, text, linestart, i - linestart + 1, max_width) {
                    if prevaction != Prohibited {
                        // Rewind to the last opportunity that fit.
                        i = prevopp;
                        action = prevaction;
                    } else if options.force_line_width && i > linestart {
                        // No opportunity on this line; squeeze it to the
                        // limit, never ahead of a combining mark and never
                        // down to an empty line.
                        while i > linestart {
                            i -= 1;
                            if actions[i] != CombiningProhibited
                                && !policy.exceeds(
                                    self,
                                    text,
                                    linestart,
                                    i - linestart + 1,
                                    max_width,
                                )
                            {
                                break;
                            }
                        }
                        action = Direct;
                        #[cfg(feature = "tracing")]
                        tracing::debug!(start = linestart, end = i, "forced break at width limit");
                    } else if options.hard_limit > 0 && i - linestart + 1 > options.hard_limit {
                        // Unbreakable run past the hard cap.
                        i = linestart + options.hard_limit - 1;
                        action = Direct;
                        #[cfg(feature = "tracing")]
                        tracing::debug!(start = linestart, end = i, "forced break at hard limit");
                    }

                    write(Segment {
                        start: linestart,
                        len: i - linestart + 1,
                        action,
                    });
                    if action == Direct || (action == Indirect && summary != Direct) {
                        summary = action;
                    }
                    i += 1;
                    break;
                } else if action == Explicit || action == Eot {
                    write(Segment {
                        start: linestart,
                        len: i - linestart + 1,
                        action,
                    });
                    i += 1;
                    break;
                } else {
                    // A viable opportunity; remember it and keep filling.
                    prevopp = i;
                    prevaction = action;
                    i += 1;
                }
            }
        }

        summary
    }
}

/// One folded line with the action that ended it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedLine {
    /// The line's characters, terminator included.
    pub text: String,
    /// Why the line ended.
    pub action: BreakAction,
}

/// Analyze and fold `text` in one call with the built-in property data.
///
/// Convenience wrapper for the common case; returns the folded lines and
/// the fold summary. Empty text folds to nothing.
pub fn fold_text(
    text: &str,
    max_width: usize,
    options: FoldOptions,
) -> (Vec<FoldedLine>, BreakAction) {
    let chars: Vec<char> = text.chars().collect();
    let Some(analysis) = LineBreakAnalysis::analyze(&chars, None, options) else {
        return (Vec::new(), BreakAction::NO_MODIFICATION);
    };

    let mut lines = Vec::new();
    let summary = analysis.fold(&chars, max_width, |segment| {
        lines.push(FoldedLine {
            text: chars[segment.start..segment.start + segment.len]
                .iter()
                .collect(),
            action: segment.action,
        });
    });
    (lines, summary)
}
