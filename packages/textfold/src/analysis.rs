//! Text analysis: property resolution, tailoring and break classification.

use crate::action::BreakAction;
use crate::class::LineBreakClass;
use crate::options::FoldOptions;
use crate::pairs::pair_action;
use crate::properties::{PropertyProvider, UnicodeProvider};
use crate::tailor::tailor;

/// The analyzed form of one text buffer.
///
/// Owns three parallel arrays of the text's length: tailored cell widths,
/// tailored line breaking classes, and the break action for the boundary
/// after each character. The final action is always [`BreakAction::Eot`].
///
/// An analysis is immutable once built. Folding borrows it shared, so any
/// number of folding passes, with different width limits and from different
/// threads, may run over one analysis.
#[derive(Debug, Clone)]
pub struct LineBreakAnalysis {
    widths: Vec<u8>,
    classes: Vec<LineBreakClass>,
    actions: Vec<BreakAction>,
    charset: Option<String>,
    options: FoldOptions,
}

impl LineBreakAnalysis {
    /// Analyze `text` using the built-in property data.
    ///
    /// `charset` selects the context biasing ambiguous character widths.
    /// Returns `None` for empty text: there is nothing to analyze, and no
    /// analysis ever has length zero.
    pub fn analyze(text: &[char], charset: Option<&str>, options: FoldOptions) -> Option<Self> {
        let provider = UnicodeProvider::for_context(charset, &options);
        Self::analyze_with(text, &provider, charset, options)
    }

    /// Analyze `text` with a caller-supplied property source.
    pub fn analyze_with(
        text: &[char],
        provider: &dyn PropertyProvider,
        charset: Option<&str>,
        options: FoldOptions,
    ) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let mut widths = Vec::with_capacity(text.len());
        let mut classes = Vec::with_capacity(text.len());
        for &c in text {
            let props = provider.properties(c);
            let (width, class) = tailor(c, props.width, props.class, &options);
            widths.push(width);
            classes.push(class);
        }
        let actions = classify(&classes, &options);

        Some(Self {
            widths,
            classes,
            actions,
            charset: charset.map(str::to_owned),
            options,
        })
    }

    /// Text length in characters. Never zero.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Always false; empty text produces no analysis at all.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Tailored cell width of each character.
    pub fn widths(&self) -> &[u8] {
        &self.widths
    }

    /// Tailored line breaking class of each character.
    pub fn classes(&self) -> &[LineBreakClass] {
        &self.classes
    }

    /// Break action for the boundary after each character.
    pub fn actions(&self) -> &[BreakAction] {
        &self.actions
    }

    /// Charset context the analysis was built for.
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// Options the analysis was built with.
    pub fn options(&self) -> &FoldOptions {
        &self.options
    }
}

/// Assign a provisional break action to every character boundary.
///
/// One forward pass. `before` tracks the effective class of the last
/// character that participates in pair lookups; spaces and combining marks
/// are absorbed into it rather than replacing it.
fn classify(classes: &[LineBreakClass], options: &FoldOptions) -> Vec<BreakAction> {
    use BreakAction::*;
    use LineBreakClass as C;

    let len = classes.len();
    let mut actions = vec![Prohibited; len];
    let mut idx = 0;

    while idx < len {
        // One segment, ended by an explicit break or end of text.
        let linestart = idx;
        let mut before = classes[idx];
        idx += 1;

        while idx < len
            && before != C::BK
            && before != C::LF
            && before != C::NL
            && (before != C::CR || classes[idx] == C::LF)
        {
            let after = classes[idx];

            if after.is_explicit_break() {
                actions[idx - 1] = Prohibited;
                before = after;
                idx += 1;
                continue;
            }
            if after == C::SP {
                actions[idx - 1] = Prohibited;
                // `before` stays: the character ahead of a space run keeps
                // pairing with whatever follows the spaces.
                idx += 1;
                continue;
            }
            if before == C::SP {
                // Segment starts with spaces.
                actions[idx - 1] = Prohibited;
                before = after;
                idx += 1;
                continue;
            }

            let action = pair_action(before, after);
            actions[idx - 1] = action;

            match action {
                Direct => {
                    if classes[idx - 1] == C::SP {
                        actions[idx - 1] = Indirect;
                    }
                }
                Indirect => {
                    // An indirect break needs an intervening space.
                    if classes[idx - 1] == C::SP {
                        actions[idx - 1] = Indirect;
                    } else {
                        actions[idx - 1] = Prohibited;
                    }
                }
                CombiningIndirect => {
                    actions[idx - 1] = Prohibited;
                    if classes[idx - 1] == C::SP {
                        if options.break_sp_cm {
                            actions[idx - 1] = CombiningIndirect;
                        } else if idx - linestart > 1 {
                            // Don't split the mark from its space: move the
                            // opportunity ahead of the space instead.
                            if classes[idx - 2] == C::SP {
                                actions[idx - 2] = Indirect;
                            } else {
                                actions[idx - 2] = Direct;
                            }
                        }
                    } else {
                        // The mark extends `before`.
                        idx += 1;
                        continue;
                    }
                }
                CombiningProhibited => {
                    if classes[idx - 1] != C::SP {
                        idx += 1;
                        continue;
                    }
                }
                _ => {}
            }

            before = classes[idx];
            idx += 1;
        }

        // A segment always ends in a break.
        actions[idx - 1] = Explicit;
    }

    // End of text overrides whatever the last boundary computed.
    actions[len - 1] = Eot;
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use BreakAction::*;

    fn analyze(text: &str) -> LineBreakAnalysis {
        let chars: Vec<char> = text.chars().collect();
        LineBreakAnalysis::analyze(&chars, None, FoldOptions::default()).unwrap()
    }

    #[test]
    fn empty_text_has_no_analysis() {
        assert!(LineBreakAnalysis::analyze(&[], None, FoldOptions::default()).is_none());
    }

    #[test]
    fn arrays_share_the_text_length_and_end_in_eot() {
        for text in ["a", "hello world", "ab\ncd", "   ", "漢字かな交じり文"] {
            let analysis = analyze(text);
            let n = text.chars().count();
            assert_eq!(analysis.len(), n);
            assert_eq!(analysis.widths().len(), n);
            assert_eq!(analysis.classes().len(), n);
            assert_eq!(analysis.actions().len(), n);
            assert_eq!(analysis.actions()[n - 1], Eot);
        }
    }

    #[test]
    fn space_mediated_breaks_are_indirect() {
        let analysis = analyze("ab cd");
        // No break inside words, none before the space, one after it.
        assert_eq!(analysis.actions(), &[Prohibited, Prohibited, Indirect, Prohibited, Eot]);
    }

    #[test]
    fn spaces_are_absorbed_not_pairing() {
        let analysis = analyze("a   b");
        assert_eq!(
            analysis.actions(),
            &[Prohibited, Prohibited, Prohibited, Indirect, Eot]
        );
    }

    #[test]
    fn explicit_break_at_line_feed() {
        let analysis = analyze("ab\ncd");
        assert_eq!(
            analysis.actions(),
            &[Prohibited, Prohibited, Explicit, Prohibited, Eot]
        );
    }

    #[test]
    fn crlf_breaks_once_after_the_pair() {
        let analysis = analyze("a\r\nb");
        assert_eq!(analysis.actions(), &[Prohibited, Prohibited, Explicit, Eot]);
    }

    #[test]
    fn bare_cr_breaks_alone() {
        let analysis = analyze("a\rb");
        assert_eq!(analysis.actions(), &[Prohibited, Explicit, Eot]);
    }

    #[test]
    fn ideographs_break_directly() {
        let analysis = analyze("漢字");
        assert_eq!(analysis.actions(), &[Direct, Eot]);
    }

    #[test]
    fn combining_mark_follows_its_base() {
        // a, combining acute, b: no break around the mark, direct pairing
        // of the base with what follows is still evaluated.
        let analysis = analyze("a\u{301} b");
        assert_eq!(
            analysis.actions(),
            &[Prohibited, Prohibited, Indirect, Eot]
        );
    }

    #[test]
    fn space_then_combining_mark_moves_the_break_before_the_space() {
        // "xa <CM>b": default options swallow the SP+CM pair onto the
        // previous run and move the opportunity two boundaries back.
        let chars: Vec<char> = "xa \u{301}b".chars().collect();
        let analysis =
            LineBreakAnalysis::analyze(&chars, None, FoldOptions::default()).unwrap();
        // Boundary after 'a' (ahead of the space) becomes the opportunity.
        assert_eq!(analysis.actions()[1], Direct);
        // The boundary between the space and the mark is closed.
        assert_eq!(analysis.actions()[2], Prohibited);
    }

    #[test]
    fn break_sp_cm_option_keeps_the_boundary_open() {
        let chars: Vec<char> = "xa \u{301}b".chars().collect();
        let mut options = FoldOptions::default();
        options.break_sp_cm = true;
        let analysis = LineBreakAnalysis::analyze(&chars, None, options).unwrap();
        assert_eq!(analysis.actions()[2], CombiningIndirect);
    }

    #[test]
    fn tailoring_classes_never_survive_into_the_analysis() {
        let analysis = analyze("a\u{B}\u{C}\u{3041}\u{A1}\u{2026}\u{203C}\u{3000}");
        for class in analysis.classes() {
            assert!(!class.is_tailoring_only(), "{class:?} leaked");
        }
    }
}
