//! Options tailoring line breaking and folding behavior.

/// Options controlling property tailoring, break classification and line
/// folding.
///
/// Every field is independent; no field is derived from another. `Default`
/// is the documented default combination: East Asian conventions (hanging
/// and glue punctuation, Hangul jamo composition) on, rule relaxations off.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldOptions {
    /// Resolve character widths in the generic (Unicode) context even when
    /// a charset context was given.
    pub generic_width: bool,
    /// Treat the Latin letters U+00C0..=U+01FF (multiplication and division
    /// signs excepted) as narrow even where the charset context makes them
    /// wide.
    pub narrow_latin: bool,
    /// Same for Greek letters U+0370..=U+03FF.
    pub narrow_greek: bool,
    /// Same for Cyrillic letters U+0400..=U+04FF.
    pub narrow_cyrillic: bool,
    /// Allow a break between U+002D HYPHEN-MINUS and a following alphabetic
    /// character.
    pub break_after_hyphen: bool,
    /// Allow a break after U+00AD SOFT HYPHEN.
    pub break_after_soft_hyphen: bool,
    /// Treat U+0085 NEXT LINE as a mandatory break rather than a combining
    /// mark.
    pub break_at_nel: bool,
    /// Treat U+000B LINE TABULATION as a mandatory break rather than a
    /// combining mark.
    pub break_at_vertical_tab: bool,
    /// Treat U+000C FORM FEED as a mandatory break rather than a combining
    /// mark.
    pub break_at_form_feed: bool,
    /// Allow a break before U+2025 TWO DOT LEADER, U+2026 HORIZONTAL
    /// ELLIPSIS and their vertical forms.
    pub break_before_ellipsis: bool,
    /// Treat compound exclamation/question marks (U+203C, U+2047..=U+2049,
    /// U+203D) as sentence-ending punctuation rather than nonstarters.
    pub compound_marks_are_exclamation: bool,
    /// Allow a break between a space and a following combining mark.
    pub break_sp_cm: bool,
    /// When measuring line length, assume runs of Hangul conjoining jamo
    /// combine into syllable blocks.
    pub combine_hangul_jamo: bool,
    /// Honor direct break opportunities. Disabling this folds
    /// non-alphabetic or mixed text very coarsely.
    pub direct_breaks: bool,
    /// Force breaking of unbreakable runs longer than the width limit, in
    /// violation of the line breaking rules.
    pub force_line_width: bool,
    /// Let trailing close punctuation hang past the margin ("burasage").
    pub hanging_punctuation: bool,
    /// Treat wide punctuation as a narrow character preceded/followed by a
    /// virtual space.
    pub glue_punctuation: bool,
    /// Let trailing ideographic space hang past the margin.
    pub hanging_ideographic_space: bool,
    /// Treat U+3000 IDEOGRAPHIC SPACE as an ordinary space.
    pub ideographic_space_is_space: bool,
    /// Treat small kana and the prolonged sound mark as ordinary
    /// ideographs rather than nonstarters (JIS X 4051 relaxation).
    pub relax_kana_non_starter: bool,
    /// Treat U+00A1 and U+00BF as alphabetic rather than opening
    /// punctuation.
    pub inverted_punctuation_is_alphabetic: bool,
    /// Unconditional cap on the cell width of an unbroken sequence,
    /// limiting backtracking cost on pathological input. Zero disables the
    /// cap.
    pub hard_limit: usize,
}

/// Default cap on unbroken sequence width.
pub const DEFAULT_HARD_LIMIT: usize = 198;

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            generic_width: false,
            narrow_latin: false,
            narrow_greek: false,
            narrow_cyrillic: false,
            break_after_hyphen: false,
            break_after_soft_hyphen: false,
            break_at_nel: true,
            break_at_vertical_tab: true,
            break_at_form_feed: true,
            break_before_ellipsis: false,
            compound_marks_are_exclamation: false,
            break_sp_cm: false,
            combine_hangul_jamo: true,
            direct_breaks: true,
            force_line_width: false,
            hanging_punctuation: true,
            glue_punctuation: true,
            hanging_ideographic_space: true,
            ideographic_space_is_space: false,
            relax_kana_non_starter: false,
            inverted_punctuation_is_alphabetic: false,
            hard_limit: DEFAULT_HARD_LIMIT,
        }
    }
}
