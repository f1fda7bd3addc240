//! Per-character property tailoring.
//!
//! Resolves option-dependent ambiguities after the raw property lookup and
//! before classification: ambiguous letter widths, hyphen behavior, control
//! characters that may either break or combine, and the extended East Asian
//! classes that collapse to a standard class when their feature is off.

use crate::class::LineBreakClass;
use crate::options::FoldOptions;

/// Tailor one character's `(width, class)` pair.
///
/// Pure and total: every input maps to a defined output for any option
/// combination, and the result is a fixed point (tailoring an already
/// tailored pair changes nothing).
pub fn tailor(
    c: char,
    width: u8,
    class: LineBreakClass,
    options: &FoldOptions,
) -> (u8, LineBreakClass) {
    use LineBreakClass::*;

    let mut width = width;
    let mut class = class;

    if options.narrow_latin
        && width == 2
        && ('\u{C0}'..='\u{1FF}').contains(&c)
        && c != '\u{D7}'
        && c != '\u{F7}'
    {
        width = 1;
    } else if options.narrow_greek && width == 2 && ('\u{370}'..='\u{3FF}').contains(&c) {
        width = 1;
    } else if options.narrow_cyrillic && width == 2 && ('\u{400}'..='\u{4FF}').contains(&c) {
        width = 1;
    }

    if class == HY && !options.break_after_hyphen {
        class = AL;
    }
    if c == '\u{AD}' && !options.break_after_soft_hyphen {
        class = GL;
    }

    class = match class {
        NL => {
            if options.break_at_nel {
                BK
            } else {
                CM
            }
        }
        BKVT => {
            if options.break_at_vertical_tab {
                BK
            } else {
                CM
            }
        }
        BKFF => {
            if options.break_at_form_feed {
                BK
            } else {
                CM
            }
        }
        CLH if !options.hanging_punctuation => CL,
        CLSP if !options.glue_punctuation => CL,
        CLHSP => match (options.glue_punctuation, options.hanging_punctuation) {
            (false, false) => CL,
            (false, true) => CLH,
            (true, false) => CLSP,
            (true, true) => CLHSP,
        },
        SPOP if !options.glue_punctuation => OP,
        IDSP if options.ideographic_space_is_space => SP,
        NSK => {
            if options.relax_kana_non_starter {
                ID
            } else {
                NS
            }
        }
        OPAL => {
            if options.inverted_punctuation_is_alphabetic {
                AL
            } else {
                OP
            }
        }
        INB2 => {
            if options.break_before_ellipsis {
                B2
            } else {
                IN
            }
        }
        NSEX => {
            if options.compound_marks_are_exclamation {
                EX
            } else {
                NS
            }
        }
        other => other,
    };

    debug_assert!(!class.is_tailoring_only());
    (width, class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LineBreakClass::*;

    fn opts() -> FoldOptions {
        FoldOptions::default()
    }

    #[test]
    fn idempotent_for_every_class() {
        let all = [
            OP, CL, QU, GL, NS, EX, SY, IS, PR, PO, NU, AL, ID, IN, HY, BA, BB, B2, ZW, CM, WJ,
            H2, H3, JL, JV, JT, IDSP, SPOP, CLH, CLSP, CLHSP, SP, BK, CR, LF, NL, BKVT, BKFF,
            NSK, OPAL, INB2, NSEX,
        ];
        let mut options = opts();
        options.break_before_ellipsis = true;
        options.relax_kana_non_starter = true;
        for class in all {
            let once = tailor('x', 1, class, &options);
            let twice = tailor('x', once.0, once.1, &options);
            assert_eq!(once, twice, "{class:?} must resolve to a fixed point");
        }
    }

    #[test]
    fn narrow_ambiguous_letters() {
        let mut options = opts();
        options.narrow_latin = true;
        assert_eq!(tailor('\u{C0}', 2, AL, &options).0, 1);
        // Multiplication sign keeps its width.
        assert_eq!(tailor('\u{D7}', 2, AL, &options).0, 2);
        // Greek stays wide unless its own option is set.
        assert_eq!(tailor('\u{391}', 2, AL, &options).0, 2);
        options.narrow_greek = true;
        assert_eq!(tailor('\u{391}', 2, AL, &options).0, 1);
    }

    #[test]
    fn hyphen_and_soft_hyphen() {
        let options = opts();
        assert_eq!(tailor('-', 1, HY, &options).1, AL);
        assert_eq!(tailor('\u{AD}', 1, BA, &options).1, GL);

        let mut relaxed = opts();
        relaxed.break_after_hyphen = true;
        relaxed.break_after_soft_hyphen = true;
        assert_eq!(tailor('-', 1, HY, &relaxed).1, HY);
        assert_eq!(tailor('\u{AD}', 1, BA, &relaxed).1, BA);
    }

    #[test]
    fn breaking_controls() {
        let options = opts();
        assert_eq!(tailor('\u{85}', 1, NL, &options).1, BK);
        assert_eq!(tailor('\u{B}', 1, BKVT, &options).1, BK);
        assert_eq!(tailor('\u{C}', 1, BKFF, &options).1, BK);

        let mut nobreak = opts();
        nobreak.break_at_nel = false;
        nobreak.break_at_vertical_tab = false;
        nobreak.break_at_form_feed = false;
        assert_eq!(tailor('\u{85}', 1, NL, &nobreak).1, CM);
        assert_eq!(tailor('\u{B}', 1, BKVT, &nobreak).1, CM);
        assert_eq!(tailor('\u{C}', 1, BKFF, &nobreak).1, CM);
    }

    #[test]
    fn clhsp_resolves_per_flag_combination() {
        let mut options = opts();
        options.glue_punctuation = true;
        options.hanging_punctuation = true;
        assert_eq!(tailor('\u{3001}', 2, CLHSP, &options).1, CLHSP);
        options.hanging_punctuation = false;
        assert_eq!(tailor('\u{3001}', 2, CLHSP, &options).1, CLSP);
        options.glue_punctuation = false;
        assert_eq!(tailor('\u{3001}', 2, CLHSP, &options).1, CL);
        options.hanging_punctuation = true;
        assert_eq!(tailor('\u{3001}', 2, CLHSP, &options).1, CLH);
    }

    #[test]
    fn binary_resolutions() {
        let options = opts();
        assert_eq!(tailor('\u{3000}', 2, IDSP, &options).1, IDSP);
        assert_eq!(tailor('\u{3041}', 2, NSK, &options).1, NS);
        assert_eq!(tailor('\u{A1}', 1, OPAL, &options).1, OP);
        assert_eq!(tailor('\u{2026}', 1, INB2, &options).1, IN);
        assert_eq!(tailor('\u{203C}', 1, NSEX, &options).1, NS);

        let mut flipped = opts();
        flipped.ideographic_space_is_space = true;
        flipped.relax_kana_non_starter = true;
        flipped.inverted_punctuation_is_alphabetic = true;
        flipped.break_before_ellipsis = true;
        flipped.compound_marks_are_exclamation = true;
        assert_eq!(tailor('\u{3000}', 2, IDSP, &flipped).1, SP);
        assert_eq!(tailor('\u{3041}', 2, NSK, &flipped).1, ID);
        assert_eq!(tailor('\u{A1}', 1, OPAL, &flipped).1, AL);
        assert_eq!(tailor('\u{2026}', 1, INB2, &flipped).1, B2);
        assert_eq!(tailor('\u{203C}', 1, NSEX, &flipped).1, EX);
    }
}
