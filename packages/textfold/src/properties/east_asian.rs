//! Property overrides for East Asian and South East Asian typography.
//!
//! These adjust the raw UAX #14 / UAX #11 data the same way JIS X 4051
//! adjusts Japanese composition rules: close punctuation that may hang or
//! carry glue, ideographic space, ellipses and compound marks whose
//! treatment is an option, and workaround classes for the South East Asian
//! scripts whose breaking the standard data leaves to dictionaries.

use super::CharProperties;
use crate::class::LineBreakClass::{self, *};

struct Override {
    first: u32,
    last: u32,
    width: u8,
    class: LineBreakClass,
}

const fn ovr(first: u32, last: u32, width: u8, class: LineBreakClass) -> Override {
    Override {
        first,
        last,
        width,
        class,
    }
}

/// Sorted by codepoint; looked up by binary search.
#[rustfmt::skip]
static OVERRIDES: &[Override] = &[
    // Controls that break or combine by option.
    ovr(0x000B, 0x000B, 1, BKVT), // LINE TABULATION
    ovr(0x000C, 0x000C, 1, BKFF), // FORM FEED

    // NUMBER SIGN prefixes physical quantities (JIS X 4051 class 9).
    ovr(0x0023, 0x0023, 1, PR),
    // Spanish inverted marks open sentences; tailorable to plain AL.
    ovr(0x00A1, 0x00A1, 1, OPAL), // INVERTED EXCLAMATION MARK
    // MICRO SIGN postfixes units.
    ovr(0x00B5, 0x00B5, 1, PO),
    ovr(0x00BF, 0x00BF, 1, OPAL), // INVERTED QUESTION MARK

    // Thai. Vowels preceding their consonant break before; dependent
    // vowels, tone marks and the Sanskrit semi-vowels attach as combining
    // marks; mai han-akat joins like a virama.
    ovr(0x0E22, 0x0E22, 1, CM), // YO YAK
    ovr(0x0E24, 0x0E24, 1, CM), // RU
    ovr(0x0E26, 0x0E27, 1, CM), // LU, WO WAEN
    ovr(0x0E2D, 0x0E2D, 1, CM), // O ANG
    ovr(0x0E2F, 0x0E2F, 1, IN), // PAIYANNOI
    ovr(0x0E30, 0x0E30, 1, CM), // SARA A
    ovr(0x0E31, 0x0E31, 0, GL), // MAI HAN-AKAT
    ovr(0x0E32, 0x0E33, 1, CM), // SARA AA, SARA AM
    ovr(0x0E34, 0x0E3A, 0, CM), // SARA I..PHINTHU
    ovr(0x0E40, 0x0E45, 1, BB), // SARA E..LAKKHANGYAO
    ovr(0x0E46, 0x0E46, 1, IN), // MAIYAMOK
    ovr(0x0E47, 0x0E4E, 0, CM), // MAITAIKHU..YAMAKKAN

    // Lao, following the Thai pattern.
    ovr(0x0EA2, 0x0EA2, 1, CM), // YO
    ovr(0x0EA7, 0x0EA7, 1, CM), // WO
    ovr(0x0EAD, 0x0EAD, 1, CM), // O
    ovr(0x0EAF, 0x0EAF, 1, IN), // ELLIPSIS
    ovr(0x0EB0, 0x0EB0, 1, CM), // VOWEL SIGN A
    ovr(0x0EB1, 0x0EB1, 0, GL), // VOWEL SIGN MAI KAN
    ovr(0x0EB2, 0x0EB3, 1, CM), // VOWEL SIGN AA, AM
    ovr(0x0EB4, 0x0EB9, 0, CM), // VOWEL SIGN I..UU
    ovr(0x0EBB, 0x0EBC, 0, CM), // MAI KON, SEMIVOWEL LO
    ovr(0x0EBD, 0x0EBD, 1, CM), // SEMIVOWEL NYO
    ovr(0x0EC0, 0x0EC4, 1, BB), // VOWEL SIGN E..AI
    ovr(0x0EC6, 0x0EC6, 1, IN), // KO LA
    ovr(0x0EC8, 0x0ECD, 0, CM), // tone marks, niggahita
    ovr(0x0EDC, 0x0EDD, 1, ID), // HO NO, HO MO

    // Myanmar. Independent vowels attach except the glottal stop; virama
    // joins.
    ovr(0x1021, 0x1021, 1, ID), // LETTER A
    ovr(0x1023, 0x1027, 1, CM), // LETTER I..E
    ovr(0x1029, 0x102A, 1, CM), // LETTER O, AU
    ovr(0x102C, 0x102C, 1, CM), // VOWEL SIGN AA
    ovr(0x102D, 0x1030, 0, CM), // VOWEL SIGN I..UU
    ovr(0x1031, 0x1031, 1, CM), // VOWEL SIGN E
    ovr(0x1032, 0x1032, 0, CM), // VOWEL SIGN AI
    ovr(0x1036, 0x1037, 0, CM), // ANUSVARA, DOT BELOW
    ovr(0x1038, 0x1038, 1, CM), // VISARGA
    ovr(0x1039, 0x1039, 0, GL), // VIRAMA
    ovr(0x1050, 0x1057, 1, CM), // Pali/Sanskrit letters and vowel signs
    ovr(0x1058, 0x1059, 0, CM), // VOWEL SIGN VOCALIC L, LL

    // Khmer. Independent and dependent vowels, shifters and signs attach;
    // coeng and viriam join the consonant cluster.
    ovr(0x17A3, 0x17B3, 1, CM), // independent vowels
    ovr(0x17B4, 0x17B5, 0, CM), // inherent vowels
    ovr(0x17B6, 0x17B6, 1, CM), // VOWEL SIGN AA
    ovr(0x17B7, 0x17BD, 0, CM), // VOWEL SIGN I..UA
    ovr(0x17BE, 0x17BE, 1, CM), // VOWEL SIGN OE
    ovr(0x17BF, 0x17C0, 2, CM), // two-part vowel signs
    ovr(0x17C1, 0x17C3, 1, CM), // VOWEL SIGN E..AI
    ovr(0x17C4, 0x17C5, 2, CM), // VOWEL SIGN OO, AU
    ovr(0x17C6, 0x17C6, 0, CM), // NIKAHIT
    ovr(0x17C7, 0x17C8, 1, CM), // REAHMUK, YUUKALEAPINTU
    ovr(0x17C9, 0x17D0, 0, CM), // shifters and signs
    ovr(0x17D1, 0x17D2, 0, GL), // VIRIAM, COENG
    ovr(0x17D3, 0x17D3, 0, CM), // BATHAMASAT
    ovr(0x17D7, 0x17D7, 1, IN), // LEK TOO
    ovr(0x17DC, 0x17DC, 1, CM), // AVAKRAHASANYA
    ovr(0x17DD, 0x17DD, 0, CM), // ATTHACAN

    // Leaders and ellipses; class B2 by option (JIS treats them as
    // inseparable characters that still allow break after letters).
    ovr(0x2025, 0x2026, 1, INB2), // TWO DOT LEADER, HORIZONTAL ELLIPSIS
    // Compound exclamation/question marks; EX by option.
    ovr(0x203C, 0x203D, 1, NSEX), // DOUBLE EXCLAMATION MARK, INTERROBANG
    ovr(0x2047, 0x2049, 1, NSEX), // ??, ?!, !?
    // Unit postfixes (JIS X 4051 class 19).
    ovr(0x2113, 0x2113, 1, PO), // SCRIPT SMALL L
    ovr(0x2126, 0x2127, 1, PO), // OHM SIGN, INVERTED OHM SIGN
    ovr(0x212B, 0x212B, 1, PO), // ANGSTROM SIGN

    // IDEOGRAPHIC SPACE: wide space used for emphasis and justification;
    // runs of it never break and it may hang past the margin.
    ovr(0x3000, 0x3000, 2, IDSP),
    // Ideographic comma and full stop both hang and glue.
    ovr(0x3001, 0x3002, 2, CLHSP),
    // Paired vertical kana repeat marks must not separate.
    ovr(0x3033, 0x3035, 2, B2),
    ovr(0x33CB, 0x33CB, 2, PO), // SQUARE HP

    // BMP private use: commonly ideographs not yet encoded, assume wide.
    ovr(0xE000, 0xF8FF, 2, AL),

    // Vertical presentation forms.
    ovr(0xFE11, 0xFE12, 2, CLHSP), // vertical ideographic comma, full stop
    ovr(0xFE19, 0xFE19, 2, INB2),  // vertical horizontal ellipsis
    ovr(0xFE30, 0xFE30, 2, INB2),  // vertical two dot leader
    ovr(0xFE31, 0xFE31, 2, B2),    // vertical em dash
    ovr(0xFE32, 0xFE32, 2, BA),    // vertical en dash

    // Fullwidth comma and full stop both hang and glue.
    ovr(0xFF0C, 0xFF0C, 2, CLHSP),
    ovr(0xFF0E, 0xFF0E, 2, CLHSP),
    // Halfwidth ideographic full stop and comma hang without glue.
    ovr(0xFF61, 0xFF61, 1, CLH),
    ovr(0xFF64, 0xFF64, 1, CLH),
    // Halfwidth small kana and sound marks behave like the other
    // halfwidth katakana.
    ovr(0xFF67, 0xFF70, 1, AL),
    ovr(0xFF9E, 0xFF9F, 1, AL),
];

/// Property override for `c`, if any.
pub(super) fn lookup(c: char) -> Option<CharProperties> {
    let cp = c as u32;
    OVERRIDES
        .binary_search_by(|o| {
            if cp < o.first {
                std::cmp::Ordering::Greater
            } else if cp > o.last {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .ok()
        .map(|i| CharProperties {
            width: OVERRIDES[i].width,
            class: OVERRIDES[i].class,
        })
}
