//! Raw character property lookup.
//!
//! The engine only needs one capability from the outside world: a total,
//! allocation-free map from a codepoint to its cell width and raw line
//! breaking class. [`UnicodeProvider`] is the built-in implementation,
//! layering this crate's East Asian tailoring data over the UAX #14 and
//! UAX #11 tables; callers with their own property source (fonts, legacy
//! tables) implement [`PropertyProvider`] instead.

mod east_asian;

use unicode_width::UnicodeWidthChar;

use crate::class::LineBreakClass;
use crate::options::FoldOptions;

/// Raw width and class of one character, before tailoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharProperties {
    /// Cell width: 0 combining/zero-width, 1 narrow, 2 wide.
    pub width: u8,
    /// Line breaking class, possibly one of the tailoring classes.
    pub class: LineBreakClass,
}

/// Source of per-character width and line breaking class.
pub trait PropertyProvider {
    /// Look up one character. Must be deterministic and total.
    fn properties(&self, c: char) -> CharProperties;
}

/// Charset families that bias the width of ambiguous East Asian
/// characters.
///
/// Codepoints classified ambiguous by UAX #11 render narrow in generic
/// contexts but wide in fonts built for the East Asian legacy encodings;
/// the family only selects which of the two defaults applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharsetFamily {
    /// Generic (Unicode) context; ambiguous characters are narrow.
    #[default]
    Generic,
    /// Traditional Chinese encodings (Big5, EUC-TW, …).
    TraditionalChinese,
    /// Simplified Chinese encodings (GB2312, GBK, GB18030, …).
    SimplifiedChinese,
    /// Japanese encodings (ISO-2022-JP, EUC-JP, Shift_JIS, …).
    Japanese,
    /// Korean encodings (ISO-2022-KR, EUC-KR, …).
    Korean,
}

impl CharsetFamily {
    /// Resolve a charset name to its family, or `None` for names outside
    /// the known East Asian encodings (callers fall back to
    /// [`CharsetFamily::Generic`]).
    pub fn resolve(charset: &str) -> Option<Self> {
        const TRADITIONAL: &[&str] = &["BIG5", "BIG5-HKSCS", "EUC-TW", "CP950"];
        const SIMPLIFIED: &[&str] = &[
            "EUC-CN",
            "ISO-2022-CN",
            "ISO-2022-CN-EXT",
            "GB2312",
            "GBK",
            "GB18030",
            "CP936",
        ];
        const JAPANESE: &[&str] = &[
            "ISO-2022-JP",
            "ISO-2022-JP-1",
            "ISO-2022-JP-2",
            "ISO-2022-JP-3",
            "ISO-2022-JP-2004",
            "EUC-JP",
            "EUC-JISX0213",
            "EUC-JIS-2004",
            "SHIFT_JIS",
            "SHIFT_JISX0213",
            "SHIFT_JIS-2004",
            "CP932",
        ];
        const KOREAN: &[&str] = &["ISO-2022-KR", "EUC-KR", "CP949", "KS_C_5601-1987"];

        let matches = |names: &[&str]| names.iter().any(|n| n.eq_ignore_ascii_case(charset));
        if matches(TRADITIONAL) {
            Some(Self::TraditionalChinese)
        } else if matches(SIMPLIFIED) {
            Some(Self::SimplifiedChinese)
        } else if matches(JAPANESE) {
            Some(Self::Japanese)
        } else if matches(KOREAN) {
            Some(Self::Korean)
        } else {
            None
        }
    }

    /// Whether ambiguous-width characters default to wide in this family.
    pub fn is_east_asian(self) -> bool {
        self != Self::Generic
    }
}

/// Built-in property provider backed by the Unicode data tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeProvider {
    family: CharsetFamily,
}

impl UnicodeProvider {
    /// Provider for a fixed charset family.
    pub fn new(family: CharsetFamily) -> Self {
        Self { family }
    }

    /// Provider for a charset context, honoring the `generic_width`
    /// option. Unknown charset names fall back to the generic family.
    pub fn for_context(charset: Option<&str>, options: &FoldOptions) -> Self {
        if options.generic_width {
            return Self::new(CharsetFamily::Generic);
        }
        let family = match charset {
            None => CharsetFamily::Generic,
            Some(name) => CharsetFamily::resolve(name).unwrap_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::warn!("unknown charset context {name:?}, using generic widths");
                CharsetFamily::Generic
            }),
        };
        Self::new(family)
    }

    fn width_of(&self, c: char) -> u8 {
        let width = if self.family.is_east_asian() {
            c.width_cjk()
        } else {
            c.width()
        };
        // Control characters have no defined width; count them narrow the
        // way a terminal replacement glyph would render.
        width.unwrap_or(1).min(2) as u8
    }
}

impl PropertyProvider for UnicodeProvider {
    fn properties(&self, c: char) -> CharProperties {
        if let Some(props) = east_asian::lookup(c) {
            return props;
        }

        let class = raw_class(c);
        let mut width = self.width_of(c);

        // Conjoining jamo render wide whenever they fail to combine into a
        // syllable block; the width accountant subtracts them back out of
        // combined runs.
        if matches!(class, LineBreakClass::JV | LineBreakClass::JT) {
            width = 2;
        }

        // Wide punctuation carries a virtual glue column. Keyed on the
        // generic width so family-biased ambiguous characters keep their
        // plain class.
        let class = match class {
            LineBreakClass::OP if c.width() == Some(2) => LineBreakClass::SPOP,
            LineBreakClass::CL if c.width() == Some(2) => LineBreakClass::CLSP,
            other => other,
        };

        CharProperties { width, class }
    }
}

/// Map the UAX #14 class of `c` onto the engine's class set.
fn raw_class(c: char) -> LineBreakClass {
    use unicode_linebreak::BreakClass as Raw;
    use LineBreakClass::*;

    match unicode_linebreak::break_property(c as u32) {
        Raw::OpenPunctuation => OP,
        Raw::ClosePunctuation | Raw::CloseParenthesis => CL,
        Raw::Quotation => QU,
        Raw::NonBreakingGlue => GL,
        Raw::NonStarter => NS,
        Raw::Exclamation => EX,
        Raw::Symbol => SY,
        Raw::InfixSeparator => IS,
        Raw::Prefix => PR,
        Raw::Postfix => PO,
        Raw::Numeric => NU,
        Raw::Ideographic => ID,
        Raw::Inseparable => IN,
        Raw::Hyphen => HY,
        Raw::After => BA,
        Raw::Before => BB,
        Raw::BeforeAndAfter => B2,
        Raw::ZeroWidthSpace => ZW,
        Raw::CombiningMark => CM,
        Raw::WordJoiner => WJ,
        Raw::HangulLvSyllable => H2,
        Raw::HangulLvtSyllable => H3,
        Raw::HangulLJamo => JL,
        Raw::HangulVJamo => JV,
        Raw::HangulTJamo => JT,
        Raw::Space => SP,
        Raw::Mandatory => BK,
        Raw::CarriageReturn => CR,
        Raw::LineFeed => LF,
        Raw::NextLine => NL,
        // Small kana and prolonged sound marks; an option decides between
        // nonstarter and ideograph treatment.
        Raw::ConditionalJapaneseStarter => NSK,
        // Zero width joiner glues its neighbors together.
        Raw::ZeroWidthJoiner => GL,
        // Classes the pair table does not distinguish further.
        Raw::Alphabetic | Raw::HebrewLetter | Raw::Ambiguous | Raw::Unknown | Raw::Surrogate => AL,
        Raw::ComplexContext
        | Raw::Contingent
        | Raw::RegionalIndicator
        | Raw::EmojiBase
        | Raw::EmojiModifier => ID,
    }
}
