//! Break actions assigned to character boundaries.

/// Action recorded for the boundary after each character, ordered by
/// severity.
///
/// Only `Indirect`, `Direct`, `Explicit` and `Eot` are ever surfaced to a
/// writeout sink; the rest are bookkeeping internal to classification and
/// folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BreakAction {
    /// No break is allowed at this boundary.
    Prohibited = 0,
    /// No break; the following character is a combining mark.
    CombiningProhibited = 1,
    /// Indirect break opportunity in front of a combining mark.
    CombiningIndirect = 2,
    /// Break allowed only because one or more spaces intervene.
    Indirect = 3,
    /// Break allowed directly between the adjacent pair.
    Direct = 4,
    /// Break forced by a mandatory break character.
    Explicit = 5,
    /// End of text; the text always ends here.
    Eot = 6,
}

impl BreakAction {
    /// Summary sentinel meaning nothing broke (or only explicit breaks
    /// occurred). Alias of [`BreakAction::Prohibited`].
    pub const NO_MODIFICATION: Self = Self::Prohibited;

    /// Whether this action may be handed to a writeout sink.
    pub fn is_surfaced(self) -> bool {
        self >= Self::Indirect
    }
}
