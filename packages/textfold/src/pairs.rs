//! The break pair table.
//!
//! Derived from the pair table construction in UAX #14 revision 19, with
//! rows and columns for the extended East Asian classes: breaks before
//! hanging/glued close punctuation are prohibited like `CL`; `SPOP` behaves
//! like `OP`; glued close punctuation allows a direct break after it the
//! way a space would; ideographic space runs never break internally and
//! stick to preceding sentence-ending punctuation.

use crate::action::BreakAction;
use crate::class::LineBreakClass;

const X: BreakAction = BreakAction::Prohibited;
const XC: BreakAction = BreakAction::CombiningProhibited;
const IC: BreakAction = BreakAction::CombiningIndirect;
const I: BreakAction = BreakAction::Indirect;
const D: BreakAction = BreakAction::Direct;

const N: usize = LineBreakClass::TABLE_SIZE;

#[rustfmt::skip]
static PAIR_TABLE: [[BreakAction; N]; N] = [
    //         OP  CL  QU  GL  NS  EX  SY  IS  PR  PO  NU  AL  ID  IN  HY  BA  BB  B2  ZW  CM  WJ  H2  H3  JL  JV  JT  IDSP SPOP CLH CLSP CLHSP
    /* OP    */ [X , X , X , X , X , X , X , X , X , X , X , X , X , X , X , X , X , X , X , XC, X , X , X , X , X , X , X , X , X , X , X ],
    /* CL    */ [D , X , I , I , X , X , X , X , I , I , I , I , D , D , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* QU    */ [X , X , I , I , I , X , X , X , I , I , I , I , I , I , I , I , I , I , X , IC, X , I , I , I , I , I , I , X , X , X , X ],
    /* GL    */ [I , X , I , I , I , X , X , X , I , I , I , I , I , I , I , I , I , I , X , IC, X , I , I , I , I , I , I , I , X , X , X ],
    /* NS    */ [D , X , I , I , I , X , X , X , D , D , D , D , D , D , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* EX    */ [D , X , I , I , I , X , X , X , D , D , D , D , D , D , I , I , D , D , X , IC, X , D , D , D , D , D , I , D , X , X , X ],
    /* SY    */ [D , X , I , I , I , X , X , X , D , D , I , D , D , D , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* IS    */ [D , X , I , I , I , X , X , X , D , D , I , I , D , D , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* PR    */ [I , X , I , I , I , X , X , X , D , D , I , I , I , D , I , I , D , D , X , IC, X , I , I , I , I , I , I , D , X , X , X ],
    /* PO    */ [I , X , I , I , I , X , X , X , D , D , I , I , D , D , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* NU    */ [I , X , I , I , I , X , X , X , I , I , I , I , D , I , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* AL    */ [I , X , I , I , I , X , X , X , D , D , I , I , D , I , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* ID    */ [D , X , I , I , I , X , X , X , D , I , D , D , D , I , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* IN    */ [D , X , I , I , I , X , X , X , D , D , D , D , D , I , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* HY    */ [D , X , I , I , I , X , X , X , D , D , I , D , D , D , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* BA    */ [D , X , I , I , I , X , X , X , D , D , D , D , D , D , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* BB    */ [I , X , I , I , I , X , X , X , I , I , I , I , I , I , I , I , I , I , X , IC, X , I , I , I , I , I , I , I , X , X , X ],
    /* B2    */ [D , X , I , I , I , X , X , X , D , D , D , D , D , D , I , I , D , X , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* ZW    */ [D , D , D , D , D , D , D , D , D , D , D , D , D , D , D , D , D , D , X , D , D , D , D , D , D , D , D , D , D , D , D ],
    /* CM    */ [I , X , I , I , I , X , X , X , D , D , I , I , D , I , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* WJ    */ [I , X , I , I , I , X , X , X , I , I , I , I , I , I , I , I , I , I , X , IC, X , I , I , I , I , I , I , I , X , X , X ],
    /* H2    */ [D , X , I , I , I , X , X , X , D , I , D , D , D , I , I , I , D , D , X , IC, X , D , D , D , I , I , D , D , X , X , X ],
    /* H3    */ [D , X , I , I , I , X , X , X , D , I , D , D , D , I , I , I , D , D , X , IC, X , D , D , D , D , I , D , D , X , X , X ],
    /* JL    */ [D , X , I , I , I , X , X , X , D , I , D , D , D , I , I , I , D , D , X , IC, X , I , I , I , I , D , D , D , X , X , X ],
    /* JV    */ [D , X , I , I , I , X , X , X , D , I , D , D , D , I , I , I , D , D , X , IC, X , D , D , D , I , I , D , D , X , X , X ],
    /* JT    */ [D , X , I , I , I , X , X , X , D , I , D , D , D , I , I , I , D , D , X , IC, X , D , D , D , D , I , D , D , X , X , X ],
    /* IDSP  */ [D , X , I , I , I , X , X , X , D , I , D , D , D , I , I , I , D , D , X , IC, X , D , D , D , D , D , I , D , X , X , X ],
    /* SPOP  */ [X , X , X , X , X , X , X , X , X , X , X , X , X , X , X , X , X , X , X , XC, X , X , X , X , X , X , X , X , X , X , X ],
    /* CLH   */ [D , X , I , I , X , X , X , X , I , I , I , I , D , D , I , I , D , D , X , IC, X , D , D , D , D , D , D , D , X , X , X ],
    /* CLSP  */ [D , X , D , D , X , X , X , X , D , D , D , D , D , D , D , D , D , D , X , D , X , D , D , D , D , D , D , D , X , X , X ],
    /* CLHSP */ [D , X , D , D , X , X , X , X , D , D , D , D , D , D , D , D , D , D , X , D , X , D , D , D , D , D , D , D , X , X , X ],
];

/// Look up the provisional action between a `before`/`after` class pair.
///
/// Both classes must be pair table classes; the classifier guarantees this
/// for every tailored class it feeds through.
pub(crate) fn pair_action(before: LineBreakClass, after: LineBreakClass) -> BreakAction {
    debug_assert!(before.in_pair_table() && after.in_pair_table());
    PAIR_TABLE[before as usize][after as usize]
}
