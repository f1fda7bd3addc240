//! Unicode line breaking and line folding.
//!
//! This crate implements the line breaking algorithm of Unicode Standard
//! Annex #14, tailored for East Asian typography — hanging and glued
//! punctuation, Hangul jamo composition, kana non-starter relaxation — plus
//! a greedy folder that packs text into lines of a given cell width.
//!
//! Text is analyzed once into a [`LineBreakAnalysis`]: per-character cell
//! widths, line breaking classes and a break action for every character
//! boundary. The analysis is immutable and can then be folded any number of
//! times with different width limits, each fold invoking a sink once per
//! produced line.
//!
//! ```
//! use textfold::{fold_text, BreakAction, FoldOptions};
//!
//! let (lines, summary) = fold_text("Unicode line breaking", 10, FoldOptions::default());
//! let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
//! assert_eq!(texts, ["Unicode ", "line ", "breaking"]);
//! assert_eq!(summary, BreakAction::Indirect);
//! ```
//!
//! The two collaborators the engine depends on are traits with built-in
//! defaults: [`PropertyProvider`] maps codepoints to raw width and class
//! ([`UnicodeProvider`] serves the Unicode data tables, biased by an East
//! Asian charset context), and [`LineWidthPolicy`] decides when a candidate
//! line is too wide ([`CellWidthPolicy`] sums cells with the East Asian
//! exceptions).

pub mod action;
pub mod analysis;
pub mod class;
pub mod fold;
pub mod measure;
pub mod options;
mod pairs;
pub mod properties;
pub mod tailor;

pub use action::BreakAction;
pub use analysis::LineBreakAnalysis;
pub use class::LineBreakClass;
pub use fold::{fold_text, FoldedLine, Segment};
pub use measure::{CellWidthPolicy, LineWidthPolicy};
pub use options::{FoldOptions, DEFAULT_HARD_LIMIT};
pub use properties::{CharProperties, CharsetFamily, PropertyProvider, UnicodeProvider};
