//! End-to-end folding behavior across scripts and option combinations.

use textfold::{fold_text, BreakAction, FoldOptions, LineBreakAnalysis};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn fold_lines(text: &str, width: usize, options: FoldOptions) -> Vec<String> {
    let (lines, _) = fold_text(text, width, options);
    lines.into_iter().map(|l| l.text).collect()
}

#[test]
fn english_paragraph_wraps_at_spaces() {
    let text = "The Unicode line breaking algorithm decides where lines may end.";
    let lines = fold_lines(text, 20, FoldOptions::default());
    assert_eq!(
        lines,
        [
            "The Unicode line ",
            "breaking algorithm ",
            "decides where lines may ",
            "end.",
        ]
    );
}

#[test]
fn japanese_text_breaks_between_ideographs() {
    let lines = fold_lines("日本語の行分割処理", 6, FoldOptions::default());
    assert_eq!(lines, ["日本語", "の行分", "割処理"]);
}

#[test]
fn ideographic_full_stop_hangs_past_the_margin() {
    // Four wide characters fill the line exactly; the full stop hangs past
    // the margin instead of forcing an early break.
    let lines = fold_lines("こんにち。", 8, FoldOptions::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], "こんにち。");

    // With hanging and glue off the full stop counts, and since a break
    // ahead of it is prohibited, the line retreats to the last opportunity.
    let mut no_hang = FoldOptions::default();
    no_hang.hanging_punctuation = false;
    no_hang.glue_punctuation = false;
    let lines = fold_lines("こんにち。", 8, no_hang);
    assert_eq!(lines[0], "こんに");
    assert_eq!(lines.len(), 2);
}

#[test]
fn no_break_before_small_kana_by_default() {
    // The prolonged sound mark is a nonstarter: no break ahead of it.
    let (lines, _) = fold_text("アーア", 2, FoldOptions::default());
    assert_eq!(lines[0].text, "アー");

    let mut relaxed = FoldOptions::default();
    relaxed.relax_kana_non_starter = true;
    let (lines, _) = fold_text("アーア", 2, relaxed);
    assert_eq!(lines[0].text, "ア");
}

#[test]
fn hangul_jamo_fold_as_syllable_blocks() {
    // Two syllables spelled with conjoining jamo: each measures one wide
    // character, and the break lands between the blocks.
    let text = "\u{1100}\u{1161}\u{11A8}\u{1100}\u{1161}";
    let lines = fold_lines(text, 2, FoldOptions::default());
    assert_eq!(lines, ["\u{1100}\u{1161}\u{11A8}", "\u{1100}\u{1161}"]);
}

#[test]
fn ideographic_space_as_space_changes_breaks() {
    // By default U+3000 binds like an ideograph run; as SP it becomes a
    // break opportunity and is trimmed from measurement.
    let text = "漢字\u{3000}漢字漢字";
    let default_lines = fold_lines(text, 6, FoldOptions::default());
    // Kept wide: two ideographs and the trailing wide space fill the line.
    assert_eq!(default_lines[0], "漢字\u{3000}");

    let mut as_space = FoldOptions::default();
    as_space.ideographic_space_is_space = true;
    let space_lines = fold_lines(text, 6, as_space);
    // As a space it stops counting, so the next ideograph still fits.
    assert_eq!(space_lines[0], "漢字\u{3000}漢");
    assert_ne!(default_lines, space_lines);
}

#[test]
fn charset_context_widens_ambiguous_characters() {
    let text = chars("°°°°°°");
    let generic = LineBreakAnalysis::analyze(&text, None, FoldOptions::default()).unwrap();
    let japanese =
        LineBreakAnalysis::analyze(&text, Some("EUC-JP"), FoldOptions::default()).unwrap();

    let count_lines = |analysis: &LineBreakAnalysis| {
        let mut n = 0;
        analysis.fold(&text, 6, |_| n += 1);
        n
    };
    assert_eq!(count_lines(&generic), 1);
    assert!(count_lines(&japanese) > 1);
}

#[test]
fn unknown_charset_falls_back_to_generic() {
    let text = chars("abc def");
    let unknown =
        LineBreakAnalysis::analyze(&text, Some("X-NO-SUCH-SET"), FoldOptions::default()).unwrap();
    let generic = LineBreakAnalysis::analyze(&text, None, FoldOptions::default()).unwrap();
    assert_eq!(unknown.widths(), generic.widths());
    assert_eq!(unknown.actions(), generic.actions());
}

#[test]
fn one_analysis_folds_at_many_widths() {
    let text = chars("one two three four five six seven");
    let analysis = LineBreakAnalysis::analyze(&text, None, FoldOptions::default()).unwrap();

    let mut previous = usize::MAX;
    for width in 3..40 {
        let mut count = 0;
        analysis.fold(&text, width, |_| count += 1);
        assert!(count <= previous);
        previous = count;
    }
}

#[test]
fn concurrent_folds_share_one_analysis() {
    let text = chars("Line breaking is safe to run from multiple threads at once. 漢字も大丈夫。");
    let analysis = LineBreakAnalysis::analyze(&text, None, FoldOptions::default()).unwrap();

    std::thread::scope(|scope| {
        for width in [4, 10, 20, 40] {
            let analysis = &analysis;
            let text = &text;
            scope.spawn(move || {
                let mut next = 0;
                analysis.fold(text, width, |segment| {
                    assert_eq!(segment.start, next);
                    next += segment.len;
                });
                assert_eq!(next, text.len());
            });
        }
    });
}

#[test]
fn mixed_script_text_tiles_exactly_at_every_width() {
    let text = chars("Mixed 漢字と kana カタカナ, spaces  and\ta\u{301} combining mark.\nSecond paragraph with 「括弧」 and 句読点、最後。");
    let analysis = LineBreakAnalysis::analyze(&text, None, FoldOptions::default()).unwrap();
    for width in 1..30 {
        let mut next = 0;
        analysis.fold(&text, width, |segment| {
            assert_eq!(segment.start, next);
            assert!(segment.action.is_surfaced());
            next += segment.len;
        });
        assert_eq!(next, text.len());
    }
}

#[test]
fn summary_reports_the_most_severe_action() {
    // Only an explicit break: no modification.
    let (_, summary) = fold_text("short\ntext", 40, FoldOptions::default());
    assert_eq!(summary, BreakAction::NO_MODIFICATION);

    // Indirect only.
    let (_, summary) = fold_text("alpha beta gamma", 6, FoldOptions::default());
    assert_eq!(summary, BreakAction::Indirect);

    // A direct break dominates.
    let (_, summary) = fold_text("alpha beta 漢字漢字漢字", 6, FoldOptions::default());
    assert_eq!(summary, BreakAction::Direct);
}

#[test]
fn soft_hyphen_glues_unless_enabled() {
    let text = "super\u{AD}cali\u{AD}fragilistic";
    let (lines, _) = fold_text(text, 8, FoldOptions::default());
    assert_eq!(lines.len(), 1, "soft hyphen must not break by default");

    let mut enabled = FoldOptions::default();
    enabled.break_after_soft_hyphen = true;
    let (lines, _) = fold_text(text, 8, enabled);
    assert!(lines.len() > 1);
    assert!(lines[0].text.ends_with('\u{AD}'));
}

#[test]
fn hyphen_break_is_an_option() {
    let text = "well-known";
    let (lines, _) = fold_text(text, 6, FoldOptions::default());
    assert_eq!(lines.len(), 1);

    let mut enabled = FoldOptions::default();
    enabled.break_after_hyphen = true;
    let (lines, _) = fold_text(text, 6, enabled);
    assert_eq!(lines[0].text, "well-");
}
