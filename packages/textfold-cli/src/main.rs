//! Command line front end: decode, fold, encode.
//!
//! Reads the input files (or standard input), decodes them from the input
//! charset, folds the text to the requested width, and writes the folded
//! lines back out in the output charset with configurable terminators.

mod escape;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use textfold::{BreakAction, FoldOptions, LineBreakAnalysis, DEFAULT_HARD_LIMIT};
use textfold_charset::{ConvertError, Decoder, Encoder, ErrorPolicy};

/// DOS/Windows end-of-file control character.
const SUBSTITUTE: char = '\u{1A}';

#[derive(Parser, Debug)]
#[command(
    name = "textfold",
    version,
    about = "Fold text to a line width using the Unicode line breaking algorithm"
)]
struct Cli {
    /// Input files; `-` or no file reads standard input.
    files: Vec<PathBuf>,

    /// Limit of line width in cells.
    #[arg(short = 'w', long, default_value_t = 72)]
    width: usize,

    /// Charset of the input.
    #[arg(short = 'f', long, default_value = "UTF-8")]
    from_code: String,

    /// Charset of the output.
    #[arg(short = 't', long, default_value = "UTF-8")]
    to_code: String,

    /// Charset context for width resolution; defaults to the output
    /// charset.
    #[arg(short = 'c', long)]
    context_code: Option<String>,

    /// How to handle unconvertible characters: strict, ignore or replace.
    #[arg(short = 'C', long, default_value = "replace")]
    conversion: ErrorPolicy,

    /// Write output to a file instead of standard output.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// String inserted between broken lines (C-style escapes allowed).
    #[arg(long, default_value = "\\n")]
    line_terminator: String,

    /// Newline sequence replacing each paragraph terminator.
    #[arg(long)]
    paragraph_terminator: Option<String>,

    /// Newline sequence appended to (or replacing) the end of the text.
    #[arg(long)]
    text_terminator: Option<String>,

    /// Keep trailing spaces on output lines.
    #[arg(long)]
    keep_trailing_spaces: bool,

    /// Keep DOS end-of-file control characters at the end of input files.
    #[arg(long)]
    keep_eof: bool,

    /// Allow a break between hyphen-minus and a following letter.
    #[arg(long)]
    break_after_hyphen: bool,

    /// Allow a break after soft hyphen.
    #[arg(long)]
    break_after_soft_hyphen: bool,

    /// Treat U+0085 NEXT LINE as a combining mark, not a break.
    #[arg(long)]
    no_break_at_nel: bool,

    /// Treat vertical tab as a combining mark, not a break.
    #[arg(long)]
    no_break_at_vertical_tab: bool,

    /// Treat form feed as a combining mark, not a break.
    #[arg(long)]
    no_break_at_form_feed: bool,

    /// Allow a break before two dot leader and horizontal ellipsis.
    #[arg(long)]
    break_before_ellipsis: bool,

    /// Treat compound exclamation/question marks as sentence-ending
    /// punctuation.
    #[arg(long)]
    compound_marks_are_exclamation: bool,

    /// Allow a break between a space and a following combining mark.
    #[arg(long)]
    break_sp_cm: bool,

    /// Measure Hangul conjoining jamo separately instead of as combined
    /// syllable blocks.
    #[arg(long)]
    no_combine_hangul_jamo: bool,

    /// Ignore direct break opportunities.
    #[arg(long)]
    no_direct_breaks: bool,

    /// Force breaking of unbreakable runs longer than the width limit.
    #[arg(long)]
    force_line_width: bool,

    /// Disable hanging punctuation.
    #[arg(long)]
    no_hanging_punctuation: bool,

    /// Disable the virtual glue of wide punctuation.
    #[arg(long)]
    no_glue_punctuation: bool,

    /// Disable hanging of trailing ideographic space.
    #[arg(long)]
    no_hanging_ideographic_space: bool,

    /// Treat ideographic space as an ordinary space.
    #[arg(long)]
    ideographic_space_is_space: bool,

    /// Treat small kana as ordinary ideographs (JIS X 4051 relaxation).
    #[arg(long)]
    relax_kana_non_starter: bool,

    /// Treat inverted exclamation/question marks as letters.
    #[arg(long)]
    inverted_punctuation_is_alphabetic: bool,

    /// Always render ambiguous Latin letters narrow.
    #[arg(long)]
    narrow_latin: bool,

    /// Always render ambiguous Greek letters narrow.
    #[arg(long)]
    narrow_greek: bool,

    /// Always render ambiguous Cyrillic letters narrow.
    #[arg(long)]
    narrow_cyrillic: bool,

    /// Shorthand for the three narrow-* options.
    #[arg(long)]
    narrow_ambiguous: bool,

    /// Resolve widths in the generic Unicode context, ignoring the
    /// charset context.
    #[arg(long)]
    generic_width: bool,

    /// Unconditional cap on unbroken sequence width; 0 disables.
    #[arg(long, default_value_t = DEFAULT_HARD_LIMIT)]
    hard_limit: usize,

    /// Verbose diagnostics (repeat for more).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn fold_options(&self) -> FoldOptions {
        FoldOptions {
            generic_width: self.generic_width,
            narrow_latin: self.narrow_latin || self.narrow_ambiguous,
            narrow_greek: self.narrow_greek || self.narrow_ambiguous,
            narrow_cyrillic: self.narrow_cyrillic || self.narrow_ambiguous,
            break_after_hyphen: self.break_after_hyphen,
            break_after_soft_hyphen: self.break_after_soft_hyphen,
            break_at_nel: !self.no_break_at_nel,
            break_at_vertical_tab: !self.no_break_at_vertical_tab,
            break_at_form_feed: !self.no_break_at_form_feed,
            break_before_ellipsis: self.break_before_ellipsis,
            compound_marks_are_exclamation: self.compound_marks_are_exclamation,
            break_sp_cm: self.break_sp_cm,
            combine_hangul_jamo: !self.no_combine_hangul_jamo,
            direct_breaks: !self.no_direct_breaks,
            force_line_width: self.force_line_width,
            hanging_punctuation: !self.no_hanging_punctuation,
            glue_punctuation: !self.no_glue_punctuation,
            hanging_ideographic_space: !self.no_hanging_ideographic_space,
            ideographic_space_is_space: self.ideographic_space_is_space,
            relax_kana_non_starter: self.relax_kana_non_starter,
            inverted_punctuation_is_alphabetic: self.inverted_punctuation_is_alphabetic,
            hard_limit: self.hard_limit,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    BadEscape(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("textfold: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let policy = cli.conversion;
    let decoder = Decoder::new(&cli.from_code, policy)?;
    let encoder = Encoder::new(&cli.to_code, policy)?;
    let context = cli.context_code.as_deref().unwrap_or(&cli.to_code);

    let line_terminator = terminator(&cli.line_terminator)?;
    let paragraph_terminator = cli.paragraph_terminator.as_deref().map(terminator).transpose()?;
    let text_terminator = cli.text_terminator.as_deref().map(terminator).transpose()?;

    let mut text = String::new();
    if cli.files.is_empty() {
        text.push_str(&read_input(&decoder, None, cli.keep_eof)?);
    } else {
        for file in &cli.files {
            text.push_str(&read_input(&decoder, Some(file), cli.keep_eof)?);
        }
    }

    let chars: Vec<char> = text.chars().collect();
    let Some(analysis) = LineBreakAnalysis::analyze(&chars, Some(context), cli.fold_options())
    else {
        return Ok(());
    };

    let mut rendered = String::new();
    analysis.fold(&chars, cli.width, |segment| {
        let line = &chars[segment.start..segment.start + segment.len];
        let (body, term) = split_terminator(line);

        let body = if cli.keep_trailing_spaces {
            body
        } else {
            trim_trailing_spaces(body)
        };
        rendered.extend(body.iter());

        match segment.action {
            BreakAction::Indirect | BreakAction::Direct => rendered.push_str(&line_terminator),
            BreakAction::Explicit => match &paragraph_terminator {
                Some(replacement) => rendered.push_str(replacement),
                None => rendered.extend(term.iter()),
            },
            _ => match &text_terminator {
                Some(replacement) => rendered.push_str(replacement),
                None => rendered.extend(term.iter()),
            },
        }
    });

    let bytes = encoder.encode(&rendered)?;
    match &cli.output {
        Some(path) => fs::write(path, bytes)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn read_input(
    decoder: &Decoder,
    file: Option<&PathBuf>,
    keep_eof: bool,
) -> Result<String, CliError> {
    let bytes = match file {
        Some(path) if path.as_os_str() != "-" => fs::read(path)?,
        _ => {
            let mut buffer = Vec::new();
            io::stdin().lock().read_to_end(&mut buffer)?;
            buffer
        }
    };
    let mut text = decoder.decode(&bytes)?;
    if !keep_eof {
        while text.ends_with(SUBSTITUTE) {
            text.pop();
        }
    }
    Ok(text)
}

fn terminator(spec: &str) -> Result<String, CliError> {
    escape::unescape(spec).map_err(CliError::BadEscape)
}

/// Split a segment into its body and its trailing terminator characters.
fn split_terminator(line: &[char]) -> (&[char], &[char]) {
    let is_terminator = |c: char| {
        matches!(
            c,
            '\r' | '\n' | '\u{B}' | '\u{C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    };
    let body_len = line
        .iter()
        .rposition(|&c| !is_terminator(c))
        .map_or(0, |i| i + 1);
    line.split_at(body_len)
}

fn trim_trailing_spaces(body: &[char]) -> &[char] {
    let len = body.iter().rposition(|&c| c != ' ').map_or(0, |i| i + 1);
    &body[..len]
}
