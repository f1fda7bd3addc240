//! C-style escape sequences in terminator strings.

/// Expand escape sequences in a terminator specification.
///
/// Supports the C escapes `\0 \a \b \t \n \v \f \r \\`, `\e` for ESC,
/// `\N` for NEXT LINE, `\L` for LINE SEPARATOR, `\P` for PARAGRAPH
/// SEPARATOR, `\?` for the replacement character, and `\xhh`, `\uhhhh`,
/// `\Uhhhhhhhh` for hexadecimal codepoints.
pub fn unescape(spec: &str) -> Result<String, String> {
    let mut out = String::with_capacity(spec.len());
    let mut chars = spec.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escape = chars
            .next()
            .ok_or_else(|| "trailing backslash in terminator".to_owned())?;
        let expanded = match escape {
            '0' => '\u{0}',
            'a' => '\u{7}',
            'b' => '\u{8}',
            't' => '\t',
            'n' => '\n',
            'v' => '\u{B}',
            'f' => '\u{C}',
            'r' => '\r',
            'e' => '\u{1B}',
            'N' => '\u{85}',
            'L' => '\u{2028}',
            'P' => '\u{2029}',
            '?' => '\u{FFFD}',
            '\\' => '\\',
            'x' => hex_escape(&mut chars, 2)?,
            'u' => hex_escape(&mut chars, 4)?,
            'U' => hex_escape(&mut chars, 8)?,
            other => return Err(format!("unknown escape \\{other} in terminator")),
        };
        out.push(expanded);
    }
    Ok(out)
}

fn hex_escape(chars: &mut std::str::Chars<'_>, digits: usize) -> Result<char, String> {
    let mut value: u32 = 0;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| format!("expected {digits} hex digits in escape"))?;
        value = value * 16 + digit;
    }
    char::from_u32(value).ok_or_else(|| format!("U+{value:04X} is not a valid character"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(unescape("abc").unwrap(), "abc");
    }

    #[test]
    fn named_escapes() {
        assert_eq!(unescape("\\r\\n").unwrap(), "\r\n");
        assert_eq!(unescape("\\N").unwrap(), "\u{85}");
        assert_eq!(unescape("\\L\\P").unwrap(), "\u{2028}\u{2029}");
        assert_eq!(unescape("a\\\\b").unwrap(), "a\\b");
    }

    #[test]
    fn hex_escapes() {
        assert_eq!(unescape("\\x0A").unwrap(), "\n");
        assert_eq!(unescape("\\u2028").unwrap(), "\u{2028}");
        assert_eq!(unescape("\\U0001F600").unwrap(), "\u{1F600}");
    }

    #[test]
    fn bad_escapes_are_rejected() {
        assert!(unescape("\\q").is_err());
        assert!(unescape("\\x0").is_err());
        assert!(unescape("\\uD800").is_err());
        assert!(unescape("a\\").is_err());
    }
}
