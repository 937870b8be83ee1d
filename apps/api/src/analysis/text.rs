//! Line splitting and byte decoding shared by the segmenter, name heuristic and JD loader.

/// Splits on every line boundary résumé text can carry, not only `\n` / `\r\n`:
/// lone `\r` (classic Mac exports), vertical tab, form feed, the ASCII file/group/record
/// separators, NEL and the Unicode line/paragraph separators. `\r\n` counts as one
/// boundary. A trailing boundary does not produce a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }

        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();

        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Decodes UTF-8, dropping invalid or truncated sequences instead of substituting
/// U+FFFD, so `b"sq\xffl"` decodes to `"sql"`.
pub fn decode_utf8_dropping_invalid(mut bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());

    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                decoded.push_str(valid);
                return decoded;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                decoded.push_str(std::str::from_utf8(valid).unwrap_or_default());
                // None: the input ends mid-sequence.
                let skip = e.error_len().unwrap_or(rest.len());
                bytes = &rest[skip..];
            }
        }
    }
}
