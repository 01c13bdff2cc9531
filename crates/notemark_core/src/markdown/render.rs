//! Markdown-subset renderer producing styled text runs.
//!
//! # Responsibility
//! - Convert Markdown-subset source into `StyledText` for display.
//! - Degrade gracefully: malformed input renders as plain text, never errors.
//!
//! # Invariants
//! - Unterminated inline markers are emitted literally; the rest of the
//!   document is never consumed by a broken span.
//! - Block structure survives as plain newline runs; parsing is
//!   inline-oriented, not a full block grammar.

use crate::markdown::styled::{RunStyle, StyledText};

const MAX_HEADER_LEVEL: usize = 6;

/// Renders Markdown-subset source into styled runs.
///
/// Recognized constructs: `#`-`######` headers, `**bold**`, `*italic*`,
/// `` `code` ``, `[text](url)` and `-`/`*`/`+` list markers. Anything else
/// passes through as plain text. Empty input yields empty styled text.
pub fn render(source: &str) -> StyledText {
    let mut out = StyledText::new();
    for (index, line) in source.split('\n').enumerate() {
        if index > 0 {
            out.push_plain("\n");
        }
        render_line(line, &mut out);
    }
    out
}

fn render_line(line: &str, out: &mut StyledText) {
    if let Some((level, rest)) = parse_header(line) {
        out.push_run(
            rest,
            RunStyle {
                bold: true,
                heading: Some(level),
                ..RunStyle::default()
            },
        );
        return;
    }

    if let Some((marker, rest)) = parse_list_marker(line) {
        out.push_run(
            marker,
            RunStyle {
                list_marker: true,
                ..RunStyle::default()
            },
        );
        render_inline(rest, out);
        return;
    }

    render_inline(line, out);
}

/// Splits `#{1,6}` + whitespace header lines into (level, remainder).
fn parse_header(line: &str) -> Option<(u8, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > MAX_HEADER_LEVEL {
        return None;
    }
    let rest = &line[level..];
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => Some((level as u8, chars.as_str())),
        _ => None,
    }
}

/// Splits `-`/`*`/`+` + whitespace list lines into (marker, remainder).
fn parse_list_marker(line: &str) -> Option<(&str, &str)> {
    let mut chars = line.chars();
    let bullet = chars.next()?;
    if !matches!(bullet, '-' | '*' | '+') {
        return None;
    }
    let after = chars.next()?;
    if !after.is_whitespace() {
        return None;
    }
    let split = bullet.len_utf8() + after.len_utf8();
    Some((&line[..split], &line[split..]))
}

fn render_inline(text: &str, out: &mut StyledText) {
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        let rest = &text[cursor..];

        if let Some((span, consumed)) = match_inline_span(rest) {
            out.push_plain(&text[plain_start..cursor]);
            out.push_run(span.text, span.style);
            cursor += consumed;
            plain_start = cursor;
            continue;
        }

        cursor += rest.chars().next().map_or(1, char::len_utf8);
    }

    out.push_plain(&text[plain_start..]);
}

struct InlineSpan<'a> {
    text: &'a str,
    style: RunStyle,
}

/// Tries to read one styled span at the start of `rest`.
///
/// Returns the span plus the number of source bytes it consumed. `None`
/// means the leading character is ordinary text (including any marker with
/// no matching terminator).
fn match_inline_span(rest: &str) -> Option<(InlineSpan<'_>, usize)> {
    if let Some(inner) = rest.strip_prefix("**") {
        let end = inner.find("**").filter(|end| *end > 0)?;
        return Some((
            InlineSpan {
                text: &inner[..end],
                style: RunStyle {
                    bold: true,
                    ..RunStyle::default()
                },
            },
            2 + end + 2,
        ));
    }

    if let Some(inner) = rest.strip_prefix('*') {
        let end = inner.find('*').filter(|end| *end > 0)?;
        return Some((
            InlineSpan {
                text: &inner[..end],
                style: RunStyle {
                    italic: true,
                    ..RunStyle::default()
                },
            },
            1 + end + 1,
        ));
    }

    if let Some(inner) = rest.strip_prefix('`') {
        let end = inner.find('`').filter(|end| *end > 0)?;
        return Some((
            InlineSpan {
                text: &inner[..end],
                style: RunStyle {
                    code: true,
                    ..RunStyle::default()
                },
            },
            1 + end + 1,
        ));
    }

    if let Some(inner) = rest.strip_prefix('[') {
        let text_end = inner.find("](")?;
        let after_text = &inner[text_end + 2..];
        let url_end = after_text.find(')')?;
        return Some((
            InlineSpan {
                text: &inner[..text_end],
                style: RunStyle {
                    link: Some(after_text[..url_end].to_string()),
                    ..RunStyle::default()
                },
            },
            1 + text_end + 2 + url_end + 1,
        ));
    }

    None
}
