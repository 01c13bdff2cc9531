//! Regex-based Markdown syntax highlighter.
//!
//! # Responsibility
//! - Annotate matched Markdown spans with a foreground color, non-destructively.
//! - Keep rule failures isolated: one broken rule never aborts the others.
//!
//! # Invariants
//! - Rules apply in fixed priority order: header, bold, italic, link, code,
//!   list. The first rule to claim a character position wins; later rules
//!   never recolor it.
//! - The concatenated run text always equals the input source.

use crate::markdown::styled::{HighlightColor, RunStyle, StyledText};
use log::error;
use once_cell::sync::Lazy;
use regex::Regex;

struct HighlightRule {
    name: &'static str,
    pattern: &'static str,
    color: HighlightColor,
}

/// Pattern -> color table in priority order.
static RULES: [HighlightRule; 6] = [
    HighlightRule {
        name: "header",
        pattern: r"(?m)^#{1,6}\s.*$",
        color: HighlightColor::Blue,
    },
    HighlightRule {
        name: "bold",
        pattern: r"\*\*.*?\*\*",
        color: HighlightColor::Purple,
    },
    HighlightRule {
        name: "italic",
        pattern: r"\*.*?\*",
        color: HighlightColor::Teal,
    },
    HighlightRule {
        name: "link",
        pattern: r"\[.*?\]\(.*?\)",
        color: HighlightColor::Green,
    },
    HighlightRule {
        name: "code",
        pattern: r"`.*?`",
        color: HighlightColor::Orange,
    },
    HighlightRule {
        name: "list",
        pattern: r"(?m)^[*+-]\s.*$",
        color: HighlightColor::Indigo,
    },
];

// A rule that fails to compile is logged and dropped; the remaining rules
// still apply.
static COMPILED_RULES: Lazy<Vec<(&'static HighlightRule, Regex)>> = Lazy::new(|| {
    RULES
        .iter()
        .filter_map(|rule| match Regex::new(rule.pattern) {
            Ok(regex) => Some((rule, regex)),
            Err(err) => {
                error!(
                    "event=highlight_rule_invalid module=markdown status=error rule={} error={err}",
                    rule.name
                );
                None
            }
        })
        .collect()
});

/// Annotates Markdown syntax spans in `source` with foreground colors.
///
/// Unmatched text stays unstyled; the text content itself is untouched.
/// Never fails: at worst the result carries fewer color annotations.
pub fn highlight(source: &str) -> StyledText {
    // One color slot per source byte; match offsets from the regex engine
    // always fall on char boundaries, so whole chars share one color.
    let mut colors: Vec<Option<HighlightColor>> = vec![None; source.len()];

    for (rule, regex) in COMPILED_RULES.iter() {
        for found in regex.find_iter(source) {
            for slot in &mut colors[found.start()..found.end()] {
                if slot.is_none() {
                    *slot = Some(rule.color);
                }
            }
        }
    }

    coalesce_runs(source, &colors)
}

fn coalesce_runs(source: &str, colors: &[Option<HighlightColor>]) -> StyledText {
    let mut out = StyledText::new();
    let mut run_color: Option<Option<HighlightColor>> = None;
    let mut run_start = 0;

    for (index, _) in source.char_indices() {
        let color = colors[index];
        match run_color {
            Some(current) if current == color => {}
            Some(current) => {
                push_colored(&mut out, &source[run_start..index], current);
                run_start = index;
                run_color = Some(color);
            }
            None => run_color = Some(color),
        }
    }

    if let Some(current) = run_color {
        push_colored(&mut out, &source[run_start..], current);
    }
    out
}

fn push_colored(out: &mut StyledText, text: &str, color: Option<HighlightColor>) {
    let style = match color {
        Some(color) => RunStyle::colored(color),
        None => RunStyle::default(),
    };
    out.push_run(text, style);
}
