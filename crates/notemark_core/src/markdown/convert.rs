//! Plain-text to Markdown heuristic converter.
//!
//! # Responsibility
//! - Infer structural intent (headers, lists, emphasis) from unstructured
//!   text and rewrite it as Markdown-subset source.
//!
//! # Invariants
//! - Pure and deterministic; idempotence is NOT guaranteed (converting
//!   already-converted text may wrap markers again).
//! - Processing is line-by-line with one line of lookback/lookahead; blank
//!   lines pass through unchanged and reset list state.

/// Rewrites `plain` as Markdown using per-line heuristics.
///
/// Per non-blank line, first match applies:
/// 1. already a list line (`-`/`*`/`+` first) -> kept as-is, enters list state;
/// 2. numbered line (digits then `.`) -> rewritten as a `- ` bullet;
/// 3. isolated line (blank/start before, blank after) -> promoted to `# `;
/// 4. otherwise, all-uppercase words of two or more letters become
///    `**word**` with the case folded to lowercase inside the markers.
///
/// Leading and trailing blank lines are trimmed from the output.
pub fn convert(plain: &str) -> String {
    let lines: Vec<&str> = plain.split('\n').collect();
    let mut converted: Vec<String> = Vec::with_capacity(lines.len());
    let mut in_list = false;

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            in_list = false;
            converted.push((*line).to_string());
            continue;
        }

        let trimmed = line.trim();

        if matches!(trimmed.chars().next(), Some('-' | '*' | '+')) {
            in_list = true;
            converted.push((*line).to_string());
            continue;
        }

        if let Some(rest) = strip_numbered_prefix(trimmed) {
            in_list = true;
            converted.push(format!("- {rest}"));
            continue;
        }

        let preceded_by_blank = index == 0 || lines[index - 1].trim().is_empty();
        let followed_by_blank = index + 1 < lines.len() && lines[index + 1].trim().is_empty();
        if preceded_by_blank && followed_by_blank && !in_list {
            converted.push(format!("# {trimmed}"));
            continue;
        }

        converted.push(embolden_uppercase_words(line));
    }

    let first = converted
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(converted.len());
    let last = converted
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(first, |index| index + 1);

    converted[first..last].join("\n")
}

/// Returns the text after a `digits.` prefix, or `None` for other lines.
fn strip_numbered_prefix(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..]
        .strip_prefix('.')
        .map(|rest| rest.trim_start())
}

/// Wraps shouted words as `**word**` (lowercased) in place.
///
/// Everything else passes through byte-for-byte: indentation, inner
/// whitespace runs and ordinary words are never rewritten.
fn embolden_uppercase_words(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while !rest.is_empty() {
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if word_end == 0 {
            let ws_end = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            out.push_str(&rest[..ws_end]);
            rest = &rest[ws_end..];
            continue;
        }

        let word = &rest[..word_end];
        if is_shouted_word(word) {
            out.push_str("**");
            out.push_str(&word.to_lowercase());
            out.push_str("**");
        } else {
            out.push_str(word);
        }
        rest = &rest[word_end..];
    }

    out
}

/// A word of two or more characters, all of them uppercase letters.
fn is_shouted_word(word: &str) -> bool {
    word.chars().count() > 1 && word.chars().all(char::is_uppercase)
}
