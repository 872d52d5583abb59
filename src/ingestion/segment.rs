use regex::Regex;
use std::sync::OnceLock;

/// Fragment delimiter in downloaded text.
pub const DELIMITER: char = '.';

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"))
}

/// Splits a document body into record contents.
///
/// Empty pieces between consecutive delimiters are discarded. The final remaining
/// piece is always dropped, whether or not it is followed by a delimiter.
pub fn segment_fragments(body: &str) -> Vec<String> {
    let pieces: Vec<&str> = body
        .split(DELIMITER)
        .filter(|piece| !piece.is_empty())
        .collect();

    let keep = pieces.len().saturating_sub(1);
    pieces[..keep]
        .iter()
        .map(|piece| normalize_fragment(piece))
        .collect()
}

/// Collapses runs of two or more whitespace characters into one space and trims.
pub fn normalize_fragment(fragment: &str) -> String {
    whitespace_runs()
        .replace_all(fragment, " ")
        .trim()
        .to_string()
}
