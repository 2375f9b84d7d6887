//! Splits one statement into terms.
//!
//! Boundaries are whitespace (any Unicode whitespace) and `.`, both ignored
//! inside blocks. A token keeps the non-whitespace boundary that ended it
//! (`ex:o.`), so the triple extractor can see where a predicate/object list
//! stops.

use crate::scanner::BlockScanner;

/// Punctuation that steers the predicate/object walk.
const CONTROL: [char; 3] = [';', ',', '.'];

fn is_token_boundary(c: char) -> bool {
    c.is_whitespace() || c == '.'
}

/// Tokenize a single statement.
///
/// Tokens are trimmed and never empty. A token made only of control
/// punctuation (the `;` in `<o1> ; <p2>`) is glued onto the token before it.
///
/// ```
/// use turtlefacts::tokenize::tokenize;
///
/// let tokens = tokenize("<a> <p> \"x y\" ; <q> <o> .");
/// assert_eq!(tokens, ["<a>", "<p>", "\"x y\";", "<q>", "<o>."]);
/// ```
pub fn tokenize(statement: &str) -> Vec<String> {
    let mut scanner = BlockScanner::new(is_token_boundary);
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, c) in statement.char_indices() {
        if scanner.step(c) {
            let end = i + c.len_utf8();
            push_token(&mut tokens, &statement[start..end]);
            start = end;
        }
    }
    push_token(&mut tokens, &statement[start..]);

    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: &str) {
    let token = raw.trim();
    if token.is_empty() {
        return;
    }
    match tokens.last_mut() {
        Some(prev) if token.chars().all(|c| CONTROL.contains(&c)) => prev.push_str(token),
        _ => tokens.push(token.to_string()),
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_statement() {
        assert_eq!(tokenize("<a> <b> <c> ."), ["<a>", "<b>", "<c>."]);
    }

    #[test]
    fn terminator_attached_directly() {
        assert_eq!(tokenize("ex:a ex:b ex:c."), ["ex:a", "ex:b", "ex:c."]);
    }

    #[test]
    fn whitespace_inside_literal_is_kept() {
        assert_eq!(
            tokenize("<a> <b> \"hello  world. again\" ."),
            ["<a>", "<b>", "\"hello  world. again\"."]
        );
    }

    #[test]
    fn whitespace_inside_uri_is_kept() {
        assert_eq!(tokenize("<a b> <c> <d>"), ["<a b>", "<c>", "<d>"]);
    }

    #[test]
    fn free_standing_semicolon_joins_previous() {
        assert_eq!(
            tokenize("<a> <p1> <o1> ; <p2> <o2> ."),
            ["<a>", "<p1>", "<o1>;", "<p2>", "<o2>."]
        );
    }

    #[test]
    fn free_standing_comma_joins_previous() {
        assert_eq!(
            tokenize("<a> <p> <o1> , <o2> ."),
            ["<a>", "<p>", "<o1>,", "<o2>."]
        );
    }

    #[test]
    fn attached_comma_stays_put() {
        assert_eq!(tokenize("<a> <p> <o1>, <o2>."), ["<a>", "<p>", "<o1>,", "<o2>."]);
    }

    #[test]
    fn leading_punctuation_is_its_own_token() {
        assert_eq!(tokenize("; <a>"), [";", "<a>"]);
    }

    #[test]
    fn empty_statement() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn tabs_and_newlines_are_boundaries() {
        assert_eq!(tokenize("<a>\t<b>\n<c>"), ["<a>", "<b>", "<c>"]);
    }

    #[test]
    fn unicode_whitespace_separates_tokens() {
        assert_eq!(
            tokenize("<a>\u{00A0}<b>\u{2003}<c> ."),
            ["<a>", "<b>", "<c>."]
        );
    }

    #[test]
    fn unicode_whitespace_inside_literal_is_kept() {
        assert_eq!(
            tokenize("<a> <b> \"x\u{2003}y\"."),
            ["<a>", "<b>", "\"x\u{2003}y\"."]
        );
    }
}
