//! Turns the tokens of one statement into triples.
//!
//! The first token is the subject. The rest alternate predicate, object, with
//! the punctuation at the end of each object deciding what comes next:
//!
//! | object ends with | next token is |
//! |------------------|---------------|
//! | `;` or `.` | a new predicate |
//! | `,` or nothing | another object for the same predicate |

use crate::types::Triple;

/// Extract every complete predicate/object pair in `tokens`.
///
/// A statement with fewer than three tokens has no complete pair and yields
/// nothing; that is not an error. A trailing predicate with no object is
/// dropped the same way.
pub fn extract_triples<S: AsRef<str>>(tokens: &[S]) -> Vec<Triple> {
    let Some((subject, rest)) = tokens.split_first() else {
        return vec![];
    };
    let subject = subject.as_ref();

    let mut triples = Vec::new();
    let mut predicate: Option<&str> = None;

    for token in rest {
        let token = token.as_ref();
        let Some(current) = predicate else {
            predicate = Some(token);
            continue;
        };

        let (object, terminator) = split_terminator(token);
        triples.push(Triple::new(subject, current, object));
        if matches!(terminator, Some(';' | '.')) {
            predicate = None;
        }
    }

    triples
}

/// Split one trailing `;`, `.` or `,` off `token`.
fn split_terminator(token: &str) -> (&str, Option<char>) {
    match token.chars().last() {
        Some(c @ (';' | '.' | ',')) => (&token[..token.len() - 1], Some(c)),
        _ => (token, None),
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(s, p, o)
    }

    #[test]
    fn single_triple() {
        assert_eq!(extract_triples(&["<a>", "<b>", "<c>."]), vec![t("<a>", "<b>", "<c>")]);
    }

    #[test]
    fn semicolon_starts_new_predicate() {
        let tokens = ["<a>", "<p1>", "<o1>;", "<p2>", "<o2>."];
        assert_eq!(
            extract_triples(&tokens),
            vec![t("<a>", "<p1>", "<o1>"), t("<a>", "<p2>", "<o2>")]
        );
    }

    #[test]
    fn comma_keeps_predicate() {
        let tokens = ["<a>", "<p>", "<o1>,", "<o2>."];
        assert_eq!(
            extract_triples(&tokens),
            vec![t("<a>", "<p>", "<o1>"), t("<a>", "<p>", "<o2>")]
        );
    }

    #[test]
    fn mixed_chaining() {
        let tokens = ["ex:s", "ex:p", "ex:a,", "ex:b;", "ex:q", "\"lit\"."];
        assert_eq!(
            extract_triples(&tokens),
            vec![
                t("ex:s", "ex:p", "ex:a"),
                t("ex:s", "ex:p", "ex:b"),
                t("ex:s", "ex:q", "\"lit\""),
            ]
        );
    }

    #[test]
    fn unterminated_object_keeps_predicate() {
        let tokens = ["<a>", "<p>", "<o1>", "<o2>"];
        assert_eq!(
            extract_triples(&tokens),
            vec![t("<a>", "<p>", "<o1>"), t("<a>", "<p>", "<o2>")]
        );
    }

    #[test]
    fn strips_only_one_terminator() {
        assert_eq!(extract_triples(&["<a>", "<b>", "<c>;."]), vec![t("<a>", "<b>", "<c>;")]);
    }

    #[test]
    fn subject_only_yields_nothing() {
        assert!(extract_triples(&["<a>."]).is_empty());
    }

    #[test]
    fn subject_and_predicate_yield_nothing() {
        assert!(extract_triples(&["<a>", "<b>."]).is_empty());
    }

    #[test]
    fn empty_tokens_yield_nothing() {
        let none: [&str; 0] = [];
        assert!(extract_triples(&none).is_empty());
    }

    #[test]
    fn dangling_predicate_after_semicolon_is_dropped() {
        let tokens = ["<a>", "<p>", "<o>;", "<q>"];
        assert_eq!(extract_triples(&tokens), vec![t("<a>", "<p>", "<o>")]);
    }

    #[test]
    fn accepts_owned_tokens() {
        let tokens: Vec<String> = vec!["<a>".into(), "<b>".into(), "<c>".into()];
        assert_eq!(extract_triples(&tokens), vec![t("<a>", "<b>", "<c>")]);
    }
}
