//! Genre tokenizer.
//!
//! Turns the raw genre text of a movie into the ordered set of folder
//! names it implies. Pure function, no storage access.

/// Split raw genre text into normalized genre tokens.
///
/// The text is split on any run of `,`, `/`, or `|` (mixed runs collapse
/// to one split point), each piece is trimmed, empties are dropped, and
/// duplicates are removed case-sensitively keeping first-seen order.
/// `"Drama, Adventure"`, `"Drama/Adventure"`, and `"Drama |, Adventure"`
/// all yield `["Drama", "Adventure"]`.
///
/// An empty result means there is nothing to reconcile for the movie and
/// the caller performs no storage operations.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for piece in raw.split([',', '/', '|']) {
        let trimmed = piece.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !tokens.iter().any(|t| t == trimmed) {
            tokens.push(trimmed.to_string());
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_on_every_delimiter() {
        let expected = vec!["Drama".to_string(), "Adventure".to_string()];
        assert_eq!(tokenize("Drama, Adventure"), expected);
        assert_eq!(tokenize("Drama/Adventure"), expected);
        assert_eq!(tokenize("Drama|Adventure"), expected);
    }

    #[test]
    fn mixed_delimiter_runs_collapse() {
        assert_eq!(
            tokenize("Drama ,  /Adventure"),
            vec!["Drama".to_string(), "Adventure".to_string()]
        );
        assert_eq!(
            tokenize("|,Drama,|/,Adventure/|"),
            vec!["Drama".to_string(), "Adventure".to_string()]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize(",,//||").is_empty());
    }

    #[test]
    fn dedup_is_case_sensitive_and_order_preserving() {
        assert_eq!(
            tokenize("Drama, Drama, drama"),
            vec!["Drama".to_string(), "drama".to_string()]
        );
    }

    #[test]
    fn inner_whitespace_is_preserved() {
        assert_eq!(tokenize(" Science Fiction "), vec!["Science Fiction".to_string()]);
    }
}
