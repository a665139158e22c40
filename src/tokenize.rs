//! URI tokenization.
//!
//! A URI is reduced to one flat token stream before it meets the trie: the
//! path contributes one token per `/`-separated segment, and the query is
//! flattened onto the end, `k=v` pairs as two tokens and bare keys as one.
//! A terminating `/` leaves a final empty path token behind, which is what
//! a trailing-slash route consumes.

/// Tokenize a URI into its combined path and query token stream.
///
/// Surrounding whitespace is trimmed first; a URI that trims to nothing has
/// no token stream at all (distinct from an empty stream) and can never
/// match, so `None` is returned.
pub(crate) fn tokenize(uri: &str) -> Option<Vec<&str>> {
    let uri = uri.trim();
    if uri.is_empty() {
        return None;
    }

    let (path, query) = match uri.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (uri, None),
    };

    let mut tokens = Vec::new();
    if !path.is_empty() {
        let mut segments = path.split('/');
        if path.starts_with('/') {
            // drop the empty segment the leading slash produces
            segments.next();
        }
        tokens.extend(segments);
    }

    if let Some(query) = query {
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) => {
                    tokens.push(key);
                    tokens.push(value);
                }
                None => tokens.push(pair),
            }
        }
    }

    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn paths_split_on_slashes() {
        assert_eq!(tokenize("/home/about"), Some(vec!["home", "about"]));
        assert_eq!(tokenize("/home"), Some(vec!["home"]));
    }

    #[test]
    fn a_terminating_slash_leaves_an_empty_token() {
        assert_eq!(tokenize("/home/about/"), Some(vec!["home", "about", ""]));
        assert_eq!(tokenize("/"), Some(vec![""]));
    }

    #[test]
    fn empty_input_has_no_token_stream() {
        assert_eq!(tokenize(""), None);
        assert_eq!(tokenize("   \t\n"), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(tokenize("  /home/about  "), Some(vec!["home", "about"]));
        // trimming is idempotent
        assert_eq!(tokenize(" /a "), tokenize("/a"));
    }

    #[test]
    fn queries_flatten_onto_the_path_tokens() {
        assert_eq!(
            tokenize("/search?q=5&verbose"),
            Some(vec!["search", "q", "5", "verbose"])
        );
        assert_eq!(tokenize("/search?q="), Some(vec!["search", "q", ""]));
    }

    #[test]
    fn only_the_first_equals_splits_a_pair() {
        assert_eq!(tokenize("/a?x=y=z"), Some(vec!["a", "x", "y=z"]));
    }

    #[test]
    fn empty_queries_and_empty_pairs_contribute_nothing() {
        assert_eq!(tokenize("/a?"), Some(vec!["a"]));
        assert_eq!(tokenize("/a?x&&y"), Some(vec!["a", "x", "y"]));
        assert_eq!(tokenize("?k=v"), Some(vec!["k", "v"]));
    }

    #[test]
    fn newlines_inside_segments_are_preserved() {
        assert_eq!(
            tokenize("/home/products/xyz\nabc"),
            Some(vec!["home", "products", "xyz\nabc"])
        );
    }
}
