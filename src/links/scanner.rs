//! Generic URL scanning over message text.
//!
//! Finds every URL-like substring in order of appearance and percent-decodes
//! it before category matching. Detection is scheme-optional, so bare
//! `host/path` forms are surfaced too; the category patterns decide what
//! counts as a service link.

use linkify::{LinkFinder, LinkKind};

/// Scan `text` and return all decoded URL candidates in scan order.
///
/// A candidate whose percent-decoding fails is skipped; the scan continues
/// with the remaining candidates.
pub(crate) fn scan_decoded(text: &str) -> Vec<String> {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder.url_must_have_scheme(false);

    finder
        .links(text)
        .filter_map(|link| decode_candidate(link.as_str()))
        .collect()
}

fn decode_candidate(raw: &str) -> Option<String> {
    match urlencoding::decode(raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(err) => {
            tracing::debug!(candidate = raw, error = %err, "skipping undecodable URL candidate");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_url_in_prose() {
        let candidates = scan_decoded("check https://example.com/page for info");
        assert_eq!(candidates, vec!["https://example.com/page"]);
    }

    #[test]
    fn preserves_order_of_appearance() {
        let candidates = scan_decoded("https://c.com then https://a.com then https://b.com");
        assert_eq!(candidates.len(), 3);
        assert!(candidates[0].contains("c.com"));
        assert!(candidates[1].contains("a.com"));
        assert!(candidates[2].contains("b.com"));
    }

    #[test]
    fn percent_encoding_is_decoded() {
        let candidates = scan_decoded("see https://mega.nz/%23!abc!key now");
        assert_eq!(candidates, vec!["https://mega.nz/#!abc!key"]);
    }

    #[test]
    fn scheme_less_urls_are_detected() {
        let candidates = scan_decoded("go to mega.nz/file/abc today");
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].starts_with("mega.nz"));
    }

    #[test]
    fn undecodable_candidate_does_not_abort_scan() {
        // %FF%FE decodes to invalid UTF-8; the later candidate must survive.
        let text = "bad https://x.com/%FF%FE then good https://mega.nz/file/abc#key";
        let candidates = scan_decoded(text);
        assert_eq!(candidates, vec!["https://mega.nz/file/abc#key"]);
    }

    #[test]
    fn no_urls_yields_empty() {
        assert!(scan_decoded("just some regular words").is_empty());
    }

    #[test]
    fn empty_input_yields_empty() {
        assert!(scan_decoded("").is_empty());
    }
}
