use std::collections::HashMap;

use crate::data_models::SearchCursor;
use crate::error::SearchError;

pub const KEYWORD_PARAM: &str = "q";
pub const PAGE_PARAM: &str = "page";

/// Builds a cursor from the raw `/search` query parameters.
///
/// A missing `q` is an empty keyword, which is a valid search. A missing or
/// empty `page` means page 1; anything that isn't a positive integer is
/// rejected. There is no upper bound here, an out-of-range page just comes
/// back empty from upstream.
pub fn parse(params: &HashMap<String, String>) -> Result<SearchCursor, SearchError> {
    let keyword = params.get(KEYWORD_PARAM).cloned().unwrap_or_default();

    let requested_page = match params.get(PAGE_PARAM).map(|p| p.trim()) {
        None | Some("") => 1,
        Some(raw) => match raw.parse::<u32>() {
            Ok(page) if page >= 1 => page,
            _ => return Err(SearchError::InvalidPageNumber(raw.to_string())),
        },
    };

    Ok(SearchCursor {
        keyword,
        requested_page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_to_first_page() {
        let cursor = parse(&params(&[("q", "rust")])).unwrap();
        assert_eq!(cursor, SearchCursor::new("rust", 1));

        let cursor = parse(&params(&[("q", "rust"), ("page", "")])).unwrap();
        assert_eq!(cursor.requested_page, 1);
    }

    #[test]
    fn test_empty_keyword_is_valid() {
        let cursor = parse(&params(&[])).unwrap();
        assert_eq!(cursor.keyword, "");
        assert_eq!(cursor.requested_page, 1);

        let cursor = parse(&params(&[("q", ""), ("page", "4")])).unwrap();
        assert_eq!(cursor.keyword, "");
        assert_eq!(cursor.requested_page, 4);
    }

    #[test]
    fn test_explicit_page() {
        let cursor = parse(&params(&[("q", "rust lang"), ("page", "3")])).unwrap();
        assert_eq!(cursor.keyword, "rust lang");
        assert_eq!(cursor.requested_page, 3);

        let cursor = parse(&params(&[("page", " 7 ")])).unwrap();
        assert_eq!(cursor.requested_page, 7);
    }

    #[test]
    fn test_invalid_page_numbers() {
        for bad in ["abc", "0", "-1", "2.5", "99999999999"] {
            let err = parse(&params(&[("q", "rust"), ("page", bad)])).unwrap_err();
            assert!(
                matches!(err, SearchError::InvalidPageNumber(ref raw) if raw == bad),
                "expected InvalidPageNumber for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_is_deterministic() {
        let p = params(&[("q", "news"), ("page", "2")]);
        assert_eq!(parse(&p).unwrap(), parse(&p).unwrap());
    }
}
