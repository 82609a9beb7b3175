use crate::error::{AppError, AppResult};

/// Minimum number of characters in a trimmed search query
pub const MIN_QUERY_LENGTH: usize = 2;

/// Validated parameters for a movie search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Query as sent by the client; trimming only applies to the length check
    pub query: String,
    pub page: u32,
}

/// Validates raw search parameters
pub fn validate_search(query: Option<&str>, page: Option<&str>) -> AppResult<SearchParams> {
    let query = query.unwrap_or_default();

    if query.trim().chars().count() < MIN_QUERY_LENGTH {
        return Err(AppError::Validation(format!(
            "Query must be at least {} characters long",
            MIN_QUERY_LENGTH
        )));
    }

    Ok(SearchParams {
        query: query.to_string(),
        page: validate_page(page)?,
    })
}

/// Parses a page number, defaulting to 1 when absent or blank
pub fn validate_page(page: Option<&str>) -> AppResult<u32> {
    let Some(raw) = page.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(1);
    };

    match raw.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(AppError::Validation(
            "Page must be a number >= 1".to_string(),
        )),
    }
}

/// Parses a movie id path segment
///
/// Non-numeric ids cannot exist upstream, so they are reported as not found.
pub fn parse_movie_id(raw: &str) -> AppResult<u64> {
    let raw = raw.trim();

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(format!("Movie '{}' not found", raw)));
    }

    raw.parse::<u64>()
        .map_err(|_| AppError::NotFound(format!("Movie '{}' not found", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_too_short_is_rejected() {
        assert!(matches!(
            validate_search(Some("a"), None),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_search(Some("  a  "), None),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_search(None, None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_two_character_query_is_accepted() {
        let params = validate_search(Some("ab"), None).unwrap();
        assert_eq!(
            params,
            SearchParams {
                query: "ab".to_string(),
                page: 1
            }
        );
    }

    #[test]
    fn test_query_is_forwarded_untrimmed() {
        let params = validate_search(Some(" ab "), None).unwrap();
        assert_eq!(params.query, " ab ");
    }

    #[test]
    fn test_query_length_counts_characters() {
        assert!(validate_search(Some("é"), None).is_err());
        assert!(validate_search(Some("éé"), None).is_ok());
    }

    #[test]
    fn test_page_validation() {
        assert_eq!(validate_page(None).unwrap(), 1);
        assert_eq!(validate_page(Some("1")).unwrap(), 1);
        assert_eq!(validate_page(Some("42")).unwrap(), 42);
        assert_eq!(validate_page(Some("")).unwrap(), 1);
        assert_eq!(validate_page(Some("   ")).unwrap(), 1);

        for bad in ["0", "-1", "abc", "1.5"] {
            assert!(
                matches!(validate_page(Some(bad)), Err(AppError::Validation(_))),
                "page {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_search_rejects_bad_page() {
        assert!(matches!(
            validate_search(Some("avatar"), Some("0")),
            Err(AppError::Validation(_))
        ));
        assert_eq!(validate_search(Some("avatar"), Some("1")).unwrap().page, 1);
    }

    #[test]
    fn test_parse_movie_id() {
        assert_eq!(parse_movie_id("550").unwrap(), 550);

        for bad in ["abc", "", "-5", "1e3", "55O", "99999999999999999999999"] {
            assert!(
                matches!(parse_movie_id(bad), Err(AppError::NotFound(_))),
                "id {bad:?} should be rejected"
            );
        }
    }
}
