//! Sort spec parsing and the upstream sort allow-list.

use crate::error::{QueryError, QueryResult};

/// Fields the upstream search endpoint can sort on.
pub const VALID_SORT_FIELDS: [&str; 9] = [
    "title",
    "created",
    "listingpublisheddate",
    "type",
    "owner",
    "avgrating",
    "numratings",
    "numcomments",
    "numviews",
];

/// Valid sort directions, compared case-insensitively.
pub const VALID_SORT_ORDERS: [&str; 2] = ["asc", "desc"];

/// Field used when the sort spec is blank.
pub const DEFAULT_SORT_FIELD: &str = "title";

/// Direction used when the sort spec names no direction.
pub const DEFAULT_SORT_ORDER: &str = "DESC";

/// A sort spec split into field and direction, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: String,
}

impl SortSpec {
    /// Splits `"field [DIRECTION]"` on whitespace without checking the allow-lists.
    pub fn parse(order_by: &str) -> Self {
        let mut tokens = order_by.split_whitespace();
        let field = tokens.next().unwrap_or(DEFAULT_SORT_FIELD).to_string();
        let order = tokens.next().unwrap_or(DEFAULT_SORT_ORDER).to_string();
        Self { field, order }
    }
}

/// Checks a sort spec against the allow-lists.
pub fn validate_sort(order_by: &str) -> QueryResult<()> {
    let mut tokens = order_by.split_whitespace();

    if let Some(field) = tokens.next() {
        let known = VALID_SORT_FIELDS
            .iter()
            .any(|valid| valid.eq_ignore_ascii_case(field));
        if !known {
            return Err(QueryError::validation("Invalid sort field given"));
        }
    }

    if let Some(order) = tokens.next() {
        let known = VALID_SORT_ORDERS
            .iter()
            .any(|valid| valid.eq_ignore_ascii_case(order));
        if !known {
            return Err(QueryError::validation("Invalid sort order given"));
        }
    }

    if tokens.next().is_some() {
        return Err(QueryError::validation("Invalid sort order given"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_and_direction() {
        let spec = SortSpec::parse("created ASC");
        assert_eq!(spec.field, "created");
        assert_eq!(spec.order, "ASC");
    }

    #[test]
    fn parse_defaults_direction() {
        assert_eq!(SortSpec::parse("title").order, "DESC");
    }

    #[test]
    fn parse_blank_uses_default_field() {
        let spec = SortSpec::parse(" ");
        assert_eq!(spec.field, "title");
        assert_eq!(spec.order, "DESC");
    }

    #[test]
    fn validate_is_case_insensitive() {
        assert!(validate_sort("NumViews desc").is_ok());
        assert!(validate_sort("TITLE Asc").is_ok());
    }

    #[test]
    fn validate_rejects_unknown_field() {
        let err = validate_sort("invalidKey").unwrap_err();
        assert_eq!(err.to_string(), "Invalid sort field given");
    }

    #[test]
    fn validate_rejects_unknown_order() {
        let err = validate_sort("title invalidSortOrder").unwrap_err();
        assert_eq!(err.to_string(), "Invalid sort order given");
    }

    #[test]
    fn validate_accepts_blank() {
        assert!(validate_sort("   ").is_ok());
    }
}
