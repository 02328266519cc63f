//! Pagination, sorting, and the paginated response envelope.
//!
//! Resolves the `page`, `limit`, `sortBy`, and `sortOrder` query parameters
//! into concrete values, applies them to a SeaORM select, and wraps results in
//! the `{ meta: { total, page, limit }, data: [...] }` envelope every list
//! endpoint returns.

use std::str::FromStr;

use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Select};
use serde::Serialize;

/// Column used for ordering when the client does not request a sort column
/// or requests one that does not exist on the entity.
const DEFAULT_SORT_COLUMN: &str = "created_at";

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

/// Direction applied to the resolved sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses a sort order from the query string.
    ///
    /// Only `"asc"` (case-insensitive) selects ascending order; anything
    /// else, including absent or malformed input, falls back to descending,
    /// newest-first being the natural default for every listing.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(value) if value.eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

/// Resolved pagination and sorting parameters for a list query.
///
/// Built from raw query-string input via [`Pagination::from_query`], which
/// substitutes defaults for absent or malformed values. Both `page` and
/// `limit` are guaranteed to be at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// One-indexed page number.
    pub page: u64,
    /// Number of rows per page.
    pub limit: u64,
    /// Requested sort column in snake_case, unvalidated until applied.
    pub sort_by: Option<String>,
    /// Sort direction for the resolved column.
    pub sort_order: SortOrder,
}

impl Pagination {
    /// Resolves pagination parameters from raw query-string values.
    ///
    /// Absent, zero, or unparseable `page` and `limit` values fall back to
    /// page 1 and limit 10. The sort column is kept as-is and validated
    /// against the entity's columns when the pagination is applied.
    ///
    /// # Arguments
    /// - `page` - Raw page value from the query string
    /// - `limit` - Raw limit value from the query string
    /// - `sort_by` - Requested sort column
    /// - `sort_order` - Raw sort order value from the query string
    ///
    /// # Returns
    /// - `Pagination` - Resolved parameters with defaults substituted
    pub fn from_query(
        page: Option<&str>,
        limit: Option<&str>,
        sort_by: Option<String>,
        sort_order: Option<&str>,
    ) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
            sort_by,
            sort_order: SortOrder::parse(sort_order),
        }
    }

    /// Number of rows skipped before the requested page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// Applies sorting and paging to a select.
    ///
    /// The requested sort column is resolved against the entity's columns by
    /// name; an unknown or absent column falls back to `created_at`
    /// descending. Entities without a `created_at` column are returned in
    /// database order.
    ///
    /// # Arguments
    /// - `select` - Select statement to extend
    ///
    /// # Returns
    /// - `Select<E>` - The select with ORDER BY, LIMIT, and OFFSET applied
    pub fn apply<E>(&self, select: Select<E>) -> Select<E>
    where
        E: EntityTrait,
        E::Column: FromStr,
    {
        let requested = self
            .sort_by
            .as_deref()
            .and_then(|name| E::Column::from_str(name).ok());

        let select = match requested {
            Some(column) => match self.sort_order {
                SortOrder::Asc => select.order_by_asc(column),
                SortOrder::Desc => select.order_by_desc(column),
            },
            None => match E::Column::from_str(DEFAULT_SORT_COLUMN).ok() {
                Some(column) => select.order_by_desc(column),
                None => select,
            },
        };

        select.offset(self.offset()).limit(self.limit)
    }

    /// Builds the response metadata for this page.
    ///
    /// # Arguments
    /// - `total` - Total number of rows matching the filter, across all pages
    pub fn meta(&self, total: u64) -> PageMeta {
        PageMeta {
            total,
            page: self.page,
            limit: self.limit,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::from_query(None, None, None, None)
    }
}

fn parse_positive(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
}

/// Pagination metadata returned alongside every list response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    /// Total number of rows matching the filter, across all pages.
    pub total: u64,
    /// One-indexed page number that was returned.
    pub page: u64,
    /// Number of rows per page that was applied.
    pub limit: u64,
}

/// Standard envelope for list responses: metadata plus the page of rows.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub meta: PageMeta,
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    /// Wraps a page of rows with its metadata.
    pub fn new(meta: PageMeta, data: Vec<T>) -> Self {
        Self { meta, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::trip_service::Entity;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait};

    fn to_sql(pagination: &Pagination) -> String {
        pagination
            .apply(Entity::find())
            .build(DbBackend::Sqlite)
            .to_string()
    }

    #[test]
    fn defaults_to_first_page_of_ten() {
        let pagination = Pagination::from_query(None, None, None, None);

        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.sort_order, SortOrder::Desc);
    }

    #[test]
    fn malformed_page_and_limit_fall_back_to_defaults() {
        let pagination = Pagination::from_query(Some("abc"), Some("0"), None, None);

        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let pagination = Pagination::from_query(Some("3"), Some("20"), None, None);

        assert_eq!(pagination.offset(), 40);
    }

    #[test]
    fn applies_requested_sort_column_and_order() {
        let pagination =
            Pagination::from_query(None, None, Some("price".to_string()), Some("asc"));
        let sql = to_sql(&pagination);

        assert!(sql.contains(r#"ORDER BY "trip_service"."price" ASC"#));
    }

    #[test]
    fn unknown_sort_column_falls_back_to_created_at_desc() {
        let pagination =
            Pagination::from_query(None, None, Some("no_such_column".to_string()), None);
        let sql = to_sql(&pagination);

        assert!(sql.contains(r#"ORDER BY "trip_service"."created_at" DESC"#));
    }

    #[test]
    fn absent_sort_defaults_to_created_at_desc() {
        let pagination = Pagination::default();
        let sql = to_sql(&pagination);

        assert!(sql.contains(r#"ORDER BY "trip_service"."created_at" DESC"#));
    }

    #[test]
    fn applies_limit_and_offset() {
        let pagination = Pagination::from_query(Some("2"), Some("5"), None, None);
        let sql = to_sql(&pagination);

        assert!(sql.contains("LIMIT 5"));
        assert!(sql.contains("OFFSET 5"));
    }

    #[test]
    fn sort_order_parsing_is_lenient() {
        assert_eq!(SortOrder::parse(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("ASC")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("sideways")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(None), SortOrder::Desc);
    }

    #[test]
    fn meta_reflects_resolved_parameters() {
        let pagination = Pagination::from_query(Some("2"), Some("5"), None, None);
        let meta = pagination.meta(42);

        assert_eq!(
            meta,
            PageMeta {
                total: 42,
                page: 2,
                limit: 5
            }
        );
    }
}
