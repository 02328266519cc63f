//! Filter condition composition for list queries.
//!
//! Provides `FilterBuilder`, a small builder over `sea_orm::Condition` that
//! assembles the standard filter clauses used by the API's collection
//! endpoints. All clauses are combined with AND at the top level; the search
//! clause is itself an OR across the searchable columns.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, Condition, Value};

/// Composes a top-level AND condition from optional filter clauses.
///
/// Each method is a no-op when its value is absent, so callers can chain every
/// supported filter unconditionally and let the query string decide which
/// clauses apply. An untouched builder produces a condition that matches all
/// rows.
///
/// # Example
///
/// ```rust,ignore
/// use crate::server::query::FilterBuilder;
/// use entity::trip_service::Column;
///
/// let condition = FilterBuilder::new()
///     .search(query.search_term.as_deref(), &[Column::FromLocation, Column::ToLocation])
///     .equals(Column::ServiceType, query.service_type)
///     .numeric_range(Column::Price, min_price, max_price)
///     .build();
/// ```
pub struct FilterBuilder {
    condition: Condition,
}

impl FilterBuilder {
    /// Creates a builder with an empty AND condition that matches all rows.
    pub fn new() -> Self {
        Self {
            condition: Condition::all(),
        }
    }

    /// Adds a case-insensitive substring search across the given columns.
    ///
    /// The term is matched with OR semantics: a row qualifies when any of the
    /// searchable columns contains the term. An empty term or an empty column
    /// list leaves the condition unchanged.
    ///
    /// # Arguments
    /// - `term` - Optional search term from the query string
    /// - `columns` - Columns the term is matched against
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn search<C: ColumnTrait>(mut self, term: Option<&str>, columns: &[C]) -> Self {
        if let Some(term) = term.filter(|term| !term.is_empty()) {
            if !columns.is_empty() {
                let mut any = Condition::any();
                for column in columns {
                    any = any.add(column.contains(term));
                }
                self.condition = self.condition.add(any);
            }
        }
        self
    }

    /// Adds an exact-match clause for the column when a value is present.
    ///
    /// # Arguments
    /// - `column` - Column to match against
    /// - `value` - Optional value; `None` leaves the condition unchanged
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn equals<C, V>(mut self, column: C, value: Option<V>) -> Self
    where
        C: ColumnTrait,
        V: Into<Value>,
    {
        if let Some(value) = value {
            self.condition = self.condition.add(column.eq(value));
        }
        self
    }

    /// Adds a case-insensitive substring clause for a single column.
    ///
    /// Unlike `search`, which ORs one term across several columns, this
    /// constrains one column on its own and ANDs with the rest of the
    /// filter. An absent or empty value leaves the condition unchanged.
    ///
    /// # Arguments
    /// - `column` - Column to match against
    /// - `value` - Optional substring from the query string
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn contains<C: ColumnTrait>(mut self, column: C, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            self.condition = self.condition.add(column.contains(value));
        }
        self
    }

    /// Adds a boolean equality clause parsed leniently from the query string.
    ///
    /// Accepts `true`/`false` in any case plus `1`/`0`; anything else is
    /// dropped so a malformed flag never fails the request.
    ///
    /// # Arguments
    /// - `column` - Boolean column to match against
    /// - `value` - Optional raw flag value from the query string
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn flag<C: ColumnTrait>(self, column: C, value: Option<&str>) -> Self {
        let parsed = value.and_then(|value| match value.to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        });
        self.equals(column, parsed)
    }

    /// Adds an inclusive numeric range clause for the column.
    ///
    /// Either bound may be omitted for a one-sided range. When both bounds are
    /// absent the condition is unchanged.
    ///
    /// # Arguments
    /// - `column` - Numeric column to constrain
    /// - `min` - Optional lower bound (inclusive)
    /// - `max` - Optional upper bound (inclusive)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn numeric_range<C: ColumnTrait>(
        mut self,
        column: C,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        if let Some(min) = min {
            self.condition = self.condition.add(column.gte(min));
        }
        if let Some(max) = max {
            self.condition = self.condition.add(column.lte(max));
        }
        self
    }

    /// Adds an inclusive date range clause for the column.
    ///
    /// Either bound may be omitted for a one-sided range. When both bounds are
    /// absent the condition is unchanged.
    ///
    /// # Arguments
    /// - `column` - Timestamp column to constrain
    /// - `from` - Optional lower bound (inclusive)
    /// - `to` - Optional upper bound (inclusive)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn date_range<C: ColumnTrait>(
        mut self,
        column: C,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        if let Some(from) = from {
            self.condition = self.condition.add(column.gte(from));
        }
        if let Some(to) = to {
            self.condition = self.condition.add(column.lte(to));
        }
        self
    }

    /// Finishes composition and returns the combined condition.
    pub fn build(self) -> Condition {
        self.condition
    }
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Leniently parses a numeric filter value from the query string.
///
/// Returns `None` for absent, empty, or unparseable input so that malformed
/// filter values are dropped instead of failing the request.
pub fn parse_number(value: Option<&str>) -> Option<f64> {
    value
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
}

/// Leniently parses a date filter value from the query string.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates, which are taken
/// as midnight UTC. Returns `None` for absent, empty, or unparseable input so
/// that malformed filter values are dropped instead of failing the request.
pub fn parse_date(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value.filter(|value| !value.is_empty())?;

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::trip_service::{Column, Entity, ServiceType};
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    fn to_sql(condition: Condition) -> String {
        Entity::find()
            .filter(condition)
            .build(DbBackend::Sqlite)
            .to_string()
    }

    #[test]
    fn empty_builder_matches_all_rows() {
        let sql = to_sql(FilterBuilder::new().build());

        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn search_produces_or_across_columns() {
        let condition = FilterBuilder::new()
            .search(Some("geneva"), &[Column::FromLocation, Column::ToLocation])
            .build();
        let sql = to_sql(condition);

        assert!(sql.contains(r#""from_location" LIKE '%geneva%'"#));
        assert!(sql.contains(r#""to_location" LIKE '%geneva%'"#));
        assert!(sql.contains(" OR "));
    }

    #[test]
    fn empty_search_term_is_dropped() {
        let condition = FilterBuilder::new()
            .search(Some(""), &[Column::FromLocation])
            .build();

        assert!(!to_sql(condition).contains("WHERE"));
    }

    #[test]
    fn search_with_no_columns_is_dropped() {
        let columns: &[Column] = &[];
        let condition = FilterBuilder::new().search(Some("geneva"), columns).build();

        assert!(!to_sql(condition).contains("WHERE"));
    }

    #[test]
    fn clauses_combine_with_and_at_top_level() {
        let condition = FilterBuilder::new()
            .search(Some("geneva"), &[Column::FromLocation])
            .equals(Column::ServiceType, Some(ServiceType::DayTrip))
            .build();
        let sql = to_sql(condition);

        assert!(sql.contains(" AND "));
        assert!(sql.contains(r#""service_type" = 'DAY_TRIP'"#));
    }

    #[test]
    fn contains_constrains_a_single_column() {
        let condition = FilterBuilder::new()
            .contains(Column::FromLocation, Some("geneva"))
            .build();
        let sql = to_sql(condition);

        assert!(sql.contains(r#""from_location" LIKE '%geneva%'"#));
        assert!(!sql.contains(" OR "));
    }

    #[test]
    fn flag_parses_leniently_and_drops_garbage() {
        let truthy = to_sql(FilterBuilder::new().flag(Column::IsPopular, Some("TRUE")).build());
        assert!(truthy.contains(r#""is_popular" = TRUE"#));

        let falsy = to_sql(FilterBuilder::new().flag(Column::IsPopular, Some("0")).build());
        assert!(falsy.contains(r#""is_popular" = FALSE"#));

        let garbage = to_sql(FilterBuilder::new().flag(Column::IsPopular, Some("maybe")).build());
        assert!(!garbage.contains("WHERE"));
    }

    #[test]
    fn numeric_range_supports_one_sided_bounds() {
        let lower_only = to_sql(
            FilterBuilder::new()
                .numeric_range(Column::Price, Some(50.0), None)
                .build(),
        );
        assert!(lower_only.contains(r#""price" >= 50"#));
        assert!(!lower_only.contains("<="));

        let upper_only = to_sql(
            FilterBuilder::new()
                .numeric_range(Column::Price, None, Some(200.0))
                .build(),
        );
        assert!(upper_only.contains(r#""price" <= 200"#));
        assert!(!upper_only.contains(">="));
    }

    #[test]
    fn numeric_range_with_both_bounds_is_inclusive() {
        let sql = to_sql(
            FilterBuilder::new()
                .numeric_range(Column::Price, Some(50.0), Some(200.0))
                .build(),
        );

        assert!(sql.contains(r#""price" >= 50"#));
        assert!(sql.contains(r#""price" <= 200"#));
    }

    #[test]
    fn date_range_constrains_timestamp_column() {
        let from = parse_date(Some("2026-01-01"));
        let to = parse_date(Some("2026-02-01"));
        let sql = to_sql(
            FilterBuilder::new()
                .date_range(Column::CreatedAt, from, to)
                .build(),
        );

        assert!(sql.contains(r#""created_at" >="#));
        assert!(sql.contains(r#""created_at" <="#));
    }

    #[test]
    fn parse_number_drops_malformed_input() {
        assert_eq!(parse_number(Some("42.5")), Some(42.5));
        assert_eq!(parse_number(Some("not-a-number")), None);
        assert_eq!(parse_number(Some("")), None);
        assert_eq!(parse_number(None), None);
    }

    #[test]
    fn parse_date_accepts_rfc3339_and_bare_dates() {
        assert!(parse_date(Some("2026-08-30T12:00:00Z")).is_some());

        let midnight = parse_date(Some("2026-08-30")).unwrap();
        assert_eq!(midnight.to_rfc3339(), "2026-08-30T00:00:00+00:00");

        assert_eq!(parse_date(Some("30/08/2026")), None);
        assert_eq!(parse_date(None), None);
    }
}
