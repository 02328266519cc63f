//! Shared filter and pagination composition for list endpoints.
//!
//! Every collection endpoint in the API accepts the same family of query
//! parameters: a free-text search term, exact-match filters, one- or two-sided
//! range filters, and pagination/sorting controls. This module provides the
//! two pieces that turn those parameters into SeaORM queries:
//!
//! - [`filter::FilterBuilder`] - composes a top-level AND condition from the
//!   individual filter clauses
//! - [`page::Pagination`] - resolves page/limit/sort parameters and applies
//!   them to a select, producing the `{ meta, data }` response envelope
//!
//! Malformed filter values (unparseable numbers or dates) are dropped rather
//! than rejected, so a bad query parameter never fails the whole request.

pub mod filter;
pub mod page;

pub use filter::{parse_date, parse_number, FilterBuilder};
pub use page::{PageMeta, Paginated, Pagination, SortOrder};
