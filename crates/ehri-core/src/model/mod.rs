//! Row types produced by the normalizers.
//!
//! Every table is a `Vec` of one struct per row. Rows serialize with the
//! field names the chart and map widgets read.

mod records;
mod tables;

pub use records::{CountryRecord, FacetRecord, RepositoryPoint};
pub use tables::{CountrySummaryRow, CountryTables, GeoPoint};
