//! Wikitable core: pure table-to-grid logic, free of IO.
//!
//! The pipeline for one page is: [`create_api_url`] to locate the page's
//! parse API, then [`SelectorTableExtractor`] to turn rendered HTML into
//! [`Grid`]s, [`TableFilter`] to pick tables by ordinal, and [`render_csv`]
//! to serialize each survivor.
mod api_url;
mod csv;
mod extract;
mod filter;
mod flatten;
mod grid;
mod options;

pub use api_url::{create_api_url, ApiQuery, UrlError};
pub use csv::{escape_field, render_csv, write_csv};
pub use extract::{
    parse_selector, select_tables, SelectorError, SelectorTableExtractor, TableExtractor,
};
pub use filter::{parse_ordinals, OrdinalParseError, TableDecision, TableFilter};
pub use flatten::flatten_cell;
pub use grid::{build_grid, Grid, Row, Span};
pub use options::{CellOptions, ExclusionPolicy, TableOptions};
