//! Wikitable engine: fetches a MediaWiki page and writes its tables as CSV.
mod decode;
mod engine;
mod fetch;
mod filename;
mod persist;
mod types;

pub use decode::decode_parse_response;
pub use engine::{
    export_tables, export_tables_blocking, fetch_page, ExportConfig, ExportError,
    DEFAULT_TABLE_SELECTOR,
};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use filename::table_filename;
pub use persist::{OutputDir, PersistError};
pub use types::{
    ExportSummary, FailureKind, FetchError, FetchMetadata, FetchOutput, SkipReason,
    SkippedTable, WikiPage, WrittenTable,
};
