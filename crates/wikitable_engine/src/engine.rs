use std::path::PathBuf;

use engine_logging::{engine_debug, engine_info};
use wikitable_core::{
    create_api_url, render_csv, SelectorError, SelectorTableExtractor, TableDecision,
    TableExtractor, TableFilter, TableOptions, UrlError,
};

use crate::decode::decode_parse_response;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::filename::table_filename;
use crate::persist::{OutputDir, PersistError};
use crate::{ExportSummary, FetchError, SkipReason, SkippedTable, WikiPage, WrittenTable};

pub const DEFAULT_TABLE_SELECTOR: &str = ".wikitable";

/// Everything one export run needs.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub url: String,
    pub table_selector: String,
    pub table_options: TableOptions,
    pub filter: TableFilter,
    pub output_dir: PathBuf,
    pub fetch: FetchSettings,
}

impl ExportConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            table_selector: DEFAULT_TABLE_SELECTOR.to_string(),
            table_options: TableOptions::default(),
            filter: TableFilter::default(),
            output_dir: PathBuf::from("."),
            fetch: FetchSettings::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("could not parse url: {0}")]
    InvalidUrl(#[from] UrlError),
    #[error("could not fetch page from wiki: {0}")]
    Fetch(#[from] FetchError),
    #[error("could not parse tables: {0}")]
    Selector(#[from] SelectorError),
    #[error("could not write csv: {0}")]
    FileWrite(#[from] PersistError),
    #[error("could not start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Fetches the page through `fetcher` and decodes the parse-API envelope.
pub async fn fetch_page(fetcher: &dyn Fetcher, api_url: &str) -> Result<WikiPage, FetchError> {
    let output = fetcher.fetch(api_url).await?;
    engine_debug!(
        "fetched {} bytes from {} ({} redirects, content type {:?})",
        output.metadata.byte_len,
        output.metadata.final_url,
        output.metadata.redirect_count,
        output.metadata.content_type
    );
    decode_parse_response(&output.bytes)
}

/// Runs one export: page URL to CSV files, one per surviving table.
///
/// Any error aborts the whole run. Files already written stay on disk.
pub async fn export_tables(
    config: &ExportConfig,
    fetcher: &dyn Fetcher,
) -> Result<ExportSummary, ExportError> {
    let query = create_api_url(&config.url)?;
    let title = query.display_title().into_owned();
    let extractor =
        SelectorTableExtractor::new(&config.table_selector, config.table_options.clone())?;

    engine_info!("getting tables for page {}...", title);
    let page = fetch_page(fetcher, &query.url).await?;
    engine_debug!("api resolved page {:?} (id {})", page.title, page.page_id);

    engine_info!("parsing data for page {}...", title);
    let grids = extractor.extract(&page.html);
    let tables_found = grids.len();
    engine_info!("parsed {} tables", tables_found);

    let output = OutputDir::create(&config.output_dir)?;
    let mut written = Vec::new();
    let mut skipped = Vec::new();

    for (index, grid) in grids.into_iter().enumerate() {
        let ordinal = index + 1;
        let reason = match config.filter.decide(ordinal) {
            TableDecision::Emit => None,
            TableDecision::NotIncluded => Some(SkipReason::NotIncluded),
            TableDecision::Excluded => Some(SkipReason::Excluded),
        };
        if let Some(reason) = reason {
            let label = match reason {
                SkipReason::NotIncluded => "not included",
                SkipReason::Excluded => "excluded",
            };
            engine_info!("skipping table {} ({})", ordinal, label);
            skipped.push(SkippedTable { ordinal, reason });
            continue;
        }

        let filename = table_filename(&title, ordinal);
        engine_info!("writing table {} to {}", ordinal, filename);
        let path = output.write(&filename, render_csv(&grid).as_bytes())?;
        written.push(WrittenTable {
            ordinal,
            path,
            rows: grid.row_count(),
        });
    }

    engine_info!("wrote {} tables to csv", written.len());
    Ok(ExportSummary {
        title,
        tables_found,
        written,
        skipped,
    })
}

/// [`export_tables`] with the default fetcher, driven to completion on a
/// current-thread runtime. Must not be called from inside a tokio runtime.
pub fn export_tables_blocking(config: &ExportConfig) -> Result<ExportSummary, ExportError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ExportError::Runtime)?;
    let fetcher = ReqwestFetcher::new(config.fetch.clone());
    runtime.block_on(export_tables(config, &fetcher))
}
