use engine_logging::engine_debug;
use scraper::{ElementRef, Html, Selector};

use crate::grid::{build_grid, Grid};
use crate::options::TableOptions;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("invalid table selector `{selector}`: {message}")]
pub struct SelectorError {
    pub selector: String,
    pub message: String,
}

pub fn parse_selector(selector: &str) -> Result<Selector, SelectorError> {
    Selector::parse(selector).map_err(|err| SelectorError {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// All elements matching `selector`, in document order. A match nested
/// inside another match is returned as its own entry.
pub fn select_tables<'a>(doc: &'a Html, selector: &Selector) -> Vec<ElementRef<'a>> {
    doc.select(selector).collect()
}

pub trait TableExtractor {
    /// Grids for every matched table, in extraction (ordinal) order.
    fn extract(&self, html: &str) -> Vec<Grid>;
}

/// Extracts tables matched by a CSS selector, e.g. `.wikitable`.
#[derive(Debug, Clone)]
pub struct SelectorTableExtractor {
    selector: Selector,
    options: TableOptions,
}

impl SelectorTableExtractor {
    pub fn new(selector: &str, options: TableOptions) -> Result<Self, SelectorError> {
        Ok(Self {
            selector: parse_selector(selector)?,
            options,
        })
    }
}

impl TableExtractor for SelectorTableExtractor {
    fn extract(&self, html: &str) -> Vec<Grid> {
        let doc = Html::parse_document(html);
        select_tables(&doc, &self.selector)
            .into_iter()
            .enumerate()
            .map(|(index, table)| {
                let grid = build_grid(table, &self.options);
                engine_debug!(
                    "table {} -> {} rows x {} cols",
                    index + 1,
                    grid.row_count(),
                    grid.width()
                );
                grid
            })
            .collect()
    }
}
