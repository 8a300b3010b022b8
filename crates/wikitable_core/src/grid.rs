use scraper::ElementRef;

use crate::flatten::flatten_cell;
use crate::options::TableOptions;

/// HTML clamps `rowspan` to this value.
const MAX_ROWSPAN: usize = 65_534;
/// HTML clamps `colspan` to this value.
const MAX_COLSPAN: usize = 1_000;

/// One grid row; the index of a cell is its column.
pub type Row = Vec<String>;

/// Text cells of one source table, row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// `(rows, cols)` covered by a single source cell. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Span {
    fn default() -> Self {
        Self { rows: 1, cols: 1 }
    }
}

impl Span {
    pub fn from_attrs(rowspan: Option<&str>, colspan: Option<&str>) -> Self {
        Self {
            rows: parse_span(rowspan, MAX_ROWSPAN),
            cols: parse_span(colspan, MAX_COLSPAN),
        }
    }

    fn of(cell: ElementRef<'_>) -> Self {
        let element = cell.value();
        Self::from_attrs(element.attr("rowspan"), element.attr("colspan"))
    }
}

/// Reads the leading decimal digits of a span attribute. Anything that does
/// not yield a positive number falls back to 1.
fn parse_span(value: Option<&str>, max: usize) -> usize {
    value
        .map(str::trim)
        .and_then(|raw| {
            let end = raw
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(raw.len());
            raw[..end].parse::<usize>().ok()
        })
        .filter(|&n| n > 0)
        .map(|n| n.min(max))
        .unwrap_or(1)
}

/// Builds the grid for one table element.
///
/// Rows are the element's `tr` descendants and cells the `th`/`td`
/// descendants of each row, both in document order. The `i`th cell of a row
/// is placed at the first column from `i` onwards that does not already hold
/// non-empty text, and its text is written to every position its span
/// covers. Empty text does not occupy a position, so a later cell may
/// overwrite it. Rows grow on demand in both directions.
pub fn build_grid(table: ElementRef<'_>, options: &TableOptions) -> Grid {
    let mut rows: Vec<Row> = Vec::new();

    for (y, tr) in descendant_elements(table, &["tr"]).enumerate() {
        for (i, cell) in descendant_elements(tr, &["th", "td"]).enumerate() {
            let mut x = i;
            let span = Span::of(cell);
            ensure_rows(&mut rows, y + 1);

            while rows[y].get(x).is_some_and(|text| !text.is_empty()) {
                x += 1;
            }

            let text = flatten_cell(cell, &options.cells);
            ensure_rows(&mut rows, y + span.rows);
            for row in &mut rows[y..y + span.rows] {
                if row.len() < x + span.cols {
                    row.resize(x + span.cols, String::new());
                }
                for slot in &mut row[x..x + span.cols] {
                    slot.clone_from(&text);
                }
            }
        }
    }

    if options.pad_rows {
        pad_rows(&mut rows);
    }

    Grid { rows }
}

fn ensure_rows(rows: &mut Vec<Row>, len: usize) {
    if rows.len() < len {
        rows.resize_with(len, Vec::new);
    }
}

fn pad_rows(rows: &mut [Row]) {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in rows {
        row.resize(width, String::new());
    }
}

/// Element descendants of `root` (excluding `root`) whose tag is in `names`.
fn descendant_elements<'a>(
    root: ElementRef<'a>,
    names: &'static [&'static str],
) -> impl Iterator<Item = ElementRef<'a>> {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |element| {
            let name = element.value().name();
            names.iter().any(|wanted| name.eq_ignore_ascii_case(wanted))
        })
}

#[cfg(test)]
mod tests {
    use super::{parse_span, MAX_COLSPAN};

    #[test]
    fn span_parsing_degrades_to_one() {
        assert_eq!(parse_span(None, MAX_COLSPAN), 1);
        assert_eq!(parse_span(Some(""), MAX_COLSPAN), 1);
        assert_eq!(parse_span(Some("abc"), MAX_COLSPAN), 1);
        assert_eq!(parse_span(Some("0"), MAX_COLSPAN), 1);
        assert_eq!(parse_span(Some("-2"), MAX_COLSPAN), 1);
        assert_eq!(parse_span(Some("99999999999999999999999"), MAX_COLSPAN), 1);
    }

    #[test]
    fn span_parsing_accepts_leading_digits() {
        assert_eq!(parse_span(Some("2"), MAX_COLSPAN), 2);
        assert_eq!(parse_span(Some(" 3 "), MAX_COLSPAN), 3);
        assert_eq!(parse_span(Some("4px"), MAX_COLSPAN), 4);
    }

    #[test]
    fn span_is_clamped() {
        assert_eq!(parse_span(Some("5000"), MAX_COLSPAN), MAX_COLSPAN);
    }
}
