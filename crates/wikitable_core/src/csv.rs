use std::borrow::Cow;
use std::io::{self, Write};

use crate::grid::Grid;

fn needs_quotes(field: &str) -> bool {
    field.contains(['"', ',', '\r', '\n'])
}

/// Quotes a field only if it contains `"`, `,`, `\r` or `\n`; inner quotes
/// are doubled.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if needs_quotes(field) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// One line per row, each terminated by `\n`. Rows are written with their
/// own length; no width is assumed.
pub fn render_csv(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&escape_field(cell));
        }
        out.push('\n');
    }
    out
}

pub fn write_csv<W: Write>(grid: &Grid, mut w: W) -> io::Result<()> {
    w.write_all(render_csv(grid).as_bytes())?;
    w.flush()
}
