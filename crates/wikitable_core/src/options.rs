/// Class-attribute substrings that hide an element and its subtree.
///
/// Matching is a plain substring test against the raw `class` attribute
/// value, not a class-token comparison: `reference` also hides
/// `mw-references-wrap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionPolicy {
    substrings: Vec<String>,
}

impl ExclusionPolicy {
    /// Empty entries are dropped; an empty substring would match every element.
    pub fn new<I, S>(substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let substrings = substrings
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty())
            .collect();
        Self { substrings }
    }

    pub fn excludes(&self, class_attr: &str) -> bool {
        self.substrings
            .iter()
            .any(|needle| class_attr.contains(needle.as_str()))
    }

    pub fn substrings(&self) -> &[String] {
        &self.substrings
    }

    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty()
    }
}

/// Controls how a cell's DOM subtree is flattened to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOptions {
    pub trim_cells: bool,
    pub include_line_breaks: bool,
    pub exclusion: ExclusionPolicy,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            trim_cells: true,
            include_line_breaks: true,
            exclusion: ExclusionPolicy::new(["reference"]),
        }
    }
}

/// Options for turning one table element into a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub cells: CellOptions,
    /// Pad short rows with empty cells so every row has the grid's width.
    pub pad_rows: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            cells: CellOptions::default(),
            pad_rows: true,
        }
    }
}
