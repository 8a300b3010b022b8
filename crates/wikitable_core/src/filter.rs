use std::collections::BTreeSet;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum OrdinalParseError {
    #[error("could not parse `{0}` as a table index")]
    NotANumber(String),
    #[error("table indices start at 1, got 0")]
    Zero,
}

/// Parses a comma-separated list of 1-based table ordinals. Empty entries
/// are skipped, so `""` and `"1,,3"` are both accepted.
pub fn parse_ordinals(list: &str) -> Result<BTreeSet<usize>, OrdinalParseError> {
    let mut ordinals = BTreeSet::new();
    for entry in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let n: usize = entry
            .parse()
            .map_err(|_| OrdinalParseError::NotANumber(entry.to_string()))?;
        if n == 0 {
            return Err(OrdinalParseError::Zero);
        }
        ordinals.insert(n);
    }
    Ok(ordinals)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableDecision {
    Emit,
    /// An include list exists and does not name this ordinal.
    NotIncluded,
    Excluded,
}

/// Include/exclude sets over 1-based table ordinals. Exclusion wins over
/// inclusion; an empty include set admits every ordinal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    include: BTreeSet<usize>,
    exclude: BTreeSet<usize>,
}

impl TableFilter {
    pub fn new(include: BTreeSet<usize>, exclude: BTreeSet<usize>) -> Self {
        Self { include, exclude }
    }

    pub fn decide(&self, ordinal: usize) -> TableDecision {
        if !self.include.is_empty() && !self.include.contains(&ordinal) {
            return TableDecision::NotIncluded;
        }
        if self.exclude.contains(&ordinal) {
            return TableDecision::Excluded;
        }
        TableDecision::Emit
    }

    pub fn allows(&self, ordinal: usize) -> bool {
        self.decide(ordinal) == TableDecision::Emit
    }

    /// Pairs each surviving item with its ordinal. Ordinals come from the
    /// input position, so filtering never renumbers.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<(usize, T)> {
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index + 1, item))
            .filter(|(ordinal, _)| self.allows(*ordinal))
            .collect()
    }
}
