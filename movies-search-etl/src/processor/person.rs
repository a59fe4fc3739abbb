//! Person lookup tables.

use std::collections::HashMap;

use crate::processor::sentinel::NOT_AVAILABLE;
use crate::source::PersonRow;

/// Id-to-name lookup for actors or writers.
///
/// Placeholder and empty names are dropped when the table is built, so their
/// ids never resolve. The table is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct PersonTable {
    names: HashMap<i64, String>,
}

impl PersonTable {
    /// Build a table from source rows.
    pub fn from_rows(rows: impl IntoIterator<Item = PersonRow>) -> Self {
        rows.into_iter().map(|row| (row.id, row.name)).collect()
    }

    /// Look up the name of `id`. Unknown ids resolve to `None`.
    pub fn resolve(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Number of resolvable persons.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no person resolves.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(i64, String)> for PersonTable {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        let names = iter
            .into_iter()
            .filter(|(_, name)| !name.is_empty() && name != NOT_AVAILABLE)
            .collect();
        Self { names }
    }
}
