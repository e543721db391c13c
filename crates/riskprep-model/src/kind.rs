use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared kind of a table column, as carried by the table schema.
///
/// The codecs select columns by this tag rather than inspecting cell values:
/// only `Textual` columns are ever fitted, `Numeric` columns are skipped even
/// when named explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Integer or floating-point column.
    Numeric,
    /// String or categorical column.
    Textual,
    /// Anything else (dates, booleans, nested types).
    Other,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Textual => "textual",
            ColumnKind::Other => "other",
        }
    }

    /// Returns true if columns of this kind are eligible for fitting.
    pub fn is_encodable(&self) -> bool {
        matches!(self, ColumnKind::Textual)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
