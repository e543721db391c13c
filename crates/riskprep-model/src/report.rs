use serde::{Deserialize, Serialize};

/// Data-quality issue for a single column during a transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnIssue {
    /// Column name.
    pub column: String,
    /// Distinct raw values that were not seen at fit time, in encounter order.
    pub unseen: Vec<String>,
}

/// Data-quality report for one transform call.
///
/// Unseen values never fail a transform; they degrade to the missing value
/// and are collected here for review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncodeReport {
    pub issues: Vec<ColumnIssue>,
}

impl EncodeReport {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Total number of distinct unseen values across all columns.
    pub fn unseen_count(&self) -> usize {
        self.issues.iter().map(|issue| issue.unseen.len()).sum()
    }

    /// Look up the issue entry for a column, if any.
    pub fn issue_for(&self, column: &str) -> Option<&ColumnIssue> {
        self.issues.iter().find(|issue| issue.column == column)
    }
}
