//! Range-string column codec.
//!
//! [`RangeCodec`] fits a per-column mapping from observed raw strings to
//! reduced numeric values, applies it forward to new frames, and inverts it
//! back to the original strings. Reverse mapping is lossy by construction:
//! when two raw strings reduce to the same number, the first one seen at fit
//! time is the representative.

use std::collections::HashMap;

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
use serde::{Deserialize, Serialize};

use riskprep_model::{ColumnIssue, EncodeError, EncodeReport, Result};

use crate::policy::ReductionPolicy;
use crate::values::{any_to_f64, any_to_string, column_kind};

/// Insertion-ordered mapping from raw strings to their encoded values for
/// one column. `None` values are raw strings that did not parse.
///
/// Only the entry list is serialized; the lookup index is rebuilt when a
/// persisted mapping is loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "MappingEntries", into = "MappingEntries")]
pub struct ColumnMapping {
    entries: Vec<(String, Option<f64>)>,
    index: HashMap<String, usize>,
}

/// Wire form of a [`ColumnMapping`]: the insertion-ordered entries alone.
#[derive(Serialize, Deserialize)]
struct MappingEntries {
    entries: Vec<(String, Option<f64>)>,
}

impl From<MappingEntries> for ColumnMapping {
    fn from(data: MappingEntries) -> Self {
        let index = data
            .entries
            .iter()
            .enumerate()
            .map(|(idx, (key, _))| (key.clone(), idx))
            .collect();
        Self {
            entries: data.entries,
            index,
        }
    }
}

impl From<ColumnMapping> for MappingEntries {
    fn from(mapping: ColumnMapping) -> Self {
        Self {
            entries: mapping.entries,
        }
    }
}

impl ColumnMapping {
    /// Stored encoding for a raw string, or `None` when the string was not
    /// seen at fit time.
    pub fn lookup(&self, raw: &str) -> Option<Option<f64>> {
        self.index.get(raw).map(|&idx| self.entries[idx].1)
    }

    /// Decode a numeric code back to a raw string. First-seen wins when
    /// several raw strings collapsed to the same code.
    pub fn decode(&self, code: f64) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, value)| *value == Some(code))
            .map(|(key, _)| key.as_str())
    }

    /// Mapping entries in first-encounter order.
    pub fn entries(&self) -> &[(String, Option<f64>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, raw: String, value: Option<f64>) {
        self.index.insert(raw.clone(), self.entries.len());
        self.entries.push((raw, value));
    }
}

/// Per-column bidirectional string-to-number codec for range-bucketed data.
///
/// Lifecycle: constructed empty, populated once by [`RangeCodec::fit_transform`],
/// then reused for forward and inverse transforms. Re-fitting replaces all
/// prior state. Inputs are never mutated; every transform returns a new frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeCodec {
    policy: ReductionPolicy,
    /// Replacement for missing encodings in output frames. `None` leaves
    /// missing cells null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sentinel: Option<f64>,
    /// Fitted column names, in fit order.
    columns: Vec<String>,
    mappings: HashMap<String, ColumnMapping>,
}

impl RangeCodec {
    pub fn new(policy: ReductionPolicy) -> Self {
        Self {
            policy,
            sentinel: None,
            columns: Vec::new(),
            mappings: HashMap::new(),
        }
    }

    /// Construct from a policy name.
    ///
    /// # Errors
    ///
    /// `EncodeError::InvalidPolicy` for any name outside `{"middle", "mean"}`.
    pub fn from_policy_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// Replace missing encodings with a fixed value instead of null.
    #[must_use]
    pub fn with_sentinel(mut self, sentinel: f64) -> Self {
        self.sentinel = Some(sentinel);
        self
    }

    pub fn policy(&self) -> ReductionPolicy {
        self.policy
    }

    /// Fitted column names, in fit order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The fitted mapping for a column, if any.
    pub fn mapping(&self, column: &str) -> Option<&ColumnMapping> {
        self.mappings.get(column)
    }

    pub fn is_fit(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Fit the codec on a frame and return it with the selected columns
    /// replaced by their numeric encodings.
    ///
    /// With `columns: None`, every textual column is selected; an explicit
    /// list is filtered to textual columns (numeric columns are skipped, not
    /// an error). Distinct raw strings are enumerated in first-encounter
    /// order and each is parsed and reduced exactly once. Re-fitting
    /// replaces all prior state.
    pub fn fit_transform(
        &mut self,
        df: &DataFrame,
        columns: Option<&[String]>,
    ) -> Result<DataFrame> {
        let selected = self.select_columns(df, columns)?;
        self.columns.clear();
        self.mappings.clear();

        let mut out = df.clone();
        for name in selected {
            let raws = column_strings(df, &name)?;
            let mut mapping = ColumnMapping::default();
            for raw in &raws {
                if mapping.lookup(raw).is_none() {
                    mapping.insert(raw.clone(), self.policy.encode_text(raw));
                }
            }
            let values: Vec<Option<f64>> = raws
                .iter()
                .map(|raw| self.materialize(mapping.lookup(raw).flatten()))
                .collect();
            out.with_column(Series::new(name.as_str().into(), values))?;
            self.mappings.insert(name.clone(), mapping);
            self.columns.push(name);
        }
        Ok(out)
    }

    /// Apply the fitted mappings to a new frame.
    ///
    /// Unseen raw strings degrade to the sentinel and are reported, one
    /// warning per affected column; they never fail the transform. Fitted
    /// columns absent from the frame, and frame columns that were never
    /// fitted, pass through untouched.
    pub fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        self.transform_with_report(df).map(|(out, _)| out)
    }

    /// [`RangeCodec::transform`], also returning the data-quality report.
    pub fn transform_with_report(&self, df: &DataFrame) -> Result<(DataFrame, EncodeReport)> {
        let mut out = df.clone();
        let mut report = EncodeReport::default();
        for name in &self.columns {
            if df.column(name).is_err() {
                continue;
            }
            let Some(mapping) = self.mappings.get(name) else {
                continue;
            };
            let raws = column_strings(df, name)?;
            let mut unseen: Vec<String> = Vec::new();
            let values: Vec<Option<f64>> = raws
                .iter()
                .map(|raw| match mapping.lookup(raw) {
                    Some(stored) => self.materialize(stored),
                    None => {
                        if !unseen.contains(raw) {
                            unseen.push(raw.clone());
                        }
                        self.sentinel
                    }
                })
                .collect();
            out.with_column(Series::new(name.as_str().into(), values))?;
            if !unseen.is_empty() {
                tracing::warn!(
                    column = %name,
                    values = ?unseen,
                    "values not seen at fit time encoded as missing"
                );
                report.issues.push(ColumnIssue {
                    column: name.clone(),
                    unseen,
                });
            }
        }
        Ok((out, report))
    }

    /// Decode numeric codes back to raw strings for every fitted column
    /// present in the frame. Codes this codec never produced decode to null;
    /// columns without a fitted mapping are silently skipped.
    pub fn inverse_transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut out = df.clone();
        for name in &self.columns {
            let Ok(column) = df.column(name) else {
                continue;
            };
            let Some(mapping) = self.mappings.get(name) else {
                continue;
            };
            let mut values: Vec<Option<String>> = Vec::with_capacity(df.height());
            for idx in 0..df.height() {
                let code = any_to_f64(column.get(idx).unwrap_or(AnyValue::Null));
                values.push(code.and_then(|c| mapping.decode(c).map(ToString::to_string)));
            }
            out.with_column(Series::new(name.as_str().into(), values))?;
        }
        Ok(out)
    }

    /// Decode a single column of codes.
    ///
    /// # Errors
    ///
    /// `EncodeError::UnfittedColumn` when no mapping was fitted for `name`.
    /// This is deliberately stricter than the whole-table path, which skips
    /// unrecognized columns.
    pub fn inverse_transform_column(&self, series: &Series, name: &str) -> Result<Series> {
        let mapping = self
            .mappings
            .get(name)
            .ok_or_else(|| EncodeError::UnfittedColumn(name.to_string()))?;
        let mut values: Vec<Option<String>> = Vec::with_capacity(series.len());
        for idx in 0..series.len() {
            let code = any_to_f64(series.get(idx).unwrap_or(AnyValue::Null));
            values.push(code.and_then(|c| mapping.decode(c).map(ToString::to_string)));
        }
        Ok(Series::new(name.into(), values))
    }

    fn materialize(&self, stored: Option<f64>) -> Option<f64> {
        stored.or(self.sentinel)
    }

    fn select_columns(&self, df: &DataFrame, columns: Option<&[String]>) -> Result<Vec<String>> {
        match columns {
            Some(names) => {
                let mut selected = Vec::with_capacity(names.len());
                for name in names {
                    let column = df.column(name)?;
                    if column_kind(column.dtype()).is_encodable() {
                        selected.push(name.clone());
                    }
                }
                Ok(selected)
            }
            None => Ok(df
                .get_columns()
                .iter()
                .filter(|column| column_kind(column.dtype()).is_encodable())
                .map(|column| column.name().to_string())
                .collect()),
        }
    }
}

/// Every cell of a column coerced to its string representation.
pub(crate) fn column_strings(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}
