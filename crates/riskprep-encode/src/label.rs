//! Ordinal label codec.
//!
//! The plain-label counterpart to [`crate::range::RangeCodec`], for
//! categorical columns that carry no range structure. Classes are sorted
//! lexicographically and codes are their indices, so the mapping is
//! collision-free and the round trip is exact. Unlike the range codec,
//! transforming a label never seen at fit time is a hard error rather than
//! a degrade-to-missing: an unseen label has no defensible ordinal.

use std::collections::HashMap;

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
use serde::{Deserialize, Serialize};

use riskprep_model::{EncodeError, Result};

use crate::range::column_strings;
use crate::values::any_to_f64;

/// Per-column ordinal encoder over sorted distinct string classes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelCodec {
    /// Fitted column names, in fit order.
    columns: Vec<String>,
    /// Sorted distinct classes per column; a class's code is its index.
    classes: HashMap<String, Vec<String>>,
}

impl LabelCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted column names, in fit order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Sorted classes fitted for a column, if any.
    pub fn classes(&self, column: &str) -> Option<&[String]> {
        self.classes.get(column).map(Vec::as_slice)
    }

    /// Fit on the given columns and return the frame with their values
    /// replaced by ordinal codes. Re-fitting replaces all prior state.
    pub fn fit_transform(&mut self, df: &DataFrame, columns: &[String]) -> Result<DataFrame> {
        self.columns.clear();
        self.classes.clear();

        let mut out = df.clone();
        for name in columns {
            let raws = column_strings(df, name)?;
            let mut classes: Vec<String> = raws.clone();
            classes.sort();
            classes.dedup();
            let codes = encode_column(&classes, &raws, name)?;
            out.with_column(Series::new(name.as_str().into(), codes))?;
            self.classes.insert(name.clone(), classes);
            self.columns.push(name.clone());
        }
        Ok(out)
    }

    /// Apply the fitted classes to a new frame. Fitted columns absent from
    /// the frame pass through.
    ///
    /// # Errors
    ///
    /// `EncodeError::UnseenLabel` for any value absent from a column's
    /// fitted classes.
    pub fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut out = df.clone();
        for name in &self.columns {
            if df.column(name).is_err() {
                continue;
            }
            let Some(classes) = self.classes.get(name) else {
                continue;
            };
            let raws = column_strings(df, name)?;
            let codes = encode_column(classes, &raws, name)?;
            out.with_column(Series::new(name.as_str().into(), codes))?;
        }
        Ok(out)
    }

    /// Decode ordinal codes back to labels for every fitted column present
    /// in the frame. Codes outside the fitted class range decode to null;
    /// unrecognized columns are silently skipped.
    pub fn inverse_transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut out = df.clone();
        for name in &self.columns {
            let Ok(column) = df.column(name) else {
                continue;
            };
            let Some(classes) = self.classes.get(name) else {
                continue;
            };
            let mut values: Vec<Option<String>> = Vec::with_capacity(df.height());
            for idx in 0..df.height() {
                let code = any_to_f64(column.get(idx).unwrap_or(AnyValue::Null));
                values.push(code.and_then(|c| decode_class(classes, c)));
            }
            out.with_column(Series::new(name.as_str().into(), values))?;
        }
        Ok(out)
    }

    /// Decode a single column of ordinal codes.
    ///
    /// # Errors
    ///
    /// `EncodeError::UnfittedColumn` when no classes were fitted for `name`.
    pub fn inverse_transform_column(&self, series: &Series, name: &str) -> Result<Series> {
        let classes = self
            .classes
            .get(name)
            .ok_or_else(|| EncodeError::UnfittedColumn(name.to_string()))?;
        let mut values: Vec<Option<String>> = Vec::with_capacity(series.len());
        for idx in 0..series.len() {
            let code = any_to_f64(series.get(idx).unwrap_or(AnyValue::Null));
            values.push(code.and_then(|c| decode_class(classes, c)));
        }
        Ok(Series::new(name.into(), values))
    }
}

fn encode_column(classes: &[String], raws: &[String], column: &str) -> Result<Vec<i64>> {
    raws.iter()
        .map(|raw| {
            classes
                .binary_search_by(|class| class.as_str().cmp(raw.as_str()))
                .map(|idx| idx as i64)
                .map_err(|_| EncodeError::UnseenLabel {
                    column: column.to_string(),
                    value: raw.clone(),
                })
        })
        .collect()
}

fn decode_class(classes: &[String], code: f64) -> Option<String> {
    if code < 0.0 || code.fract() != 0.0 {
        return None;
    }
    classes.get(code as usize).cloned()
}
