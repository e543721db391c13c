//! Categorical-to-numeric encoders for Korean risk-survey tables.
//!
//! This crate turns free-text bucketed range descriptions (e.g.
//! "3개초과 5개이하") into single numeric values and back:
//!
//! - **parse**: classifies a raw string into a [`RangeExpression`]
//! - **policy**: reduces a parsed range to one number ([`ReductionPolicy`])
//! - **range**: the stateful per-column codec ([`RangeCodec`])
//! - **label**: ordinal fallback for unstructured categories ([`LabelCodec`])
//! - **values**: polars value coercion and column-kind tagging

pub mod label;
pub mod parse;
pub mod policy;
pub mod range;
pub mod values;

pub use label::LabelCodec;
pub use parse::{RangeExpression, parse_range};
pub use policy::ReductionPolicy;
pub use range::{ColumnMapping, RangeCodec};
pub use values::{any_to_f64, any_to_string, column_kind, format_numeric};

// Re-export the model types callers need alongside the codecs.
pub use riskprep_model::{ColumnIssue, ColumnKind, EncodeError, EncodeReport, Result};
