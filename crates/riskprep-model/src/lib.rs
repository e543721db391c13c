pub mod error;
pub mod kind;
pub mod report;

pub use error::{EncodeError, Result};
pub use kind::ColumnKind;
pub use report::{ColumnIssue, EncodeReport};
