//! Schema declaration and validated row containers.
//!
//! A [`Schema`] is an ordered, named collection of typed [`Field`]s declared
//! once via [`SchemaBuilder`]. Against it the engine reconciles external
//! header rows, materializes [`Row`]s of validated [`Cell`]s from a
//! pre-tokenized [`RecordSource`], and aggregates them into a [`Dataset`].
//!
//! Per-cell validation failures are data on the cells, never errors; only
//! schema declaration ([`ConfigError`]) and header reconciliation
//! ([`HeaderError`]) fail fast.

mod containers;
mod field;
mod iter;
mod schema;

pub use containers::{Cell, Dataset, Row};
pub use field::Field;
pub use iter::{RecordSource, RowIterator};
pub use schema::{HeaderColumn, NameMap, Schema, SchemaBuilder};

pub use sheetguard_model::{ConfigError, FieldKind, HeaderError, Style, Value};
pub use sheetguard_validate::{RangeRule, Validator};
