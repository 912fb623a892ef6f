//! Lazy row materialization over a pre-tokenized tabular source.

use std::collections::BTreeMap;

use tracing::trace;

use sheetguard_model::Value;

use crate::containers::Row;
use crate::schema::{NameMap, Schema};

/// A tokenized tabular collaborator, indexed by row then column.
///
/// The engine never touches file bytes; whatever opened the workbook hands
/// over positional records of already-typed values, in header order.
pub trait RecordSource {
    fn row_count(&self) -> usize;

    /// The raw values of one record, positional, header order.
    fn record(&self, index: usize) -> Vec<Value>;
}

impl RecordSource for Vec<Vec<Value>> {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn record(&self, index: usize) -> Vec<Value> {
        self[index].clone()
    }
}

impl RecordSource for [Vec<Value>] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn record(&self, index: usize) -> Vec<Value> {
        self[index].clone()
    }
}

/// Forward-only iterator of validated [`Row`]s.
///
/// Each `next()` pulls exactly one record from the source and runs it
/// through the schema, so per-row validation cost is deferred until the
/// record is consumed. Exhaustion is `None`, never an error; restarting
/// means constructing a new iterator over the same source.
///
/// Records shorter than the reconciled header are padded with `Null`;
/// positions past the header are ignored.
#[derive(Debug)]
pub struct RowIterator<'a, S: RecordSource + ?Sized> {
    schema: &'a Schema,
    source: &'a S,
    columns: NameMap,
    next_row: usize,
}

impl<'a, S: RecordSource + ?Sized> RowIterator<'a, S> {
    pub(crate) fn new(schema: &'a Schema, source: &'a S, columns: NameMap) -> Self {
        Self {
            schema,
            source,
            columns,
            next_row: 0,
        }
    }
}

impl<'a, S: RecordSource + ?Sized> Iterator for RowIterator<'a, S> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.source.row_count() {
            return None;
        }
        let record = self.source.record(self.next_row);
        trace!(row = self.next_row, values = record.len(), "materializing row");
        self.next_row += 1;

        let mut values = BTreeMap::new();
        for (name, value) in self.columns.internal_names().zip(record) {
            values.insert(name.to_string(), value);
        }
        Some(self.schema.build_row(&values))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.row_count().saturating_sub(self.next_row);
        (remaining, Some(remaining))
    }
}

impl<'a, S: RecordSource + ?Sized> ExactSizeIterator for RowIterator<'a, S> {}
