//! The runtime data model: validated cells aggregated into rows and datasets.
//!
//! Error views at every level are restricted to entries that actually have
//! errors: a clean cell never shows up in `Row::errors`, a clean row never
//! shows up in `Dataset::errors`.

use std::collections::BTreeMap;
use std::ops::Index;

use serde_json::json;

use sheetguard_model::Value;

use crate::field::Field;

/// One value bound to its governing field.
///
/// Validation runs eagerly at construction: every validator in the field's
/// chain is applied and every failure recorded, in chain order. Construction
/// is total; a failing validator becomes an entry in `errors`, never a
/// panic or an `Err`. The field reference is a non-owning borrow of the
/// schema's declaration.
#[derive(Debug, Clone)]
pub struct Cell<'a> {
    value: Value,
    field: &'a Field,
    errors: Vec<String>,
}

impl<'a> Cell<'a> {
    pub fn new(value: Value, field: &'a Field) -> Self {
        let errors = field.run(&value);
        Self {
            value,
            field,
            errors,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn field(&self) -> &'a Field {
        self.field
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// One record: named cells in field declaration order, keys unique.
///
/// A value object; never mutated once built.
#[derive(Debug, Clone)]
pub struct Row<'a> {
    cells: Vec<(String, Cell<'a>)>,
}

impl<'a> Row<'a> {
    pub fn new(cells: Vec<(String, Cell<'a>)>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Cell<'a>> {
        self.cells
            .iter()
            .find(|(cell_name, _)| cell_name == name)
            .map(|(_, cell)| cell)
    }

    /// Cells in declaration order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &Cell<'a>)> {
        self.cells.iter().map(|(name, cell)| (name.as_str(), cell))
    }

    /// Field name -> errors, restricted to cells with at least one error.
    pub fn errors(&self) -> BTreeMap<&str, &[String]> {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.is_valid())
            .map(|(name, cell)| (name.as_str(), cell.errors()))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.cells.iter().all(|(_, cell)| cell.is_valid())
    }

    /// JSON object `{field: value, …, "errors": {field: [message, …]}}`,
    /// fields in declaration order. The `errors` sub-map holds only fields
    /// that actually failed.
    pub fn as_record(&self) -> serde_json::Value {
        let mut record = serde_json::Map::new();
        let mut errors = serde_json::Map::new();
        for (name, cell) in &self.cells {
            record.insert(name.clone(), cell.value().to_json());
            if !cell.is_valid() {
                errors.insert(name.clone(), json!(cell.errors()));
            }
        }
        record.insert("errors".to_string(), serde_json::Value::Object(errors));
        serde_json::Value::Object(record)
    }
}

/// An ordered collection of rows, indexable by zero-based position.
///
/// Owns its rows exclusively; the only thing shared with the outside is the
/// immutable schema the cells borrow their fields from.
#[derive(Debug, Clone, Default)]
pub struct Dataset<'a> {
    rows: Vec<Row<'a>>,
}

impl<'a> Dataset<'a> {
    pub fn new(rows: Vec<Row<'a>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row<'a>> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row<'a>> {
        self.rows.iter()
    }

    /// Row index -> row error view, restricted to rows with errors.
    pub fn errors(&self) -> BTreeMap<usize, BTreeMap<&str, &[String]>> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_valid())
            .map(|(index, row)| (index, row.errors()))
            .collect()
    }

    /// The canonical structured export: one record object per row, in
    /// order, each with its `errors` sub-map.
    pub fn as_records(&self) -> Vec<serde_json::Value> {
        self.rows.iter().map(Row::as_record).collect()
    }
}

impl<'a> Index<usize> for Dataset<'a> {
    type Output = Row<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<'a> FromIterator<Row<'a>> for Dataset<'a> {
    fn from_iter<T: IntoIterator<Item = Row<'a>>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'s, 'a> IntoIterator for &'s Dataset<'a> {
    type Item = &'s Row<'a>;
    type IntoIter = std::slice::Iter<'s, Row<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
