//! Schema declaration and header reconciliation.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use sheetguard_model::{ConfigError, HeaderError, Style, Value};

use crate::containers::{Cell, Row};
use crate::field::Field;
use crate::iter::{RecordSource, RowIterator};

/// An ordered, named collection of fields. Built once, immutable after.
///
/// Iteration order everywhere is declaration order, never alphabetical. The
/// derived data-key map (external display name to internal field name) is a
/// bijection; the builder rejects declarations that would break it.
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    fields: Vec<(String, Field)>,
    /// External display name -> internal field name.
    data_keys: BTreeMap<String, String>,
}

/// Ordered field collector for [`Schema`].
///
/// Field iteration order is exactly the order of [`SchemaBuilder::field`]
/// calls.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<(String, Field)>,
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field declaration under its internal name.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Finish the declaration, deriving the data-key map.
    ///
    /// Fails when two fields share an internal name, or when two fields
    /// resolve to the same external display name (an explicit `data_key` may
    /// also collide with another field's defaulted internal name).
    pub fn build(self) -> Result<Schema, ConfigError> {
        let mut seen = BTreeSet::new();
        for (name, _) in &self.fields {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateField(name.clone()));
            }
        }

        let mut data_keys: BTreeMap<String, String> = BTreeMap::new();
        for (name, field) in &self.fields {
            let display = field.data_key().unwrap_or(name);
            if let Some(first) = data_keys.get(display) {
                return Err(ConfigError::DuplicateDataKey {
                    data_key: display.to_string(),
                    first: first.clone(),
                    second: name.clone(),
                });
            }
            data_keys.insert(display.to_string(), name.clone());
        }

        Ok(Schema {
            name: self.name,
            fields: self.fields,
            data_keys,
        })
    }
}

impl Schema {
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, field)| field)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field))
    }

    /// Internal field names, declaration order.
    pub fn headers(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Header cells for an external writer, declaration order.
    pub fn external_headers(&self) -> Vec<HeaderColumn<'_>> {
        self.fields
            .iter()
            .map(|(name, field)| HeaderColumn::new(name, field))
            .collect()
    }

    /// Header cells for a subset of fields, in the order given.
    ///
    /// Unknown names are a configuration error: the caller asked to export a
    /// field the schema never declared.
    pub fn external_headers_for(&self, only: &[&str]) -> Result<Vec<HeaderColumn<'_>>, ConfigError> {
        only.iter()
            .map(|name| {
                self.fields
                    .iter()
                    .find(|(field_name, _)| field_name == name)
                    .map(|(field_name, field)| HeaderColumn::new(field_name, field))
                    .ok_or_else(|| ConfigError::UnknownField((*name).to_string()))
            })
            .collect()
    }

    /// Internal names of fields carrying a `Required` validator.
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, field)| field.is_required())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Resolve an external display name to the internal field name.
    pub fn field_name(&self, external: &str) -> Option<&str> {
        self.data_keys.get(external).map(String::as_str)
    }

    /// The external display name of a field: its data key if set, else the
    /// internal name itself.
    pub fn display_name<'a>(&'a self, internal: &'a str) -> &'a str {
        self.field(internal)
            .and_then(Field::data_key)
            .unwrap_or(internal)
    }

    /// Validate an external header row against the schema.
    ///
    /// Two passes, in order: every header must be recognized (a known data
    /// key or internal field name), then every required field must be
    /// covered. Unexpected-before-required means a structurally wrong sheet
    /// reports the stray header before nagging about missing fields. First
    /// violation wins; nothing is accumulated.
    ///
    /// On success, returns the per-position internal field names used to
    /// label subsequent raw records.
    pub fn reconcile<S: AsRef<str>>(&self, headers: &[S]) -> Result<NameMap, HeaderError> {
        debug!(schema = %self.name, headers = headers.len(), "reconciling header row");
        let mut columns = Vec::with_capacity(headers.len());
        for header in headers {
            let header = header.as_ref();
            let internal = self.field_name(header).or_else(|| {
                self.field(header).map(|_| header)
            });
            match internal {
                Some(internal) => columns.push(internal.to_string()),
                None => return Err(HeaderError::Unexpected(header.to_string())),
            }
        }

        let present: BTreeSet<&str> = columns.iter().map(String::as_str).collect();
        for name in self.required_fields() {
            if !present.contains(name) {
                return Err(HeaderError::MissingRequired(
                    self.display_name(name).to_string(),
                ));
            }
        }

        debug!(schema = %self.name, columns = columns.len(), "header row reconciled");
        Ok(NameMap { columns })
    }

    /// Build one row from named raw values.
    ///
    /// Fields are filled in declaration order; a value is looked up by
    /// internal name first, then by the field's display name; absent values
    /// become `Null`. Keys the schema does not recognize are silently
    /// ignored, so a row can never carry cells outside the declared field
    /// set.
    pub fn build_row(&self, values: &BTreeMap<String, Value>) -> Row<'_> {
        let cells = self
            .fields
            .iter()
            .map(|(name, field)| {
                let value = values
                    .get(name)
                    .or_else(|| values.get(self.display_name(name)))
                    .cloned()
                    .unwrap_or(Value::Null);
                (name.clone(), Cell::new(value, field))
            })
            .collect();
        Row::new(cells)
    }

    /// Lazily materialize rows from a tokenized source.
    ///
    /// `columns` is the [`NameMap`] a successful [`Schema::reconcile`]
    /// produced for the source's header row.
    pub fn rows<'a, S: RecordSource + ?Sized>(
        &'a self,
        source: &'a S,
        columns: &NameMap,
    ) -> RowIterator<'a, S> {
        RowIterator::new(self, source, columns.clone())
    }
}

/// Per-position internal field names for a reconciled header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMap {
    columns: Vec<String>,
}

impl NameMap {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Internal field name for the given column position.
    pub fn internal(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    pub fn internal_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

/// One header cell for the external writer: display title, requiredness,
/// optional author comment, and the pass-through style bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderColumn<'a> {
    pub title: &'a str,
    pub required: bool,
    pub comment: Option<&'a str>,
    pub style: Style,
}

impl<'a> HeaderColumn<'a> {
    fn new(name: &'a str, field: &'a Field) -> Self {
        let required = field.is_required();
        Self {
            title: field.data_key().unwrap_or(name),
            required,
            comment: field.comment(),
            style: if required {
                Style::required_header()
            } else {
                Style::header()
            },
        }
    }
}
