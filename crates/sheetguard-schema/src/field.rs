use sheetguard_model::{FieldKind, Value};
use sheetguard_validate::Validator;

/// A typed, validated column declaration.
///
/// The validator chain always starts with the kind's type check; caller
/// validators append in the order given. Fields are immutable once a
/// [`Schema`](crate::Schema) captures them.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    kind: FieldKind,
    validators: Vec<Validator>,
    data_key: Option<String>,
    comment: Option<String>,
}

impl Field {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            validators: vec![Validator::Type(kind)],
            data_key: None,
            comment: None,
        }
    }

    pub fn integer() -> Self {
        Self::new(FieldKind::Integer)
    }

    pub fn float() -> Self {
        Self::new(FieldKind::Float)
    }

    pub fn string() -> Self {
        Self::new(FieldKind::String)
    }

    pub fn boolean() -> Self {
        Self::new(FieldKind::Boolean)
    }

    pub fn datetime() -> Self {
        Self::new(FieldKind::DateTime)
    }

    pub fn date() -> Self {
        Self::new(FieldKind::Date)
    }

    pub fn domain() -> Self {
        Self::new(FieldKind::Domain)
    }

    pub fn email() -> Self {
        Self::new(FieldKind::Email)
    }

    pub fn url() -> Self {
        Self::new(FieldKind::Url)
    }

    /// Mark the field required. Shorthand for appending
    /// [`Validator::required`].
    #[must_use]
    pub fn required(self) -> Self {
        self.validate(Validator::required())
    }

    /// Append a caller validator to the chain.
    #[must_use]
    pub fn validate(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Set the external display name used in header rows.
    #[must_use]
    pub fn with_data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = Some(key.into());
        self
    }

    /// Attach a documentation comment surfaced to header consumers.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The full chain, type check first. Never empty.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    pub fn data_key(&self) -> Option<&str> {
        self.data_key.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// A field is required iff its chain contains a `Required` validator.
    pub fn is_required(&self) -> bool {
        self.validators.iter().any(Validator::is_required)
    }

    /// Run every validator in order, collecting every failure.
    ///
    /// No short-circuit: a value that trips several rules reports all of
    /// them, in chain order. This is the single validation entry point.
    pub fn run(&self, value: &Value) -> Vec<String> {
        self.validators
            .iter()
            .filter_map(|validator| validator.apply(value).err())
            .collect()
    }
}
