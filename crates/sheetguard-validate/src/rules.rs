use serde::{Deserialize, Serialize};

use sheetguard_model::{FieldKind, Value};

/// A single validation rule over one value.
///
/// Applying a rule either succeeds silently or produces exactly one formatted
/// message. Rules are pure: no state is mutated, nothing is raised. Default
/// messages are templates interpolated with the offending value and the
/// rule's configuration; [`Validator::with_error`] swaps in a caller template
/// that is interpolated the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Validator {
    /// The mandatory type check. Always first in a field's chain.
    Type(FieldKind),
    /// Fails iff the value is missing. `0`, `false`, and `""` are present.
    Required { error: Option<String> },
    /// Numeric bounds check with per-bound inclusivity.
    Range(RangeRule),
    /// Fails when the value differs from the target.
    Equal { other: Value, error: Option<String> },
    /// Fails when the value is not a member of the choice set.
    OneOf {
        choices: Vec<Value>,
        error: Option<String>,
    },
    /// Fails when the value is a member of the given set.
    NoneOf {
        iterable: Vec<Value>,
        error: Option<String>,
    },
}

impl Validator {
    pub fn required() -> Self {
        Validator::Required { error: None }
    }

    pub fn equal(other: impl Into<Value>) -> Self {
        Validator::Equal {
            other: other.into(),
            error: None,
        }
    }

    pub fn one_of<I, V>(choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Validator::OneOf {
            choices: choices.into_iter().map(Into::into).collect(),
            error: None,
        }
    }

    pub fn none_of<I, V>(iterable: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Validator::NoneOf {
            iterable: iterable.into_iter().map(Into::into).collect(),
            error: None,
        }
    }

    pub fn range(rule: RangeRule) -> Self {
        Validator::Range(rule)
    }

    /// Replace the rule's default message with a caller template.
    ///
    /// The template sees the same placeholders as the default: `{value}`,
    /// plus `{min}`/`{max}`, `{other}`, `{choices}`, or `{iterable}`
    /// depending on the rule. The type check keeps its fixed messages.
    #[must_use]
    pub fn with_error(mut self, template: impl Into<String>) -> Self {
        let template = template.into();
        match &mut self {
            Validator::Type(_) => {}
            Validator::Required { error }
            | Validator::Equal { error, .. }
            | Validator::OneOf { error, .. }
            | Validator::NoneOf { error, .. } => *error = Some(template),
            Validator::Range(rule) => rule.error = Some(template),
        }
        self
    }

    /// Apply the rule to one value.
    pub fn apply(&self, value: &Value) -> Result<(), String> {
        match self {
            Validator::Type(kind) => match kind.check(value) {
                Some(message) => Err(message),
                None => Ok(()),
            },
            Validator::Required { error } => {
                if value.is_missing() {
                    Err(error.clone().unwrap_or_else(|| "Required field".to_string()))
                } else {
                    Ok(())
                }
            }
            Validator::Range(rule) => rule.apply(value),
            Validator::Equal { other, error } => {
                if value == other {
                    Ok(())
                } else {
                    let template = error.as_deref().unwrap_or("Must be equal to {other}");
                    Err(interpolate(
                        template,
                        &[("value", value.to_string()), ("other", other.to_string())],
                    ))
                }
            }
            Validator::OneOf { choices, error } => {
                if choices.contains(value) {
                    Ok(())
                } else {
                    let template = error
                        .as_deref()
                        .unwrap_or("Must be one of {choices}, got {value}");
                    Err(interpolate(
                        template,
                        &[("value", value.to_string()), ("choices", list_display(choices))],
                    ))
                }
            }
            Validator::NoneOf { iterable, error } => {
                if iterable.contains(value) {
                    let template = error.as_deref().unwrap_or("Must be none of {iterable}");
                    Err(interpolate(
                        template,
                        &[("value", value.to_string()), ("iterable", list_display(iterable))],
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// True for the `Required` rule; drives required-header reconciliation.
    pub fn is_required(&self) -> bool {
        matches!(self, Validator::Required { .. })
    }
}

/// Bounds configuration for [`Validator::Range`].
///
/// Bounds apply to numeric values; missing and non-numeric values pass (a
/// wrong-typed value is already reported by the field's type check).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRule {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_inclusive: bool,
    pub max_inclusive: bool,
    pub error: Option<String>,
}

impl Default for RangeRule {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            min_inclusive: true,
            max_inclusive: true,
            error: None,
        }
    }
}

impl RangeRule {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn min_inclusive(mut self, inclusive: bool) -> Self {
        self.min_inclusive = inclusive;
        self
    }

    #[must_use]
    pub fn max_inclusive(mut self, inclusive: bool) -> Self {
        self.max_inclusive = inclusive;
        self
    }

    fn apply(&self, value: &Value) -> Result<(), String> {
        if value.is_missing() {
            return Ok(());
        }
        let Some(v) = value.as_f64() else {
            return Ok(());
        };
        let below = self
            .min
            .is_some_and(|min| if self.min_inclusive { v < min } else { v <= min });
        let above = self
            .max
            .is_some_and(|max| if self.max_inclusive { v > max } else { v >= max });
        if !below && !above {
            return Ok(());
        }
        Err(self.format_error(value))
    }

    fn format_error(&self, value: &Value) -> String {
        let template = match (&self.error, self.min, self.max) {
            (Some(custom), ..) => custom.clone(),
            (None, Some(_), Some(_)) => {
                format!("Must be {} {{min}} and {} {{max}}.", self.min_op(), self.max_op())
            }
            (None, Some(_), None) => format!("Must be {} {{min}}.", self.min_op()),
            (None, None, Some(_)) => format!("Must be {} {{max}}.", self.max_op()),
            // Unbounded ranges never fail; `below || above` implies a bound.
            (None, None, None) => String::new(),
        };
        interpolate(
            &template,
            &[
                ("value", value.to_string()),
                ("input", value.to_string()),
                ("min", self.min.map(fmt_bound).unwrap_or_default()),
                ("max", self.max.map(fmt_bound).unwrap_or_default()),
            ],
        )
    }

    fn min_op(&self) -> &'static str {
        if self.min_inclusive {
            "greater than or equal to"
        } else {
            "greater than"
        }
    }

    fn max_op(&self) -> &'static str {
        if self.max_inclusive {
            "less than or equal to"
        } else {
            "less than"
        }
    }
}

fn fmt_bound(bound: f64) -> String {
    format!("{bound}")
}

fn list_display(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

fn interpolate(template: &str, pairs: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in pairs {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}
