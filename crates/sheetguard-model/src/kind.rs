//! Field kinds and their type-check rules.
//!
//! Every field declares exactly one [`FieldKind`]; the kind's check runs
//! first in the field's validator chain, before any user-supplied rule.
//! Absence is a `Required` concern, so missing values pass every check.

use chrono::Timelike;

use crate::value::Value;

/// The closed set of expected runtime shapes a field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FieldKind {
    Integer,
    Float,
    String,
    Boolean,
    DateTime,
    Date,
    Domain,
    Email,
    Url,
}

impl FieldKind {
    /// Verify that `value` already satisfies this kind.
    ///
    /// Returns the rejection message on mismatch, `None` on success. This is
    /// a verifier, not a parser: no coercion is attempted beyond recognizing
    /// the conventional boolean spellings.
    pub fn check(self, value: &Value) -> Option<String> {
        if value.is_missing() {
            return None;
        }
        match self {
            FieldKind::Integer => match value {
                Value::Int(_) => None,
                _ => Some("Value must be integer".to_string()),
            },
            FieldKind::Float => match value {
                Value::Float(_) => None,
                _ => Some("Value must be float".to_string()),
            },
            FieldKind::String => match value {
                Value::Text(_) => None,
                _ => Some("Value must be string".to_string()),
            },
            FieldKind::Boolean => {
                if is_boolean_value(value) {
                    None
                } else {
                    Some(format!("{value} is not a valid boolean value"))
                }
            }
            FieldKind::DateTime => match value {
                Value::DateTime(_) => None,
                _ => Some(format!("{value} not a valid datetime")),
            },
            FieldKind::Date => match value {
                Value::DateTime(dt) if dt.time().num_seconds_from_midnight() == 0 => None,
                Value::DateTime(_) => {
                    Some(format!("{value} has a nonzero time component, not a valid date"))
                }
                _ => Some(format!("{value} not a valid date")),
            },
            FieldKind::Domain => match value.as_str() {
                Some(text) if is_valid_domain(text) => None,
                _ => Some("Invalid domain value".to_string()),
            },
            FieldKind::Email => match value.as_str() {
                Some(text) if is_valid_email(text) => None,
                _ => Some("Invalid email".to_string()),
            },
            FieldKind::Url => match value.as_str() {
                Some(text) if is_valid_url(text) => None,
                _ => Some("Invalid url".to_string()),
            },
        }
    }
}

/// Accepted boolean spellings: `true`/`false`, `1`/`0`, and their text forms
/// case-insensitively.
fn is_boolean_value(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::Int(i) => *i == 0 || *i == 1,
        Value::Text(s) => {
            let lower = s.trim().to_ascii_lowercase();
            matches!(lower.as_str(), "true" | "false" | "1" | "0")
        }
        _ => false,
    }
}

/// Syntactic domain check: dot-separated labels of letters, digits, and
/// inner hyphens; the final label must be alphabetic and at least two
/// characters.
fn is_valid_domain(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || text.len() > 253 {
        return false;
    }
    let labels: Vec<&str> = text.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    for label in &labels {
        if !is_valid_label(label) {
            return false;
        }
    }
    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.chars().all(|ch| ch.is_ascii_alphabetic())
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}

/// Syntactic email check: exactly one `@`, a non-empty local part of
/// permitted characters, and a valid domain part.
fn is_valid_email(text: &str) -> bool {
    let text = text.trim();
    let mut parts = text.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(ch));
    local_ok && is_valid_domain(domain)
}

/// Syntactic URL check: alphabetic scheme, `://`, and a host that is either
/// a valid domain, `localhost`, or dotted digits, with an optional port and
/// trailing path/query.
fn is_valid_url(text: &str) -> bool {
    let text = text.trim();
    let Some((scheme, rest)) = text.split_once("://") else {
        return false;
    };
    if scheme.is_empty() || !scheme.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return false;
    }
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = authority.rsplit_once(':').map_or(authority, |(host, port)| {
        if port.chars().all(|ch| ch.is_ascii_digit()) && !port.is_empty() {
            host
        } else {
            authority
        }
    });
    if host.is_empty() {
        return false;
    }
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    if host.split('.').all(|part| !part.is_empty() && part.chars().all(|ch| ch.is_ascii_digit())) {
        return host.split('.').count() == 4;
    }
    is_valid_domain(host)
}
