//! Per-value validation rules.
//!
//! A [`Validator`] is a single pass/fail predicate over one [`Value`]. Rules
//! report failures as formatted messages, not as errors: the cell layer
//! collects them so a whole dataset's problems surface in one pass.

mod rules;

pub use rules::{RangeRule, Validator};
