//! Rule-by-rule behavior and message contracts.

use sheetguard_model::{FieldKind, Value};
use sheetguard_validate::{RangeRule, Validator};

fn fails_with(validator: &Validator, value: impl Into<Value>, expected: &str) {
    let value = value.into();
    let message = validator
        .apply(&value)
        .expect_err(&format!("{value} should fail"));
    assert_eq!(message, expected);
}

fn passes(validator: &Validator, value: impl Into<Value>) {
    let value = value.into();
    assert_eq!(validator.apply(&value), Ok(()), "{value} should pass");
}

mod required {
    use super::*;

    #[test]
    fn missing_value_fails() {
        fails_with(&Validator::required(), Value::Null, "Required field");
        fails_with(&Validator::required(), f64::NAN, "Required field");
    }

    #[test]
    fn present_values_pass() {
        let validator = Validator::required();
        passes(&validator, "not none value");
        // Falsy-looking values are still present.
        passes(&validator, 0i64);
        passes(&validator, false);
        passes(&validator, "");
    }

    #[test]
    fn custom_error_message() {
        let validator = Validator::required().with_error("This is required");
        fails_with(&validator, Value::Null, "This is required");
    }
}

mod equal {
    use super::*;

    #[test]
    fn unequal_value_fails() {
        fails_with(&Validator::equal(10i64), 12i64, "Must be equal to 10");
    }

    #[test]
    fn equal_value_passes() {
        passes(&Validator::equal(10i64), 10i64);
        // Cross-numeric equality.
        passes(&Validator::equal(10i64), 10.0);
    }

    #[test]
    fn custom_error_message() {
        let validator = Validator::equal(10i64).with_error("{value} is not equal to {other}.");
        fails_with(&validator, 12i64, "12 is not equal to 10.");
    }
}

mod one_of {
    use super::*;

    fn validator() -> Validator {
        Validator::one_of([1i64, 2, 3, 4]).with_error("{value} should be in {choices}.")
    }

    #[test]
    fn member_passes() {
        passes(&validator(), 3i64);
    }

    #[test]
    fn non_member_fails() {
        fails_with(&validator(), 6i64, "6 should be in [1, 2, 3, 4].");
    }

    #[test]
    fn default_message_names_value_and_choices() {
        let validator = Validator::one_of([1i64, 2, 3, 4]);
        let message = validator.apply(&Value::Int(6)).expect_err("6 should fail");
        assert!(message.contains('6'), "message should name the value: {message}");
        assert!(
            message.contains("[1, 2, 3, 4]"),
            "message should name the choices: {message}"
        );
    }

    #[test]
    fn null_is_an_ordinary_member() {
        fails_with(&validator(), Value::Null, "null should be in [1, 2, 3, 4].");
        passes(&Validator::one_of([Value::Null, Value::Int(1)]), Value::Null);
    }
}

mod none_of {
    use super::*;

    fn validator() -> Validator {
        Validator::none_of([1i64, 2, 3, 4]).with_error("{value} should not be in {iterable}.")
    }

    #[test]
    fn member_fails() {
        fails_with(&validator(), 3i64, "3 should not be in [1, 2, 3, 4].");
    }

    #[test]
    fn non_member_passes() {
        passes(&validator(), 6i64);
    }

    #[test]
    fn default_message() {
        fails_with(
            &Validator::none_of([1i64, 2]),
            2i64,
            "Must be none of [1, 2]",
        );
    }
}

mod range {
    use super::*;

    #[test]
    fn min_inclusive() {
        let validator = Validator::range(RangeRule::new().min(10.0));
        passes(&validator, 10i64);
        passes(&validator, 15i64);
        fails_with(&validator, 5i64, "Must be greater than or equal to 10.");
    }

    #[test]
    fn max_inclusive() {
        let validator = Validator::range(RangeRule::new().max(10.0));
        passes(&validator, 5i64);
        passes(&validator, 10i64);
        fails_with(&validator, 15i64, "Must be less than or equal to 10.");
    }

    #[test]
    fn min_inclusive_max_inclusive() {
        let validator = Validator::range(RangeRule::new().min(10.0).max(20.0));
        passes(&validator, 10i64);
        passes(&validator, 15i64);
        passes(&validator, 20i64);
        let both = "Must be greater than or equal to 10 and less than or equal to 20.";
        fails_with(&validator, 5i64, both);
        fails_with(&validator, 25i64, both);
    }

    #[test]
    fn min_inclusive_max_exclusive() {
        let validator =
            Validator::range(RangeRule::new().min(10.0).max(20.0).max_inclusive(false));
        passes(&validator, 10i64);
        passes(&validator, 19i64);
        let message = "Must be greater than or equal to 10 and less than 20.";
        fails_with(&validator, 20i64, message);
        fails_with(&validator, 5i64, message);
        fails_with(&validator, 25i64, message);
    }

    #[test]
    fn min_exclusive_max_inclusive() {
        let validator =
            Validator::range(RangeRule::new().min(10.0).max(20.0).min_inclusive(false));
        passes(&validator, 11i64);
        passes(&validator, 20i64);
        let message = "Must be greater than 10 and less than or equal to 20.";
        fails_with(&validator, 10i64, message);
        fails_with(&validator, 5i64, message);
        fails_with(&validator, 21i64, message);
    }

    #[test]
    fn min_exclusive_max_exclusive() {
        let validator = Validator::range(
            RangeRule::new()
                .min(10.0)
                .max(20.0)
                .min_inclusive(false)
                .max_inclusive(false),
        );
        passes(&validator, 11i64);
        passes(&validator, 19i64);
        let message = "Must be greater than 10 and less than 20.";
        fails_with(&validator, 10i64, message);
        fails_with(&validator, 20i64, message);
        fails_with(&validator, 5i64, message);
        fails_with(&validator, 25i64, message);
    }

    #[test]
    fn custom_template_sees_value_and_bounds() {
        let validator = Validator::range(
            RangeRule::new()
                .min(10.0)
                .max(20.0)
                .min_inclusive(false)
                .max_inclusive(false),
        )
        .with_error("{value} outside ({min}, {max})");
        fails_with(&validator, 25i64, "25 outside (10, 20)");
    }

    #[test]
    fn missing_and_non_numeric_values_pass() {
        let validator = Validator::range(RangeRule::new().min(10.0).max(20.0));
        passes(&validator, Value::Null);
        // Wrong-typed values are the type check's concern.
        passes(&validator, "not a number");
    }

    #[test]
    fn floats_are_in_scope() {
        let validator = Validator::range(RangeRule::new().min(10.0).max(20.0));
        passes(&validator, 10.0);
        fails_with(
            &validator,
            9.5,
            "Must be greater than or equal to 10 and less than or equal to 20.",
        );
    }
}

#[test]
fn type_rule_delegates_to_kind() {
    let validator = Validator::Type(FieldKind::Integer);
    passes(&validator, 3i64);
    fails_with(&validator, "three", "Value must be integer");
    passes(&validator, Value::Null);
}

#[test]
fn type_rule_keeps_fixed_message() {
    let validator = Validator::Type(FieldKind::Integer).with_error("ignored");
    fails_with(&validator, "three", "Value must be integer");
}
