//! Property-based tests for input validation and form state
//!
//! Exercises the bounded-range contract of every category with generated
//! inputs instead of hand-picked values.

use cleanmelb::{validate_input, FormState, ValidationError, WasteCategory};
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = WasteCategory> {
    prop::sample::select(WasteCategory::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_in_range_values_are_accepted(category in category_strategy(), seed in any::<u32>()) {
        let value = seed % (category.max() + 1);
        prop_assert_eq!(validate_input(&value.to_string(), category.max()), Ok(Some(value)));
    }

    #[test]
    fn test_above_max_is_rejected(category in category_strategy(), excess in 1u32..1_000_000) {
        let value = category.max() + excess;
        prop_assert_eq!(
            validate_input(&value.to_string(), category.max()),
            Err(ValidationError::AboveMaximum { max: category.max() })
        );
    }

    #[test]
    fn test_negative_is_rejected(category in category_strategy(), value in 1i64..i64::MAX) {
        prop_assert_eq!(
            validate_input(&(-value).to_string(), category.max()),
            Err(ValidationError::Negative)
        );
    }

    #[test]
    fn test_invalid_input_leaves_field_absent(
        category in category_strategy(),
        previous in 1u32..=100,
        raw in prop_oneof![
            "[a-zA-Z]{1,8}",
            "-[1-9][0-9]{0,4}",
            "[1-9][0-9]{4,6}",
        ],
    ) {
        let mut form = FormState::new();
        form.apply_input(category, &previous.to_string()).unwrap();

        let result = form.apply_input(category, &raw);
        prop_assert!(result.is_err());
        prop_assert_eq!(form.quantity(category), None);
        prop_assert!(!form.results_visible());
        prop_assert!(!form.export_available());
    }

    #[test]
    fn test_export_requires_non_zero_and_no_error(values in prop::collection::vec(0u32..=100, 5)) {
        let mut form = FormState::new();
        for (category, value) in WasteCategory::ALL.into_iter().zip(&values) {
            form.apply_input(category, &value.to_string()).unwrap();
        }
        prop_assert_eq!(form.export_available(), values.iter().any(|v| *v > 0));
        prop_assert_eq!(
            form.view().contributions.len(),
            values.iter().filter(|v| **v > 0).count()
        );
    }
}
