//! Form state: five optional quantities and one shared error.

use crate::category::WasteCategory;
use crate::contribution::contributions;
use crate::validation::{validate_input, ValidationError};
use serde::Serialize;
use tracing::debug;

/// State of the goal form for one session.
///
/// Only the most recent edit decides the error: a valid edit to any field
/// clears an error raised by another one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    quantities: [Option<u32>; 5],
    error: Option<ValidationError>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one input event to `category`.
    ///
    /// The parsed quantity is stored on success; on failure the field is
    /// cleared and the error becomes the form's current error.
    pub fn apply_input(
        &mut self,
        category: WasteCategory,
        raw: &str,
    ) -> Result<Option<u32>, ValidationError> {
        let result = validate_input(raw, category.max());
        let slot = &mut self.quantities[category.index()];

        match result {
            Ok(value) => {
                *slot = value;
                self.error = None;
            }
            Err(error) => {
                *slot = None;
                self.error = Some(error);
            }
        }

        debug!(
            field = category.field_id(),
            raw,
            quantity = ?self.quantities[category.index()],
            error = ?self.error,
            "applied form input"
        );
        result
    }

    pub fn quantity(&self, category: WasteCategory) -> Option<u32> {
        self.quantities[category.index()]
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Whether any category holds a quantity above zero.
    pub fn has_active_quantity(&self) -> bool {
        self.quantities.iter().any(|q| matches!(q, Some(v) if *v > 0))
    }

    /// Whether the results area is shown.
    pub fn results_visible(&self) -> bool {
        self.error.is_none() && self.has_active_quantity()
    }

    /// Whether the "Take Action" button is offered.
    pub fn export_available(&self) -> bool {
        self.results_visible()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of everything the page would render.
    pub fn view(&self) -> FormView {
        let fields = WasteCategory::ALL
            .into_iter()
            .map(|category| FieldView {
                id: category.field_id(),
                label: category.label(),
                placeholder: category.placeholder(),
                max: category.max(),
                quantity: self.quantity(category),
            })
            .collect();

        let messages = if self.results_visible() {
            contributions(self).iter().map(|c| c.message()).collect()
        } else {
            Vec::new()
        };

        FormView {
            fields,
            error: self.error.map(|e| e.to_string()),
            contributions: messages,
            action_available: self.export_available(),
        }
    }
}

/// Rendered state of one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub max: u32,
    pub quantity: Option<u32>,
}

/// Rendered state of the whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub error: Option<String>,
    /// Empty while the results area is hidden.
    pub contributions: Vec<String>,
    pub action_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let state = FormState::new();
        for category in WasteCategory::ALL {
            assert_eq!(state.quantity(category), None);
        }
        assert!(state.error().is_none());
        assert!(!state.results_visible());
        assert!(!state.export_available());
    }

    #[test]
    fn test_valid_input_stores_quantity() {
        let mut state = FormState::new();
        assert_eq!(state.apply_input(WasteCategory::PlasticBags, "40"), Ok(Some(40)));
        assert_eq!(state.quantity(WasteCategory::PlasticBags), Some(40));
        assert!(state.results_visible());
    }

    #[test]
    fn test_invalid_input_clears_stale_value() {
        let mut state = FormState::new();
        state.apply_input(WasteCategory::GlassBottles, "20").unwrap();
        let result = state.apply_input(WasteCategory::GlassBottles, "501");

        assert_eq!(result, Err(ValidationError::AboveMaximum { max: 500 }));
        assert_eq!(state.quantity(WasteCategory::GlassBottles), None);
        assert_eq!(
            state.error(),
            Some(&ValidationError::AboveMaximum { max: 500 })
        );
    }

    #[test]
    fn test_error_hides_results_even_with_other_values() {
        let mut state = FormState::new();
        state.apply_input(WasteCategory::PaperWaste, "200").unwrap();
        let _ = state.apply_input(WasteCategory::PlasticBags, "-3");

        assert!(state.has_active_quantity());
        assert!(!state.results_visible());
        assert!(!state.export_available());
        assert!(state.view().contributions.is_empty());
    }

    #[test]
    fn test_last_edit_decides_error() {
        let mut state = FormState::new();
        let _ = state.apply_input(WasteCategory::PlasticBags, "abc");
        assert_eq!(state.error(), Some(&ValidationError::NotANumber));

        state.apply_input(WasteCategory::OrganicWaste, "10").unwrap();
        assert!(state.error().is_none());
        assert_eq!(state.quantity(WasteCategory::PlasticBags), None);
        assert!(state.results_visible());
    }

    #[test]
    fn test_empty_input_clears_field_and_error() {
        let mut state = FormState::new();
        state.apply_input(WasteCategory::AluminumCans, "5").unwrap();
        let _ = state.apply_input(WasteCategory::AluminumCans, "x");
        assert_eq!(state.apply_input(WasteCategory::AluminumCans, ""), Ok(None));

        assert_eq!(state.quantity(WasteCategory::AluminumCans), None);
        assert!(state.error().is_none());
        assert!(!state.export_available());
    }

    #[test]
    fn test_zero_only_is_not_exportable() {
        let mut state = FormState::new();
        state.apply_input(WasteCategory::OrganicWaste, "0").unwrap();
        assert_eq!(state.quantity(WasteCategory::OrganicWaste), Some(0));
        assert!(!state.export_available());
    }

    #[test]
    fn test_view_snapshot() {
        let mut state = FormState::new();
        state.apply_input(WasteCategory::OrganicWaste, "10").unwrap();

        let view = state.view();
        assert_eq!(view.fields.len(), 5);
        assert_eq!(view.fields[1].id, "organic-waste");
        assert_eq!(view.fields[1].quantity, Some(10));
        assert_eq!(view.error, None);
        assert_eq!(view.contributions.len(), 1);
        assert!(view.contributions[0].contains("15 kg of methane"));
        assert!(view.action_available);
    }

    #[test]
    fn test_reset() {
        let mut state = FormState::new();
        state.apply_input(WasteCategory::PlasticBags, "10").unwrap();
        let _ = state.apply_input(WasteCategory::PaperWaste, "2000");
        state.reset();
        assert_eq!(state, FormState::new());
    }
}
