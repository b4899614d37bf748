//! Integration tests for the goal form
//!
//! Drives the form the way the page does, one input event at a time, and
//! checks what the results area would show.

use cleanmelb::{contributions, FormState, ValidationError, WasteCategory};
use pretty_assertions::assert_eq;

fn form_with(inputs: &[(WasteCategory, &str)]) -> FormState {
    let mut form = FormState::new();
    for (category, raw) in inputs {
        let _ = form.apply_input(*category, raw);
    }
    form
}

#[test]
fn test_all_categories_produce_expected_messages() {
    let form = form_with(&[
        (WasteCategory::PlasticBags, "40"),
        (WasteCategory::OrganicWaste, "10"),
        (WasteCategory::PaperWaste, "200"),
        (WasteCategory::GlassBottles, "20"),
        (WasteCategory::AluminumCans, "5"),
    ]);

    let messages: Vec<String> = contributions(&form).iter().map(|c| c.message()).collect();
    assert_eq!(
        messages,
        vec![
            "Saving 40 plastic bags could reduce carbon emissions by 4.00 kg.\n\
             Tip: Reuse plastic bags or switch to reusable bags to minimize plastic waste."
                .to_string(),
            "Reducing 10 kg of organic waste could save 15 kg of methane emissions.\n\
             Tip: Compost food scraps and yard waste to create nutrient-rich soil."
                .to_string(),
            "Saving 200 sheets of paper could save 10.00 trees.\n\
             Tip: Opt for digital documents and use both sides of the paper when printing."
                .to_string(),
            "Recycling 20 glass bottles could save 6.00 kg of CO2 emissions.\n\
             Tip: Rinse glass bottles before recycling to ensure they are clean."
                .to_string(),
            "Recycling 5 aluminum cans could save enough energy to power a TV for 15.00 hours.\n\
             Tip: Flatten aluminum cans before recycling to save space in your bin."
                .to_string(),
        ]
    );
}

#[test]
fn test_on_screen_and_poster_text_agree() {
    let form = form_with(&[
        (WasteCategory::GlassBottles, "7"),
        (WasteCategory::PlasticBags, "3"),
    ]);
    let view = form.view();
    let direct: Vec<String> = contributions(&form).iter().map(|c| c.message()).collect();
    assert_eq!(view.contributions, direct);
}

#[test]
fn test_error_suppresses_results_area() {
    let form = form_with(&[
        (WasteCategory::PlasticBags, "40"),
        (WasteCategory::OrganicWaste, "10"),
        (WasteCategory::AluminumCans, "1001"),
    ]);

    let view = form.view();
    assert_eq!(
        view.error.as_deref(),
        Some("Please enter a value less than 1000")
    );
    assert!(view.contributions.is_empty());
    assert!(!view.action_available);
    assert_eq!(view.fields[4].quantity, None);
    assert_eq!(view.fields[0].quantity, Some(40));
}

#[test]
fn test_fixing_the_field_restores_results() {
    let mut form = form_with(&[
        (WasteCategory::PaperWaste, "200"),
        (WasteCategory::GlassBottles, "-4"),
    ]);
    assert_eq!(form.error(), Some(&ValidationError::Negative));

    form.apply_input(WasteCategory::GlassBottles, "4").unwrap();
    assert!(form.error().is_none());
    assert_eq!(form.view().contributions.len(), 2);
}

#[test]
fn test_empty_input_contributes_nothing() {
    let form = form_with(&[(WasteCategory::PaperWaste, "")]);
    assert!(form.error().is_none());
    assert!(contributions(&form).is_empty());
    assert!(!form.export_available());
}

#[test]
fn test_view_serializes_for_json_output() {
    let form = form_with(&[(WasteCategory::PlasticBags, "40")]);
    let json = serde_json::to_value(form.view()).unwrap();

    assert_eq!(json["fields"][0]["id"], "plastic-bags");
    assert_eq!(json["fields"][0]["quantity"], 40);
    assert_eq!(json["fields"][1]["quantity"], serde_json::Value::Null);
    assert_eq!(json["error"], serde_json::Value::Null);
    assert_eq!(json["action_available"], true);
}
