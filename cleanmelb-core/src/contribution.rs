//! Impact statements derived from the current goals.
//!
//! [`contributions`] is the only place the messages are built, so the results
//! area and the poster always show the same text.

use crate::category::WasteCategory;
use crate::form::FormState;
use serde::Serialize;
use std::fmt;

/// One derived goal message: an impact statement and a tip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub category: WasteCategory,
    pub quantity: u32,
    pub impact: String,
    pub tip: &'static str,
}

impl Contribution {
    /// Builds the message for `quantity` units of `category`.
    pub fn new(category: WasteCategory, quantity: u32) -> Self {
        Self {
            category,
            quantity,
            impact: impact_statement(category, quantity),
            tip: tip(category),
        }
    }

    /// The two-line text shown in a results box.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nTip: {}", self.impact, self.tip)
    }
}

/// Messages for every category holding a non-zero quantity, in form order.
pub fn contributions(state: &FormState) -> Vec<Contribution> {
    WasteCategory::ALL
        .into_iter()
        .filter_map(|category| match state.quantity(category) {
            Some(quantity) if quantity > 0 => Some(Contribution::new(category, quantity)),
            _ => None,
        })
        .collect()
}

fn impact_statement(category: WasteCategory, quantity: u32) -> String {
    let q = f64::from(quantity);
    match category {
        WasteCategory::PlasticBags => format!(
            "Saving {quantity} plastic bags could reduce carbon emissions by {:.2} kg.",
            q * 0.1
        ),
        // Shortest decimal form: 10 -> "15", 3 -> "4.5"
        WasteCategory::OrganicWaste => format!(
            "Reducing {quantity} kg of organic waste could save {} kg of methane emissions.",
            q * 1.5
        ),
        WasteCategory::PaperWaste => format!(
            "Saving {quantity} sheets of paper could save {:.2} trees.",
            q * 0.05
        ),
        WasteCategory::GlassBottles => format!(
            "Recycling {quantity} glass bottles could save {:.2} kg of CO2 emissions.",
            q * 0.3
        ),
        WasteCategory::AluminumCans => format!(
            "Recycling {quantity} aluminum cans could save enough energy to power a TV for {:.2} hours.",
            q * 3.0
        ),
    }
}

fn tip(category: WasteCategory) -> &'static str {
    match category {
        WasteCategory::PlasticBags => {
            "Reuse plastic bags or switch to reusable bags to minimize plastic waste."
        }
        WasteCategory::OrganicWaste => {
            "Compost food scraps and yard waste to create nutrient-rich soil."
        }
        WasteCategory::PaperWaste => {
            "Opt for digital documents and use both sides of the paper when printing."
        }
        WasteCategory::GlassBottles => {
            "Rinse glass bottles before recycling to ensure they are clean."
        }
        WasteCategory::AluminumCans => {
            "Flatten aluminum cans before recycling to save space in your bin."
        }
    }
}
