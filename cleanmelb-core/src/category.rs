//! The five waste categories a household can set a monthly goal for.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A waste category on the goal form.
///
/// Variants are declared in form order; [`WasteCategory::ALL`] and every
/// derived listing (messages, poster goals) follow that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WasteCategory {
    /// Plastic bags saved per month
    PlasticBags,
    /// Kilograms of organic waste reduced per month
    OrganicWaste,
    /// Sheets of paper saved per month
    PaperWaste,
    /// Glass bottles recycled per month
    GlassBottles,
    /// Aluminum cans recycled per month
    AluminumCans,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 5] = [
        WasteCategory::PlasticBags,
        WasteCategory::OrganicWaste,
        WasteCategory::PaperWaste,
        WasteCategory::GlassBottles,
        WasteCategory::AluminumCans,
    ];

    /// Largest accepted monthly quantity.
    pub fn max(self) -> u32 {
        match self {
            WasteCategory::PlasticBags => 100,
            WasteCategory::OrganicWaste => 500,
            WasteCategory::PaperWaste => 1000,
            WasteCategory::GlassBottles => 500,
            WasteCategory::AluminumCans => 1000,
        }
    }

    /// Input id, also used on the command line.
    pub fn field_id(self) -> &'static str {
        match self {
            WasteCategory::PlasticBags => "plastic-bags",
            WasteCategory::OrganicWaste => "organic-waste",
            WasteCategory::PaperWaste => "paper-waste",
            WasteCategory::GlassBottles => "glass-bottles",
            WasteCategory::AluminumCans => "aluminum-cans",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WasteCategory::PlasticBags | WasteCategory::PaperWaste => "I will save:",
            WasteCategory::OrganicWaste => "I will reduce:",
            WasteCategory::GlassBottles | WasteCategory::AluminumCans => "I will recycle:",
        }
    }

    /// Placeholder text naming the unit and the maximum.
    pub fn placeholder(self) -> &'static str {
        match self {
            WasteCategory::PlasticBags => "Plastic bags per month (Max 100)",
            WasteCategory::OrganicWaste => "Kg of organic waste per month (Max 500)",
            WasteCategory::PaperWaste => "Sheets of paper per month (Max 1000)",
            WasteCategory::GlassBottles => "Glass bottles per month (Max 500)",
            WasteCategory::AluminumCans => "Aluminum cans per month (Max 1000)",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for WasteCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        WasteCategory::ALL
            .into_iter()
            .find(|category| category.field_id() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
