//! # cleanmelb
//!
//! The "Prevent Waste at Home" goal form behind the Clean Melbourne poster.
//!
//! A household enters how much waste it plans to avoid each month in five
//! categories. Every input is checked against a fixed maximum, the valid
//! goals are turned into short impact statements, and the statements can be
//! printed as a one-page PDF poster.
//!
//! ## Features
//!
//! - **compression** (default): Flate-compress page content and raw image streams
//! - **external-images**: Accept PNG and other logo formats through the `image` crate
//!
//! ```rust
//! use cleanmelb::{contributions, FormState, WasteCategory};
//!
//! let mut form = FormState::new();
//! form.apply_input(WasteCategory::PlasticBags, "40").unwrap();
//! assert!(form.export_available());
//!
//! let goals = contributions(&form);
//! assert!(goals[0].impact.ends_with("4.00 kg."));
//! ```

pub mod category;
pub mod contribution;
pub mod error;
pub mod form;
pub mod pdf;
pub mod poster;
pub mod validation;

pub use category::{UnknownCategory, WasteCategory};
pub use contribution::{contributions, Contribution};
pub use error::{PosterError, Result};
pub use form::{FieldView, FormState, FormView};
pub use poster::{compose_poster, export_poster, load_logo, PosterOptions};
pub use validation::{validate_input, ValidationError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_to_poster_content() {
        let mut form = FormState::new();
        form.apply_input(WasteCategory::OrganicWaste, "10").unwrap();

        let document =
            compose_poster(&contributions(&form), None, &PosterOptions::default()).unwrap();
        assert_eq!(document.page_count(), 1);
        let ops = document.pages()[0].content().operations();
        assert!(ops.contains("(Goal 1:) Tj"));
        assert!(ops.contains("15 kg of methane emissions."));
    }
}
