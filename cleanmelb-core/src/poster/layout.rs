//! Placement of everything on the poster page.
//!
//! Positions are in millimetres from the top-left corner of an A4 sheet, the
//! way the poster was first drawn, and converted to PDF points here.

use super::PosterOptions;
use crate::contribution::Contribution;
use crate::error::Result;
use crate::pdf::{Color, Document, Font, Image, Page};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use tracing::debug;

pub const GENERAL_TIPS: [&str; 5] = [
    "1. Always recycle your plastic, glass, and paper.",
    "2. Reduce food waste by planning meals.",
    "3. Use reusable bags when shopping.",
    "4. Participate in local clean-up events.",
    "5. Spread the word about recycling programs.",
];

const LOGO_NAME: &str = "Logo";
const MARGIN_MM: f64 = 14.0;
const LOGO_TOP_MM: f64 = 10.0;
const LOGO_WIDTH_MM: f64 = 50.0;
const LOGO_HEIGHT_MM: f64 = 20.0;
const TITLE_MM: f64 = 40.0;
const THANK_YOU_MM: f64 = 60.0;
const TIPS_HEADER_MM: f64 = 80.0;
const FIRST_TIP_MM: f64 = 95.0;
const TIP_STEP_MM: f64 = 10.0;
const FIRST_GOAL_MM: f64 = 145.0;
const GOAL_TEXT_OFFSET_MM: f64 = 10.0;
const GOAL_STEP_MM: f64 = 30.0;
const LINE_HEIGHT_FACTOR: f64 = 1.15;
const GOAL_TEXT_SIZE: f64 = 12.0;

lazy_static! {
    static ref LONG_DECIMAL: Regex = Regex::new(r"(\d+\.\d{2})\d+").unwrap();
}

/// Millimetres to PDF points.
pub fn mm(value: f64) -> f64 {
    value * 72.0 / 25.4
}

/// Truncates every decimal with more than two fraction digits to two.
pub fn collapse_decimals(text: &str) -> Cow<'_, str> {
    LONG_DECIMAL.replace_all(text, "$1")
}

/// Greedy word wrap to at most `width` characters per line. Words longer than
/// a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word;
            while word.chars().count() > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let split = word
                    .char_indices()
                    .nth(width)
                    .map_or(word.len(), |(i, _)| i);
                lines.push(word[..split].to_string());
                word = &word[split..];
            }
            if word.is_empty() {
                continue;
            }

            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }

    lines
}

/// Lays out the poster for `contributions` on one A4 page.
///
/// `logo` is drawn when present; the caller decides how a missing logo is
/// handled.
pub fn compose_poster(
    contributions: &[Contribution],
    logo: Option<Image>,
    options: &PosterOptions,
) -> Result<Document> {
    let mut page = Page::a4();
    let top = page.height();
    let y = |from_top_mm: f64| top - mm(from_top_mm);
    let x = mm(MARGIN_MM);

    if let Some(logo) = logo {
        debug!(width = logo.width(), height = logo.height(), "placing logo");
        page.add_image(LOGO_NAME, logo);
        page.draw_image(
            LOGO_NAME,
            x,
            y(LOGO_TOP_MM + LOGO_HEIGHT_MM),
            mm(LOGO_WIDTH_MM),
            mm(LOGO_HEIGHT_MM),
        )?;
    }

    page.text()
        .set_fill_color(Color::rgb8(0, 51, 102))
        .set_font(Font::CourierBold, 24.0)
        .at(x, y(TITLE_MM))
        .write(&options.title);

    if !contributions.is_empty() {
        page.text()
            .set_fill_color(Color::rgb8(0, 102, 204))
            .set_font(Font::Courier, 16.0)
            .at(x, y(THANK_YOU_MM))
            .write(&options.thank_you);
    }

    page.text()
        .set_fill_color(Color::rgb8(0, 153, 51))
        .set_font(Font::CourierBold, 18.0)
        .at(x, y(TIPS_HEADER_MM))
        .write("General Tips:");

    page.text()
        .set_fill_color(Color::black())
        .set_font(Font::CourierBold, 14.0);
    for (i, tip) in GENERAL_TIPS.iter().enumerate() {
        page.text()
            .at(x, y(FIRST_TIP_MM + i as f64 * TIP_STEP_MM))
            .write(tip);
    }

    let column = page.width() - 2.0 * x;
    let chars_per_line = Font::Courier.chars_per_line(GOAL_TEXT_SIZE, column);
    for (i, contribution) in contributions.iter().enumerate() {
        let goal_top = FIRST_GOAL_MM + i as f64 * GOAL_STEP_MM;
        let text = contribution.message();
        let lines = wrap_text(&collapse_decimals(&text), chars_per_line);

        page.text()
            .set_fill_color(Color::black())
            .set_font(Font::Courier, 14.0)
            .at(x, y(goal_top))
            .write(&format!("Goal {}:", i + 1));

        page.text()
            .set_fill_color(Color::rgb8(50, 50, 50))
            .set_font(Font::Courier, GOAL_TEXT_SIZE)
            .at(x, y(goal_top + GOAL_TEXT_OFFSET_MM))
            .write_lines(&lines, GOAL_TEXT_SIZE * LINE_HEIGHT_FACTOR);
    }

    debug!(goals = contributions.len(), "poster composed");

    let mut document = Document::new();
    document.set_title("Clean Melbourne Poster");
    document.set_subject("Monthly waste-reduction goals");
    document.set_author(options.title.clone());
    document.add_page(page);
    Ok(document)
}
