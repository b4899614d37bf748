//! The "Take Action" poster: a one-page PDF of the general tips and the
//! household's goals.

mod layout;

pub use layout::{collapse_decimals, compose_poster, mm, wrap_text, GENERAL_TIPS};

use crate::contribution::contributions;
use crate::error::{PosterError, Result};
use crate::form::FormState;
use crate::pdf::Image;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name the poster is saved under unless told otherwise.
pub const DEFAULT_FILE_NAME: &str = "clean_melbourne_poster.pdf";
/// Where the logo is read from unless told otherwise.
pub const DEFAULT_LOGO_PATH: &str = "images/logo.jpg";
pub const DEFAULT_TITLE: &str = "GreenMelb.com";
pub const DEFAULT_THANK_YOU: &str = "Thank you for making Melbourne a cleaner city!";

/// Output and branding settings for a poster export.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterOptions {
    pub output: PathBuf,
    /// `None` skips the logo entirely.
    pub logo: Option<PathBuf>,
    pub title: String,
    pub thank_you: String,
}

impl Default for PosterOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_FILE_NAME),
            logo: Some(PathBuf::from(DEFAULT_LOGO_PATH)),
            title: DEFAULT_TITLE.to_string(),
            thank_you: DEFAULT_THANK_YOU.to_string(),
        }
    }
}

/// Reads and decodes the logo at `path`.
pub async fn load_logo(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    debug!(path = %path.display(), bytes = data.len(), "logo read");
    Image::from_encoded_data(data)
}

/// Writes the poster for the current form to `options.output`.
///
/// The logo is fully loaded before the page is composed. A logo that cannot
/// be read or decoded is skipped with a warning.
pub async fn export_poster(state: &FormState, options: &PosterOptions) -> Result<PathBuf> {
    if !state.export_available() {
        return Err(PosterError::NothingToExport);
    }

    let logo = match &options.logo {
        Some(path) => match load_logo(path).await {
            Ok(image) => Some(image),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "logo unavailable, poster will not include it");
                None
            }
        },
        None => None,
    };

    let goals = contributions(state);
    let document = compose_poster(&goals, logo, options)?;
    document.save(&options.output)?;

    info!(
        path = %options.output.display(),
        goals = goals.len(),
        "poster saved"
    );
    Ok(options.output.clone())
}
