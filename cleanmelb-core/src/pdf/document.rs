use super::page::Page;
use super::writer::PdfWriter;
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::debug;

/// A PDF document: pages plus Info metadata.
///
/// ```rust
/// use cleanmelb::pdf::{Document, Font, Page};
///
/// let mut doc = Document::new();
/// doc.set_title("Clean Melbourne Poster");
///
/// let mut page = Page::a4();
/// page.text().set_font(Font::Courier, 12.0).at(40.0, 800.0).write("Goal 1:");
/// doc.add_page(page);
///
/// let mut bytes = Vec::new();
/// doc.write(&mut bytes).unwrap();
/// assert!(bytes.starts_with(b"%PDF-1.7"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub(crate) pages: Vec<Page>,
    pub(crate) metadata: DocumentMetadata,
}

/// Entries of the Info dictionary.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            creator: Some("cleanmelb".to_string()),
            producer: Some(format!("cleanmelb v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(Utc::now()),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.metadata.subject = Some(subject.into());
    }

    pub fn set_creation_date(&mut self, date: DateTime<Utc>) {
        self.metadata.creation_date = Some(date);
    }

    /// Writes the document to a file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), pages = self.pages.len(), "saving document");
        let mut writer = PdfWriter::new(path)?;
        writer.write_document(self)
    }

    /// Writes the document into `buffer`.
    pub fn write(&self, buffer: &mut Vec<u8>) -> Result<()> {
        let mut writer = PdfWriter::new_with_writer(buffer);
        writer.write_document(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_defaults() {
        let doc = Document::new();
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.metadata().creator.as_deref(), Some("cleanmelb"));
        assert!(doc.metadata().creation_date.is_some());
    }

    #[test]
    fn test_metadata_setters() {
        let mut doc = Document::new();
        doc.set_title("Clean Melbourne Poster");
        doc.set_author("GreenMelb.com");
        doc.set_subject("Monthly waste-reduction goals");
        assert_eq!(doc.metadata().title.as_deref(), Some("Clean Melbourne Poster"));
        assert_eq!(doc.metadata().author.as_deref(), Some("GreenMelb.com"));
        assert_eq!(
            doc.metadata().subject.as_deref(),
            Some("Monthly waste-reduction goals")
        );
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.pdf");

        let mut doc = Document::new();
        doc.add_page(Page::a4());
        doc.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }
}
