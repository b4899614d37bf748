//! Minimal PDF 1.7 output for the poster: one or more pages of Type1 text,
//! fill colors and image XObjects.

mod color;
mod document;
mod image;
mod objects;
mod page;
mod text;
mod writer;

pub use color::Color;
pub use document::{Document, DocumentMetadata};
pub use self::image::{ColorSpace, Image, ImageFormat};
pub use objects::{Dictionary, Object, ObjectId};
pub use page::{Page, A4_HEIGHT, A4_WIDTH};
pub use text::{encode_win_ansi, ContentStream, Font};
pub use writer::PdfWriter;
