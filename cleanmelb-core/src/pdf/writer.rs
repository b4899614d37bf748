use super::document::Document;
use super::objects::{encoded_stream, Dictionary, Object, ObjectId};
use super::page::Page;
use super::text::literal_string;
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Object numbers reserved for one page before anything is written.
struct PageObjects {
    page: ObjectId,
    content: ObjectId,
    images: Vec<ObjectId>,
}

pub struct PdfWriter<W: Write> {
    writer: W,
    xref_positions: Vec<(ObjectId, u64)>,
    current_position: u64,
    next_object_number: u32,
}

impl PdfWriter<BufWriter<File>> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new_with_writer(BufWriter::new(file)))
    }
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            xref_positions: Vec::new(),
            current_position: 0,
            next_object_number: 1,
        }
    }

    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        self.write_header()?;

        let catalog_id = self.allocate();
        let pages_id = self.allocate();
        let mut layout = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            let page_id = self.allocate();
            let content_id = self.allocate();
            let mut images = Vec::with_capacity(page.images().len());
            for _ in page.images() {
                images.push(self.allocate());
            }
            layout.push(PageObjects {
                page: page_id,
                content: content_id,
                images,
            });
        }
        let info_id = self.allocate();

        self.write_catalog(catalog_id, pages_id)?;
        self.write_page_tree(pages_id, &layout)?;
        for (page, objects) in document.pages.iter().zip(&layout) {
            self.write_page(page, objects, pages_id)?;
        }
        self.write_info(info_id, document)?;

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(catalog_id, info_id, xref_position)?;

        self.writer.flush()?;
        Ok(())
    }

    fn allocate(&mut self) -> ObjectId {
        let id = ObjectId::new(self.next_object_number, 0);
        self.next_object_number += 1;
        id
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.7\n")?;
        // Binary comment so transfer tools treat the file as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    fn write_catalog(&mut self, catalog_id: ObjectId, pages_id: ObjectId) -> Result<()> {
        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::name("Catalog"));
        catalog.set("Pages", pages_id);
        self.write_object(catalog_id, &Object::Dictionary(catalog))
    }

    fn write_page_tree(&mut self, pages_id: ObjectId, layout: &[PageObjects]) -> Result<()> {
        let mut pages = Dictionary::new();
        pages.set("Type", Object::name("Pages"));
        pages.set(
            "Kids",
            Object::Array(layout.iter().map(|p| Object::Reference(p.page)).collect()),
        );
        pages.set("Count", Object::Integer(layout.len() as i64));
        self.write_object(pages_id, &Object::Dictionary(pages))
    }

    fn write_page(&mut self, page: &Page, objects: &PageObjects, parent: ObjectId) -> Result<()> {
        let mut fonts = Dictionary::new();
        for font in page.content().fonts() {
            let mut entry = Dictionary::new();
            entry.set("Type", Object::name("Font"));
            entry.set("Subtype", Object::name("Type1"));
            entry.set("BaseFont", Object::name(font.pdf_name()));
            entry.set("Encoding", Object::name("WinAnsiEncoding"));
            fonts.set(font.pdf_name(), entry);
        }

        let mut resources = Dictionary::new();
        resources.set("Font", fonts);

        if !page.images().is_empty() {
            let mut xobjects = Dictionary::new();
            for ((name, _), id) in page.images().iter().zip(&objects.images) {
                xobjects.set(name.as_str(), *id);
            }
            resources.set("XObject", xobjects);
        }

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::name("Page"));
        page_dict.set("Parent", parent);
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width()),
                Object::Real(page.height()),
            ]),
        );
        page_dict.set("Resources", resources);
        page_dict.set("Contents", objects.content);
        self.write_object(objects.page, &Object::Dictionary(page_dict))?;

        let content = page.content().operations().as_bytes().to_vec();
        let stream = encoded_stream(Dictionary::new(), content)?;
        self.write_object(objects.content, &stream)?;

        for ((_, image), id) in page.images().iter().zip(&objects.images) {
            let xobject = image.to_pdf_object()?;
            self.write_object(*id, &xobject)?;
        }

        Ok(())
    }

    fn write_info(&mut self, info_id: ObjectId, document: &Document) -> Result<()> {
        let metadata = &document.metadata;
        let mut info = Dictionary::new();

        let text_entries = [
            ("Title", &metadata.title),
            ("Author", &metadata.author),
            ("Subject", &metadata.subject),
            ("Creator", &metadata.creator),
            ("Producer", &metadata.producer),
        ];
        for (key, value) in text_entries {
            if let Some(value) = value {
                info.set(key, Object::String(value.clone()));
            }
        }

        if let Some(date) = metadata.creation_date {
            info.set("CreationDate", Object::String(format_pdf_date(date)));
        }

        self.write_object(info_id, &Object::Dictionary(info))
    }

    fn write_object(&mut self, id: ObjectId, object: &Object) -> Result<()> {
        self.xref_positions.push((id, self.current_position));

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;
        self.write_object_value(object)?;
        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(
                format!("{f:.6}")
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .as_bytes(),
            )?,
            Object::String(s) => self.write_bytes(literal_string(s).as_bytes())?,
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(items) => {
                self.write_bytes(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(item)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.entries() {
                    self.write_bytes(b"\n/")?;
                    self.write_bytes(key.as_bytes())?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b"\n>>")?;
            }
            Object::Stream(dict, data) => {
                self.write_object_value(&Object::Dictionary(dict.clone()))?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => self.write_bytes(id.to_string().as_bytes())?,
        }
        Ok(())
    }

    fn write_xref(&mut self) -> Result<()> {
        let mut entries = self.xref_positions.clone();
        entries.sort_by_key(|(id, _)| id.number());
        let size = self.next_object_number;

        self.write_bytes(format!("xref\n0 {size}\n").as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;

        for number in 1..size {
            match entries.iter().find(|(id, _)| id.number() == number) {
                Some((_, position)) => {
                    self.write_bytes(format!("{position:010} 00000 n \n").as_bytes())?
                }
                None => self.write_bytes(b"0000000000 00000 f \n")?,
            }
        }
        Ok(())
    }

    fn write_trailer(
        &mut self,
        catalog_id: ObjectId,
        info_id: ObjectId,
        xref_position: u64,
    ) -> Result<()> {
        let mut trailer = Dictionary::new();
        trailer.set("Size", Object::Integer(i64::from(self.next_object_number)));
        trailer.set("Root", catalog_id);
        trailer.set("Info", info_id);

        self.write_bytes(b"trailer\n")?;
        self.write_object_value(&Object::Dictionary(trailer))?;
        self.write_bytes(format!("\nstartxref\n{xref_position}\n%%EOF\n").as_bytes())?;
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

/// Formats a UTC timestamp as a PDF date string (D:YYYYMMDDHHmmSS+00'00).
fn format_pdf_date(date: DateTime<Utc>) -> String {
    format!("{}+00'00", date.format("D:%Y%m%d%H%M%S"))
}
