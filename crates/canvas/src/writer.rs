use crate::encoding;
use crate::error::CanvasError;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

/// Internal resource names and PostScript names of the built-in faces, in
/// `(regular, bold, oblique, bold-oblique)` order. `/F1`..`/F4` in content
/// streams.
pub(crate) const FONT_NAMES: [&str; 4] = [
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
];

/// Buffered PDF document assembly on top of `lopdf`.
///
/// Pages accumulate in memory and the complete document (page tree, font
/// resources, Info dictionary) is only serialized by [`PdfWriter::finish`],
/// so a render that fails halfway never produces partial output.
pub struct PdfWriter {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    title: String,
    author: String,
}

impl PdfWriter {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (i, base_font) in FONT_NAMES.iter().enumerate() {
            let face = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => *base_font,
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(format!("F{}", i + 1).into_bytes(), Object::Dictionary(face));
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => Object::Dictionary(font_dict),
        });

        Self {
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            title: String::new(),
            author: String::new(),
        }
    }

    pub fn set_metadata(&mut self, title: &str, author: &str) {
        self.title = title.to_string();
        self.author = author.to_string();
    }

    /// Appends a finished page. `width_pt`/`height_pt` are the MediaBox
    /// dimensions in points.
    pub fn add_page(
        &mut self,
        content: Content,
        width_pt: f32,
        height_pt: f32,
    ) -> Result<(), CanvasError> {
        let data = content.encode()?;
        let stream_id = self.doc.add_object(Stream::new(dictionary! {}, data));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0f32.into(),
                0f32.into(),
                width_pt.into(),
                height_pt.into(),
            ],
            "Contents" => Object::Reference(stream_id),
            "Resources" => Object::Reference(self.resources_id),
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Writes the page tree, catalog, and Info dictionary and serializes
    /// the document.
    pub fn finish(mut self) -> Result<Vec<u8>, CanvasError> {
        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect();
        let count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        // Text strings without a UTF-16 BOM are read as PDFDocEncoding,
        // which agrees with WinAnsi over the Latin-1 range the documents
        // use, so metadata goes through the same encoder as page text.
        let info_id = self.doc.add_object(dictionary! {
            "Title" => Object::String(
                encoding::encode_win_ansi(&self.title),
                StringFormat::Literal,
            ),
            "Author" => Object::String(
                encoding::encode_win_ansi(&self.author),
                StringFormat::Literal,
            ),
        });
        self.doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        self.doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::Operation;

    #[test]
    fn empty_page_document_round_trips() {
        let mut writer = PdfWriter::new();
        writer.set_metadata("Teste", "Fininvest Platform");
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("ET", vec![]),
            ],
        };
        writer.add_page(content, 595.28, 841.89).unwrap();
        let bytes = writer.finish().unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn accented_metadata_is_stored_as_win_ansi() {
        let mut writer = PdfWriter::new();
        writer.set_metadata("Extrato Sócio José", "Gerência");
        let content = Content { operations: vec![] };
        writer.add_page(content, 595.28, 841.89).unwrap();
        let bytes = writer.finish().unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let info = doc
            .trailer
            .get(b"Info")
            .and_then(|object| object.as_reference())
            .unwrap();
        let dict = doc.get_object(info).and_then(|object| object.as_dict()).unwrap();
        let Object::String(stored, _) = dict.get(b"Title").unwrap() else {
            panic!("Title is not a string");
        };
        assert_eq!(stored, &encoding::encode_win_ansi("Extrato Sócio José"));
        // PDFDocEncoding maps these bytes one to one onto Latin-1.
        let decoded: String = stored.iter().map(|&b| b as char).collect();
        assert_eq!(decoded, "Extrato Sócio José");
    }
}
