//! PDF document primitives: pages, image placement, text placement.
//!
//! Drawing calls take mm from the page's top-left corner, like the layout
//! engine; the conversion to PDF points (bottom-left origin) happens here
//! and nowhere else. Pages accumulate as drafts and turn into the `lopdf`
//! object tree in one pass at serialization time.

use image::GrayImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use crate::config::{mm_to_pt, LabelGeometry};
use crate::error::Result;
use crate::generator::metrics;

/// Resource name of the barcode raster on each page.
const BARCODE_XOBJECT: &str = "ImBarcode";

/// Resource name of the builtin text font.
const FONT_RESOURCE: &str = "F1";

/// One page under construction: its drawing operations plus the raster
/// placed on it (at most one barcode per page).
#[derive(Debug, Default)]
struct PageDraft {
    operations: Vec<Operation>,
    image: Option<GrayImage>,
}

/// A label document assembled page by page.
pub struct LabelDocument {
    geometry: LabelGeometry,
    pages: Vec<PageDraft>,
}

impl LabelDocument {
    /// Create a document with one open, empty page.
    pub fn new(geometry: LabelGeometry) -> Self {
        Self {
            geometry,
            pages: vec![PageDraft::default()],
        }
    }

    /// Open a fresh page; subsequent drawing lands on it.
    pub fn add_page(&mut self) {
        self.pages.push(PageDraft::default());
    }

    /// Number of pages accumulated so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Measured width of a text line at `font_size`, in mm.
    ///
    /// This is the font-metrics capability the layout engine centers with.
    pub fn text_width(&self, text: &str, font_size: f64) -> f64 {
        metrics::string_width_mm(text, font_size)
    }

    /// Place a raster stretched into a `width` x `height` mm box with its
    /// top-left corner at (x, y) mm.
    pub fn draw_image(&mut self, img: GrayImage, x: f64, y: f64, width: f64, height: f64) {
        let box_w = mm_to_pt(width);
        let box_h = mm_to_pt(height);
        let box_x = mm_to_pt(x);
        // PDF places the image's bottom-left corner.
        let box_y = mm_to_pt(self.geometry.page_height - y - height);

        let page = self.current_page();
        page.operations.extend([
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    real(box_w),
                    real(0.0),
                    real(0.0),
                    real(box_h),
                    real(box_x),
                    real(box_y),
                ],
            ),
            Operation::new("Do", vec![Object::Name(BARCODE_XOBJECT.into())]),
            Operation::new("Q", vec![]),
        ]);
        page.image = Some(img);
    }

    /// Draw one text line with its baseline at (x, y) mm.
    pub fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: f64) {
        let tx = mm_to_pt(x);
        let ty = mm_to_pt(self.geometry.page_height - y);

        let page = self.current_page();
        page.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(FONT_RESOURCE.into()), real(font_size)]),
            Operation::new("Td", vec![real(tx), real(ty)]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Serialize the accumulated pages into the bytes of a PDF file.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });

        let page_width = mm_to_pt(self.geometry.page_width);
        let page_height = mm_to_pt(self.geometry.page_height);

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for draft in self.pages {
            let mut resources = dictionary! {
                "Font" => dictionary! { FONT_RESOURCE => Object::Reference(font_id) },
            };

            if let Some(img) = draft.image {
                let (width, height) = img.dimensions();
                let stream = Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => i64::from(width),
                        "Height" => i64::from(height),
                        "ColorSpace" => "DeviceGray",
                        "BitsPerComponent" => 8,
                    },
                    img.into_raw(),
                );
                let image_id = doc.add_object(stream);
                resources.set(
                    "XObject",
                    dictionary! { BARCODE_XOBJECT => Object::Reference(image_id) },
                );
            }

            let content = Content {
                operations: draft.operations,
            };
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => vec![real(0.0), real(0.0), real(page_width), real(page_height)],
                "Resources" => resources,
                "Contents" => Object::Reference(content_id),
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    fn current_page(&mut self) -> &mut PageDraft {
        // Invariant: new() opens a page and add_page() only appends.
        self.pages.last_mut().expect("document always has an open page")
    }
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}
