//! PDF serialization of a laid-out [`Report`] using `lopdf`.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

use crate::document::{DrawOp, Font, Page, Report};
use crate::error::{RenderError, Result};
use crate::fonts::{PT_PER_MM, encode_win_ansi};
use crate::style::Rgb;

const PRODUCER: &str = concat!("csv-report ", env!("CARGO_PKG_VERSION"));

impl Report {
    /// Serialize to PDF bytes.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in Font::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let content = Content {
                operations: page_operations(page, self.height, self.line_width),
            };
            let encoded = content.encode().map_err(|e| RenderError::Encode {
                message: e.to_string(),
            })?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(pt(self.width)),
                Object::Real(pt(self.height)),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(encode_win_ansi(&self.title)),
            "Producer" => Object::string_literal(PRODUCER),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).map_err(|e| RenderError::Encode {
            message: e.to_string(),
        })?;
        Ok(bytes)
    }
}

/// Millimetres to PDF points.
fn pt(value: f32) -> f32 {
    value * PT_PER_MM
}

fn color_operands(color: Rgb) -> Vec<Object> {
    color.unit().into_iter().map(Object::Real).collect()
}

fn page_operations(page: &Page, page_height: f32, line_width: f32) -> Vec<Operation> {
    let mut operations = Vec::new();
    for item in &page.items {
        match &item.op {
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                operations.push(Operation::new("q", vec![]));
                if let Some(color) = fill {
                    operations.push(Operation::new("rg", color_operands(*color)));
                }
                if let Some(color) = stroke {
                    operations.push(Operation::new("RG", color_operands(*color)));
                    operations.push(Operation::new("w", vec![Object::Real(pt(line_width))]));
                }
                operations.push(Operation::new(
                    "re",
                    vec![
                        Object::Real(pt(*x)),
                        Object::Real(pt(page_height - y - height)),
                        Object::Real(pt(*width)),
                        Object::Real(pt(*height)),
                    ],
                ));
                let paint = match (fill.is_some(), stroke.is_some()) {
                    (true, true) => "B",
                    (true, false) => "f",
                    _ => "S",
                };
                operations.push(Operation::new(paint, vec![]));
                operations.push(Operation::new("Q", vec![]));
            }
            DrawOp::Text {
                x,
                y,
                font,
                size,
                color,
                text,
            } => {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("rg", color_operands(*color)));
                operations.push(Operation::new(
                    "Tf",
                    vec![
                        Object::Name(font.resource_name().as_bytes().to_vec()),
                        Object::Real(*size),
                    ],
                ));
                operations.push(Operation::new(
                    "Td",
                    vec![Object::Real(pt(*x)), Object::Real(pt(page_height - y))],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(encode_win_ansi(text))],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
        }
    }
    operations
}
