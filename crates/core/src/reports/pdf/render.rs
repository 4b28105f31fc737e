//! Writes a computed layout and its rasters into a PDF document

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::layout::PdfLayout;
use super::raster::{Raster, Rgb};

/// Points per millimetre
const PT_PER_MM: f32 = 72.0 / 25.4;

const TITLE_FONT_SIZE: f32 = 14.0;
const SUBTITLE_FONT_SIZE: f32 = 8.0;
const TITLE_COLOR: Rgb = Rgb(233, 106, 41);
const SUBTITLE_COLOR: Rgb = Rgb(100, 100, 100);

/// Header lines printed on the first page
#[derive(Debug, Clone)]
pub struct PdfHeader {
    pub title: String,
    pub subtitle: String,
}

fn mm(value: f32) -> Object {
    Object::Real(value * PT_PER_MM)
}

fn color_operands(color: Rgb) -> Vec<Object> {
    [color.0, color.1, color.2]
        .iter()
        .map(|c| Object::Real(*c as f32 / 255.0))
        .collect()
}

fn text_operations(
    text: &str,
    x: f32,
    baseline_y: f32,
    page_h: f32,
    size: f32,
    color: Rgb,
) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("rg", color_operands(color)),
        Operation::new("Tf", vec!["F1".into(), Object::Real(size)]),
        Operation::new("Td", vec![mm(x), mm(page_h - baseline_y)]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

fn image_object(raster: &Raster) -> Stream {
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => Object::Integer(raster.width as i64),
            "Height" => Object::Integer(raster.height as i64),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => Object::Integer(8),
        },
        raster.pixels.clone(),
    )
}

/// Build the PDF bytes
///
/// `rasters` are indexed by placement slot.
pub fn render_pdf(
    layout: &PdfLayout,
    rasters: &[Raster],
    header: &PdfHeader,
) -> Result<Vec<u8>, lopdf::Error> {
    let geometry = layout.geometry;
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(layout.pages.len());

    for (page_index, page) in layout.pages.iter().enumerate() {
        let mut operations = Vec::new();
        let mut xobjects = lopdf::Dictionary::new();

        if page_index == 0 {
            operations.extend(text_operations(
                &header.title,
                geometry.margin,
                layout.title_y,
                geometry.height,
                TITLE_FONT_SIZE,
                TITLE_COLOR,
            ));
            operations.extend(text_operations(
                &header.subtitle,
                geometry.margin,
                layout.subtitle_y,
                geometry.height,
                SUBTITLE_FONT_SIZE,
                SUBTITLE_COLOR,
            ));
        }

        for placement in &page.images {
            let Some(raster) = rasters.get(placement.slot) else {
                let missing = std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("no raster for image slot {}", placement.slot),
                );
                return Err(missing.into());
            };
            let image_id = doc.add_object(image_object(raster));
            let name = format!("Im{}", placement.slot);
            xobjects.set(name.as_bytes().to_vec(), image_id);

            // PDF origin is bottom-left
            operations.push(Operation::new("q", vec![]));
            operations.push(Operation::new(
                "cm",
                vec![
                    mm(placement.width),
                    Object::Integer(0),
                    Object::Integer(0),
                    mm(placement.height),
                    mm(placement.x),
                    mm(geometry.height - placement.y - placement.height),
                ],
            ));
            operations.push(Operation::new("Do", vec![Object::Name(name.into_bytes())]));
            operations.push(Operation::new("Q", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
                "XObject" => xobjects,
            },
        });
        page_ids.push(page_id);
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
        "Count" => Object::Integer(page_ids.len() as i64),
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            mm(geometry.width),
            mm(geometry.height),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
