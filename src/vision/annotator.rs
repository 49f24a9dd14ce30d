//! Fixed-overlay annotator
//!
//! KNOWN PLACEHOLDER: the two regions below are constants inherited from
//! the prototype and do not depend on image content. Real detection was
//! never wired in; the constants are kept so the overlay endpoint stays
//! honest about what it is. Labels travel in the structured region list
//! rather than being rasterized into the bitmap.

use image::{DynamicImage, Rgba};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};

const OUTLINE: Rgba<u8> = Rgba([255, 0, 0, 255]);
const STROKE_PX: u32 = 5;

/// Axis-aligned box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One labeled overlay region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub label: String,
    pub bounding_box: BoundingBox,
}

/// The two fixed regions drawn on every image, regardless of content.
pub const PLACEHOLDER_REGIONS: [(&str, BoundingBox); 2] = [
    (
        "Obstacle",
        BoundingBox {
            x: 50,
            y: 50,
            width: 150,
            height: 150,
        },
    ),
    (
        "Object",
        BoundingBox {
            x: 300,
            y: 100,
            width: 200,
            height: 200,
        },
    ),
];

/// Draw the placeholder regions onto a copy of the bitmap and return it
/// together with the region list. Regions outside a small image are
/// clipped by the drawing routine; the returned list is always the same.
pub fn annotate(image: &DynamicImage) -> (DynamicImage, Vec<Annotation>) {
    let mut canvas = image.to_rgba8();

    for (_, bbox) in PLACEHOLDER_REGIONS {
        // 5px outline, drawn as nested 1px rectangles
        for inset in 0..STROKE_PX {
            let rect = Rect::at((bbox.x + inset) as i32, (bbox.y + inset) as i32)
                .of_size(bbox.width - 2 * inset, bbox.height - 2 * inset);
            draw_hollow_rect_mut(&mut canvas, rect, OUTLINE);
        }
    }

    let annotations = PLACEHOLDER_REGIONS
        .iter()
        .map(|(label, bbox)| Annotation {
            label: label.to_string(),
            bounding_box: *bbox,
        })
        .collect();

    (DynamicImage::ImageRgba8(canvas), annotations)
}
