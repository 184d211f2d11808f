//! Text-over-graphics social cards.
//!
//! Rendering runs in two stages: a template lays the text fields out as a
//! [`CardSpec`] (absolute shapes on a fixed canvas), then the [`Rasterizer`]
//! paints the spec and the result is encoded as PNG. Both stages are pure;
//! identical inputs and fonts give byte-identical output.

pub mod error;
pub mod fields;
pub mod primitives;
pub mod raster;
pub mod spec;
pub mod templates;
pub mod typeface;
pub mod wrap;

pub use error::RenderError;
pub use fields::{CanvasSize, CardTextFields, VisualFormat};
pub use primitives::{Color, Point, Shape, Stroke, TextAnchor, Weight};
pub use raster::{encode_png, Rasterizer};
pub use spec::{CardSpec, TextStyle};
pub use typeface::{BlockTypeface, FontSet, TtfTypeface, Typeface};
pub use wrap::wrap_text;

/// Lay out `fields` with the `format` template.
pub fn layout_card(
    format: VisualFormat,
    fields: &CardTextFields,
    canvas: CanvasSize,
    fonts: &FontSet,
) -> CardSpec {
    templates::layout(format, fields, canvas, fonts)
}

/// Lay out, rasterize and PNG-encode one card.
pub fn render_card(
    format: VisualFormat,
    fields: &CardTextFields,
    canvas: CanvasSize,
    fonts: &FontSet,
) -> Result<Vec<u8>, RenderError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(RenderError::EmptyCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }
    let spec = layout_card(format, fields, canvas, fonts);
    let image = Rasterizer::new(fonts).rasterize(&spec)?;
    let png = encode_png(&image)?;
    log::debug!(
        "Rendered {} card: {} shapes, {} bytes",
        format,
        spec.shapes.len(),
        png.len()
    );
    Ok(png)
}
