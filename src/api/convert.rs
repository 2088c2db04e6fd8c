use ascii_art::{convert, PixelGrid, Rgb};
use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;

/// Uploads are shrunk to fit this bounding box before conversion. One
/// output character per pixel, so 100x50 already yields up to 5000
/// styled fragments per document.
pub const MAX_THUMBNAIL_WIDTH: u32 = 100;
pub const MAX_THUMBNAIL_HEIGHT: u32 = 50;

/// Multipart field name carrying the image file
const IMAGE_FIELD: &str = "image";

/// Response from image conversion
#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    /// The rendered HTML document (one styled span per pixel)
    pub ascii: String,
}

/// Convert an uploaded image to colorized ASCII art
///
/// Accepts a multipart upload with an `image` field, resizes it to at
/// most 100x50 pixels and returns an HTML rendering where every pixel
/// becomes one styled character.
#[utoipa::path(
    post,
    path = "/convert",
    request_body(content = Vec<u8>, content_type = "multipart/form-data", description = "Image file in an `image` field"),
    responses(
        (status = 200, description = "Image converted successfully", body = ConvertResponse),
        (status = 400, description = "Missing or undecodable image"),
    ),
    tag = "Convert"
)]
pub async fn handle_convert(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut image_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))?
    {
        if field.name() == Some(IMAGE_FIELD) {
            image_bytes = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Multipart(e.to_string()))?,
            );
            break;
        }
    }
    let bytes = image_bytes.ok_or(ApiError::MissingImage)?;

    let grid = decode_to_grid(&bytes)?;
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        upload_bytes = bytes.len(),
        "Decoded upload"
    );

    let html = convert(&grid, &state.ramp, &state.palette)?;
    tracing::info!(
        pixels = grid.pixel_count(),
        document_bytes = html.len(),
        "Converted image"
    );

    Ok(Json(ConvertResponse { ascii: html }))
}

/// Decode raw image bytes into a conversion-ready pixel grid.
///
/// The image is shrunk (aspect-preserving, never enlarged) to fit the
/// thumbnail bounds, then split into an RGB buffer and a luma-weighted
/// grayscale buffer. The grayscale channel feeds the brightness
/// histogram; glyph lookup later uses the plain channel mean, and the
/// two must stay separate.
pub fn decode_to_grid(bytes: &[u8]) -> Result<PixelGrid, ApiError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| ApiError::Decode(e.to_string()))?;

    let thumb = if decoded.width() <= MAX_THUMBNAIL_WIDTH
        && decoded.height() <= MAX_THUMBNAIL_HEIGHT
    {
        decoded
    } else {
        decoded.thumbnail(MAX_THUMBNAIL_WIDTH, MAX_THUMBNAIL_HEIGHT)
    };

    let rgb = thumb.to_rgb8();
    let gray = thumb.to_luma8();
    let (width, height) = rgb.dimensions();

    let pixels: Vec<Rgb> = rgb.pixels().map(|p| Rgb::new(p[0], p[1], p[2])).collect();
    let levels: Vec<u8> = gray.pixels().map(|p| p[0]).collect();

    PixelGrid::new(width, height, pixels, levels).map_err(|e| ApiError::Convert(e.into()))
}
