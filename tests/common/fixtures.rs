//! Test fixtures: in-memory images and multipart bodies.

use image::{ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;

/// Encode a solid-color RGB PNG in memory
pub fn solid_png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(width, height, Rgb(color));
    encode_png(img)
}

/// Encode a horizontal black-to-white gradient PNG in memory
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, _| {
        let v = (x * 255 / width.max(1)) as u8;
        Rgb([v, v, v])
    });
    encode_png(img)
}

fn encode_png(img: ImageBuffer<Rgb<u8>, Vec<u8>>) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encoding failed");
    bytes
}

/// Assemble a multipart/form-data body with one file field.
///
/// Returns `(content_type, body)` with a fixed boundary so requests are
/// reproducible.
pub fn multipart_body(field: &str, filename: &str, data: &[u8]) -> (String, Vec<u8>) {
    let boundary = "charcoal-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}
