//! HTML renderer: pixel grid to styled markup.

use crate::brightness::BrightnessMap;
use crate::grid::PixelGrid;
use crate::palette::Palette;

/// Additive per-channel brightening applied to the text color so the
/// glyph stands out against its quantized background.
const TEXT_BRIGHTEN: u8 = 50;

/// Render a pixel grid to one flat HTML document.
///
/// Walks the grid row-major (top-to-bottom, left-to-right). For each
/// pixel:
/// - glyph: `map.glyph()` of the integer channel mean `(r+g+b)/3`
/// - background: nearest palette color
/// - text color: source pixel with every channel brightened by 50,
///   saturating at 255
///
/// Each pixel becomes one `<span>` with inline background/text colors;
/// every row ends with `<br>` and the whole sequence is wrapped in
/// `<pre>...</pre>` so the monospace layout survives.
///
/// Emission order is the traversal order; it determines the visual
/// layout and must not change even if per-pixel work is ever
/// parallelized.
pub fn render_html(grid: &PixelGrid, map: &BrightnessMap, palette: &Palette) -> String {
    // ~70 bytes of markup per pixel plus the wrapper
    let mut html = String::with_capacity(grid.pixel_count() * 72 + 16);
    html.push_str("<pre>");

    for row in grid.rows() {
        for &pixel in row {
            let glyph = map.glyph(pixel.channel_mean());
            let background = palette.nearest(pixel);
            let text = pixel.brighten(TEXT_BRIGHTEN);

            html.push_str("<span style=\"background-color:");
            html.push_str(&background.css());
            html.push_str("; color:");
            html.push_str(&text.css());
            html.push_str(";\">");
            html.push(glyph);
            html.push_str("</span>");
        }
        html.push_str("<br>");
    }

    html.push_str("</pre>");
    html
}
