//! Domain-critical regression tests for ascii-art.
//!
//! These tests pin the cross-module invariants of the conversion
//! pipeline, not just happy paths. Each test documents the regression
//! it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::convert;
    use crate::brightness::BrightnessMap;
    use crate::color::Rgb;
    use crate::grid::PixelGrid;
    use crate::palette::Palette;
    use crate::ramp::GlyphRamp;

    /// A small pseudo-image with a deliberately skewed brightness
    /// distribution (dark-heavy with a few highlights).
    fn sample_grid() -> PixelGrid {
        let mut pixels = Vec::new();
        let mut gray = Vec::new();
        for y in 0..6u32 {
            for x in 0..8u32 {
                let v = ((x * y * 7) % 64) as u8;
                let highlight = if (x + y) % 11 == 0 { 200 } else { 0 };
                let pixel = Rgb::new(
                    v.saturating_add(highlight),
                    v,
                    v.saturating_add(highlight / 2),
                );
                gray.push(pixel.channel_mean().saturating_add(v / 4));
                pixels.push(pixel);
            }
        }
        PixelGrid::new(8, 6, pixels, gray).unwrap()
    }

    /// If this breaks, it means: some stage of the pipeline became
    /// nondeterministic (iteration order, hashing) and the same image
    /// no longer produces byte-identical output.
    #[test]
    fn test_conversion_deterministic() {
        let ramp = GlyphRamp::default();
        let palette = Palette::default();
        let grid = sample_grid();

        let first = convert(&grid, &ramp, &palette).unwrap();
        for _ in 0..5 {
            assert_eq!(convert(&grid, &ramp, &palette).unwrap(), first);
        }
    }

    /// If this breaks, it means: the CDF-derived glyph assignment lost
    /// its monotonicity — a brighter luminance level mapped to a denser
    /// glyph than a darker one.
    #[test]
    fn test_glyph_index_monotone_in_luminance() {
        let ramp = GlyphRamp::default();
        let grid = sample_grid();
        let map = BrightnessMap::build(grid.grayscale(), &ramp).unwrap();

        let mut previous = 0;
        for level in 0..=255u8 {
            let index = ramp.position(map.glyph(level)).unwrap();
            assert!(index >= previous, "index fell at level {}", level);
            previous = index;
        }
    }

    /// If this breaks, it means: quantization produced a color outside
    /// the generated palette (interpolated or off-grid value).
    #[test]
    fn test_every_background_is_palette_member() {
        let palette = Palette::default();
        for &pixel in sample_grid().pixels() {
            let background = palette.nearest(pixel);
            assert!(
                palette.contains(background),
                "background {:?} not in palette",
                background
            );
        }
    }

    /// Degenerate boundary case: a 1x1 all-black image. The sole
    /// luminance level's CDF is 1.0, so it lands on ramp index K-1 ('.')
    /// even though the pixel is the darkest possible; the background
    /// resolves to the exact palette entry (0,0,0).
    #[test]
    fn test_one_by_one_black_image() {
        let ramp = GlyphRamp::default();
        let palette = Palette::default();
        let grid = PixelGrid::new(1, 1, vec![Rgb::new(0, 0, 0)], vec![0]).unwrap();

        let html = convert(&grid, &ramp, &palette).unwrap();
        assert_eq!(html.matches("<span").count(), 1);
        assert!(html.contains("background-color:rgb(0,0,0);"));
        assert!(html.contains(">.</span>"));
    }

    /// If this breaks, it means: the document shape no longer matches
    /// the source grid — fragments were dropped, duplicated or rows
    /// were merged.
    #[test]
    fn test_document_shape_matches_grid() {
        let ramp = GlyphRamp::default();
        let palette = Palette::default();
        let grid = sample_grid();

        let html = convert(&grid, &ramp, &palette).unwrap();
        assert_eq!(html.matches("<span").count(), 48);
        assert_eq!(html.matches("<br>").count(), 6);
        assert_eq!(html.matches("<pre>").count(), 1);
        assert_eq!(html.matches("</pre>").count(), 1);
    }

    /// If this breaks, it means: the two brightness paths were
    /// "unified". The brightness map must be built from the grayscale
    /// channel while glyph lookup uses the channel mean; for a
    /// saturated color those differ, and the rendered glyph must follow
    /// the channel-mean path.
    #[test]
    fn test_glyph_lookup_uses_channel_mean_not_grayscale() {
        let ramp = GlyphRamp::default();
        let palette = Palette::default();

        // Pure red: channel mean is 85, but a luma-weighted grayscale
        // decoder would report ~54. Fill the grayscale channel so that
        // levels 54 and 85 resolve to different glyphs.
        let pixels = vec![
            Rgb::new(255, 0, 0),
            Rgb::new(0, 0, 0),
            Rgb::new(60, 60, 60),
            Rgb::new(90, 90, 90),
        ];
        let gray = vec![54u8, 0, 60, 90];
        let grid = PixelGrid::new(4, 1, pixels, gray).unwrap();
        let map = BrightnessMap::build(grid.grayscale(), &ramp).unwrap();
        assert_ne!(map.glyph(54), map.glyph(85), "fixture must discriminate");

        let html = convert(&grid, &ramp, &palette).unwrap();
        // The red pixel's glyph comes from level 85 (channel mean), not 54
        let expected = map.glyph(85);
        let first_span_glyph = html
            .split("\">")
            .nth(1)
            .and_then(|s| s.chars().next())
            .unwrap();
        assert_eq!(first_span_glyph, expected);
    }
}
