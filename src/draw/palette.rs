//! Gradient colormap for freehand strokes.
//!
//! Maps a normalized position along a stroke to a color from a fixed
//! five-stop palette (green, yellow, orange, red, maroon) split into four
//! equal bands. Each band linearly ramps exactly one or two channels, so
//! a stroke rendered segment-by-segment sweeps the whole palette from its
//! start to its end.

use super::color::Color;

/// Maps a normalized stroke position `t` to its gradient color.
///
/// `t` is clamped to `[0.0, 1.0]`; callers may pass raw segment ratios
/// without pre-validating them.
///
/// Band formulas (channel values in 8-bit space, rounded):
/// - `[0.00, 0.25)` green to yellow: red ramps 0 to 255
/// - `[0.25, 0.50)` yellow to orange: green ramps 255 to 0
/// - `[0.50, 0.75)` orange to red: blue ramps 0 to 255
/// - `[0.75, 1.00]` red to maroon: red ramps 255 to 128, blue 128 to 255
pub fn stroke_color_at(t: f64) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let (r, g, b) = if t < 0.25 {
        (255.0 * t * 4.0, 255.0, 0.0)
    } else if t < 0.5 {
        (255.0, 255.0 - 255.0 * (t - 0.25) * 4.0, 0.0)
    } else if t < 0.75 {
        (255.0, 0.0, 255.0 * (t - 0.5) * 4.0)
    } else {
        (
            255.0 - 127.0 * (t - 0.75) * 4.0,
            0.0,
            128.0 + 127.0 * (t - 0.75) * 4.0,
        )
    };

    Color::from_rgb8(r.round() as u8, g.round() as u8, b.round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_hit_palette_stops() {
        assert_eq!(stroke_color_at(0.0).to_rgb8(), (0, 255, 0));
        assert_eq!(stroke_color_at(0.25).to_rgb8(), (255, 255, 0));
        assert_eq!(stroke_color_at(0.5).to_rgb8(), (255, 0, 0));
        assert_eq!(stroke_color_at(0.75).to_rgb8(), (255, 0, 128));
        assert_eq!(stroke_color_at(1.0).to_rgb8(), (128, 0, 255));
    }

    #[test]
    fn ramps_are_continuous_across_first_two_boundaries() {
        let eps = 1e-6;
        for boundary in [0.25, 0.5] {
            let below = stroke_color_at(boundary - eps).to_rgb8();
            let at = stroke_color_at(boundary).to_rgb8();
            assert_eq!(below, at, "discontinuity at {boundary}");
        }
    }

    #[test]
    fn out_of_range_positions_clamp() {
        assert_eq!(stroke_color_at(-3.0), stroke_color_at(0.0));
        assert_eq!(stroke_color_at(1.5), stroke_color_at(1.0));
        assert_eq!(stroke_color_at(f64::NAN).to_rgb8().1, 255);
    }

    #[test]
    fn channels_ramp_monotonically_within_each_band() {
        let mut prev_r = stroke_color_at(0.0).to_rgb8().0;
        for i in 1..25 {
            let r = stroke_color_at(i as f64 * 0.01).to_rgb8().0;
            assert!(r >= prev_r, "red not rising in first band");
            prev_r = r;
        }

        let mut prev_g = stroke_color_at(0.25).to_rgb8().1;
        for i in 26..50 {
            let g = stroke_color_at(i as f64 * 0.01).to_rgb8().1;
            assert!(g <= prev_g, "green not falling in second band");
            prev_g = g;
        }

        let mut prev_b = stroke_color_at(0.75).to_rgb8().2;
        for i in 76..=100 {
            let b = stroke_color_at(i as f64 * 0.01).to_rgb8().2;
            assert!(b >= prev_b, "blue not rising in final band");
            prev_b = b;
        }
    }

    #[test]
    fn nearby_positions_produce_distinct_colors() {
        for i in 0..20 {
            let t1 = i as f64 * 0.05;
            let t2 = t1 + 0.05;
            assert_ne!(
                stroke_color_at(t1).to_rgb8(),
                stroke_color_at(t2).to_rgb8(),
                "colors equal at {t1} and {t2}"
            );
        }
    }
}
