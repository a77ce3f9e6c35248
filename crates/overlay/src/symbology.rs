//! Visual encoding for depth cells.
//!
//! Color encodes predicted depth on a sequential ramp (green at the shallow
//! end through deep blue at the `max_depth` end); fill opacity encodes
//! confidence, so a wide predictive interval fades the cell out. All inputs
//! are clamped, never rejected: the encoder is total and side-effect free.

use crate::protocol::DepthCell;

/// Depth color ramp endpoints, in HSL hue degrees.
const DEPTH_HUE_MIN: f64 = 120.0;
const DEPTH_HUE_MAX: f64 = 240.0;
const DEPTH_SATURATION: f64 = 0.5;
const DEPTH_LIGHTNESS: f64 = 0.3;

/// Fraction along the white-text threshold for risk badges.
const RISK_LIGHT_TEXT_THRESHOLD: f64 = 0.7;

/// Visual style for one rendered cell.
///
/// `color` is RGBA in linear `[0, 1]` components with the fill opacity
/// folded into the alpha channel; `css_color` is the same hue as a CSS
/// `hsl()` string for widgets that take stylesheet colors.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    pub color: [f32; 4],
    pub css_color: String,
    pub opacity: f64,
}

/// Normalized position of `depth` on the color ramp.
///
/// Depths above `max_depth` saturate at 1; negative depths clamp to 0.
/// A non-positive `max_depth` leaves nothing to normalize against, so the
/// fraction is pinned to the ramp's low end.
pub fn color_fraction(depth: f64, max_depth: f64) -> f64 {
    if max_depth <= 0.0 {
        return 0.0;
    }
    (depth / max_depth).clamp(0.0, 1.0)
}

/// Fill opacity from the predictive interval `[lower, upper]`.
///
/// A zero-width interval is full confidence (opacity 1); an interval at
/// least as wide as `max_depth` is no confidence (opacity 0). When
/// `max_depth` is non-positive there is no meaningful scale and the cell
/// renders invisible rather than dividing by zero.
pub fn opacity(lower: f64, upper: f64, max_depth: f64) -> f64 {
    if max_depth <= 0.0 {
        return 0.0;
    }
    (1.0 - (upper - lower) / max_depth).clamp(0.0, 1.0)
}

/// Depth ramp color for a fraction in `[0, 1]`.
pub fn depth_css_color(fraction: f64) -> String {
    let f = fraction.clamp(0.0, 1.0);
    let hue = f * (DEPTH_HUE_MAX - DEPTH_HUE_MIN) + DEPTH_HUE_MIN;
    format!(
        "hsl({hue:.0}, {:.0}%, {:.0}%)",
        DEPTH_SATURATION * 100.0,
        DEPTH_LIGHTNESS * 100.0
    )
}

/// Full visual encoding for one cell against the response's `max_depth`.
pub fn encode(cell: &DepthCell, max_depth: f64) -> CellStyle {
    let fraction = color_fraction(cell.depth, max_depth);
    let alpha = opacity(cell.lower_centile, cell.upper_centile, max_depth);
    let hue = fraction * (DEPTH_HUE_MAX - DEPTH_HUE_MIN) + DEPTH_HUE_MIN;
    let [r, g, b] = hsl_to_rgb(hue, DEPTH_SATURATION, DEPTH_LIGHTNESS);
    CellStyle {
        color: [r, g, b, alpha as f32],
        css_color: depth_css_color(fraction),
        opacity: alpha,
    }
}

/// Tooltip body for one cell, two decimal places per figure.
///
/// Presentation only; the web app swaps the newlines for `<br>`.
pub fn tooltip_text(cell: &DepthCell) -> String {
    format!(
        "Depth: {:.2}m\nLower centile: {:.2}m\nUpper centile: {:.2}m",
        cell.depth, cell.lower_centile, cell.upper_centile
    )
}

/// Background color for a risk badge, fraction in `[0, 1]`.
///
/// Sequential light-orange to dark-red ramp for the per-period risk
/// controls shown alongside the map.
pub fn risk_css_color(fraction: f64) -> String {
    let f = fraction.clamp(0.0, 1.0);
    let hue = 36.0 * (1.0 - f);
    let lightness = 93.0 - 63.0 * f;
    format!("hsl({hue:.0}, 85%, {lightness:.0}%)")
}

/// Whether a risk badge at `fraction` is dark enough to need white text.
pub fn risk_text_is_light(fraction: f64) -> bool {
    fraction >= RISK_LIGHT_TEXT_THRESHOLD
}

fn hsl_to_rgb(hue_deg: f64, saturation: f64, lightness: f64) -> [f32; 3] {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue_deg.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [(r1 + m) as f32, (g1 + m) as f32, (b1 + m) as f32]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::DepthCell;

    fn cell(depth: f64, lower: f64, upper: f64) -> DepthCell {
        DepthCell {
            bounds: [[50.0, -1.0], [51.0, 0.0]],
            depth,
            lower_centile: lower,
            upper_centile: upper,
        }
    }

    #[test]
    fn zero_depth_is_ramp_low_end_and_opaque_when_certain() {
        assert_eq!(color_fraction(0.0, 2.0), 0.0);
        assert_eq!(color_fraction(-0.5, 2.0), 0.0);
        assert_eq!(opacity(0.3, 0.3, 2.0), 1.0);
    }

    #[test]
    fn depth_beyond_scale_clamps_to_ramp_top() {
        assert_eq!(color_fraction(2.0, 2.0), 1.0);
        assert_eq!(color_fraction(250.0, 2.0), 1.0);
    }

    #[test]
    fn wide_interval_is_invisible() {
        assert_eq!(opacity(0.0, 2.0, 2.0), 0.0);
        assert_eq!(opacity(0.0, 5.0, 2.0), 0.0);
    }

    #[test]
    fn degenerate_scale_renders_nothing() {
        assert_eq!(opacity(0.1, 0.4, 0.0), 0.0);
        assert_eq!(color_fraction(0.5, 0.0), 0.0);
        let style = encode(&cell(0.5, 0.1, 0.4), 0.0);
        assert_eq!(style.opacity, 0.0);
        assert!(style.opacity.is_finite());
    }

    #[test]
    fn mid_depth_mid_ramp() {
        let style = encode(&cell(0.5, 0.4, 0.6), 1.0);
        // fraction 0.5 lands at hue 180.
        assert_eq!(style.css_color, "hsl(180, 50%, 30%)");
        assert!((style.opacity - 0.8).abs() < 1e-12);
        assert!((style.color[3] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn ramp_endpoints_are_green_and_blue() {
        // Hue 120 is pure green territory, hue 240 pure blue.
        let low = encode(&cell(0.0, 0.0, 0.0), 1.0);
        let high = encode(&cell(1.0, 0.0, 0.0), 1.0);
        assert!(low.color[1] > low.color[0] && low.color[1] > low.color[2]);
        assert!(high.color[2] > high.color[0] && high.color[2] > high.color[1]);
    }

    #[test]
    fn inverted_interval_clamps_to_opaque() {
        assert_eq!(opacity(0.8, 0.2, 1.0), 1.0);
    }

    #[test]
    fn tooltip_rounds_to_two_decimals() {
        let text = tooltip_text(&cell(0.456, 0.4, 0.612));
        assert_eq!(
            text,
            "Depth: 0.46m\nLower centile: 0.40m\nUpper centile: 0.61m"
        );
    }

    #[test]
    fn risk_ramp_darkens_and_flips_text() {
        assert_eq!(risk_css_color(0.0), "hsl(36, 85%, 93%)");
        assert_eq!(risk_css_color(1.0), "hsl(0, 85%, 30%)");
        assert!(!risk_text_is_light(0.5));
        assert!(risk_text_is_light(0.7));
    }
}
