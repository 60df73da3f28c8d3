use shapelab_engine::coords::Vec2;
use shapelab_engine::paint::Color;

use super::push_vertex;

/// Annular sector between `inner` and `outer` from `start` sweeping `sweep`
/// radians, as a four-vertex triangle fan.
pub fn dartboard_quad(center: Vec2, inner: f32, outer: f32, start: f32, sweep: f32) -> Vec<f32> {
    let end = start + sweep;
    let mut out = Vec::with_capacity(12);
    push_vertex(&mut out, center.polar_offset(inner, start));
    push_vertex(&mut out, center.polar_offset(outer, start));
    push_vertex(&mut out, center.polar_offset(outer, end));
    push_vertex(&mut out, center.polar_offset(inner, end));
    out
}

/// Fully saturated, full-value color for `hue` in turns.
#[inline]
pub fn hue_color(hue: f32) -> Color {
    Color::from_hsv(hue, 1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn quad_corners_in_fan_order() {
        let v = dartboard_quad(Vec2::zero(), 0.5, 1.0, 0.0, FRAC_PI_2);
        assert_eq!(v.len(), 12);
        assert_eq!(&v[..6], &[0.5, 0.0, 0.0, 1.0, 0.0, 0.0]);
        // end edge lies on +Y
        assert!(v[6].abs() < 1e-6 && (v[7] - 1.0).abs() < 1e-6);
        assert!(v[9].abs() < 1e-6 && (v[10] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn hue_wheel_primaries() {
        assert_eq!(hue_color(0.0), Color::rgb(1.0, 0.0, 0.0));
        let green = hue_color(1.0 / 3.0);
        assert!(green.g > 0.999 && green.r < 1e-5 && green.b < 1e-5);
    }
}
