use shapelab_engine::coords::Vec2;

use super::push_vertex;

/// Axis-aligned rectangle centered on `center`, as a triangle fan.
///
/// Corners in order: bottom-left, bottom-right, top-right, top-left.
pub fn bar(center: Vec2, height: f32, width: f32) -> Vec<f32> {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let mut out = Vec::with_capacity(12);
    push_vertex(&mut out, Vec2::new(center.x - hw, center.y - hh));
    push_vertex(&mut out, Vec2::new(center.x + hw, center.y - hh));
    push_vertex(&mut out, Vec2::new(center.x + hw, center.y + hh));
    push_vertex(&mut out, Vec2::new(center.x - hw, center.y + hh));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vertices;

    #[test]
    fn full_screen_bar() {
        let v = bar(Vec2::zero(), 2.0, 2.0);
        assert_eq!(
            v,
            vec![-1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 1.0, 1.0, 0.0, -1.0, 1.0, 0.0]
        );
    }

    #[test]
    fn corners_bound_the_rectangle_exactly() {
        let (c, h, w) = (Vec2::new(-0.5, 0.0), 0.8, 0.2);
        let v: Vec<_> = vertices(&bar(c, h, w)).collect();
        assert_eq!(v.len(), 4);

        let min_x = v.iter().map(|p| p[0]).fold(f32::INFINITY, f32::min);
        let max_x = v.iter().map(|p| p[0]).fold(f32::NEG_INFINITY, f32::max);
        let min_y = v.iter().map(|p| p[1]).fold(f32::INFINITY, f32::min);
        let max_y = v.iter().map(|p| p[1]).fold(f32::NEG_INFINITY, f32::max);

        assert_eq!(min_x, c.x - w / 2.0);
        assert_eq!(max_x, c.x + w / 2.0);
        assert_eq!(min_y, c.y - h / 2.0);
        assert_eq!(max_y, c.y + h / 2.0);
        assert!(v.iter().all(|p| p[2] == 0.0));
    }
}
