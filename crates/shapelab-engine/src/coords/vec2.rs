/// 2D point or offset in normalized device coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `radius` from `self` in direction `angle` (radians, CCW from +X).
    #[inline]
    pub fn polar_offset(self, radius: f32, angle: f32) -> Vec2 {
        Vec2::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn polar_offset_is_counter_clockwise_from_x() {
        let c = Vec2::new(0.5, -0.5);
        assert_eq!(c.polar_offset(0.25, 0.0), Vec2::new(0.75, -0.5));

        let up = c.polar_offset(0.25, FRAC_PI_2);
        assert!((up.x - 0.5).abs() < 1e-6);
        assert!((up.y - -0.25).abs() < 1e-6);
    }
}
