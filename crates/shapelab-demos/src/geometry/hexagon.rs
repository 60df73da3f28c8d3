use std::f32::consts::PI;

use shapelab_engine::coords::Vec2;

use super::push_vertex;

/// Triangle list joining the hexagon (`0..6`) and rectangle (`6..10`)
/// vertices of [`hexagon_composite`].
pub const HEXAGON_COMPOSITE_INDICES: [usize; 18] =
    [0, 1, 2, 0, 2, 3, 0, 3, 5, 3, 4, 5, 6, 7, 8, 6, 8, 9];

fn hexagon_points(center: Vec2, radius: f32) -> [Vec2; 6] {
    std::array::from_fn(|i| center.polar_offset(radius, i as f32 * PI / 3.0))
}

/// Six vertices at 60° steps starting at angle 0, as a line loop.
pub fn hexagon(center: Vec2, radius: f32) -> Vec<f32> {
    let mut out = Vec::with_capacity(18);
    for p in hexagon_points(center, radius) {
        push_vertex(&mut out, p);
    }
    out
}

/// Hexagon plus a centered `bar_width x bar_height` rectangle, as a
/// triangle list of 18 vertices.
pub fn hexagon_composite(center: Vec2, radius: f32, bar_width: f32, bar_height: f32) -> Vec<f32> {
    let [h0, h1, h2, h3, h4, h5] = hexagon_points(center, radius);
    let (hw, hh) = (bar_width / 2.0, bar_height / 2.0);
    let points = [
        h0,
        h1,
        h2,
        h3,
        h4,
        h5,
        Vec2::new(center.x - hw, center.y - hh),
        Vec2::new(center.x + hw, center.y - hh),
        Vec2::new(center.x + hw, center.y + hh),
        Vec2::new(center.x - hw, center.y + hh),
    ];

    let mut out = Vec::with_capacity(3 * HEXAGON_COMPOSITE_INDICES.len());
    for i in HEXAGON_COMPOSITE_INDICES {
        push_vertex(&mut out, points[i]);
    }
    out
}
