//! Procedural 2D shapes.
//!
//! Every generator is a pure function: numeric parameters in, a flat
//! `Vec<f32>` out with 3 floats per vertex (`z = 0`). Coordinates are NDC,
//! so the visible square is `[-1, 1] x [-1, 1]`. The comment on each
//! generator names the topology its vertex order is meant for.

mod bar;
mod circle;
mod dartboard;
mod flower;
mod hexagon;

pub use bar::bar;
pub use circle::{circle_ring, disc, inner_circle, ring, ring_segment, CIRCLE_QUALITY};
pub use dartboard::{dartboard_quad, hue_color};
pub use flower::{flower, petal_angles};
pub use hexagon::{hexagon, hexagon_composite, HEXAGON_COMPOSITE_INDICES};

use shapelab_engine::coords::Vec2;

#[inline]
fn push_vertex(out: &mut Vec<f32>, p: Vec2) {
    out.extend_from_slice(&[p.x, p.y, 0.0]);
}

/// Splits a flat list back into `[x, y, z]` triples.
pub fn vertices(flat: &[f32]) -> impl Iterator<Item = [f32; 3]> + '_ {
    flat.chunks_exact(3).map(|v| [v[0], v[1], v[2]])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(v: &[f32]) -> Vec<u32> {
        v.iter().map(|f| f.to_bits()).collect()
    }

    fn assert_repeatable(name: &str, make: impl Fn() -> Vec<f32>) {
        let (a, b) = (make(), make());
        assert!(!a.is_empty(), "{name} produced nothing");
        assert_eq!(bits(&a), bits(&b), "{name} differs between calls");
    }

    #[test]
    fn every_generator_is_bit_identical_on_repeat() {
        let c = Vec2::new(0.1, -0.2);

        assert_repeatable("circle_ring", || circle_ring(c, 0.5));
        assert_repeatable("ring", || ring(c, 0.3, 0.5, 64));
        assert_repeatable("disc", || disc(c, 0.4, 90));
        assert_repeatable("inner_circle", || inner_circle(c, 0.4, 90));
        assert_repeatable("ring_segment", || ring_segment(c, 0.3, 0.6, 120));
        assert_repeatable("bar", || bar(c, 0.8, 0.2));
        assert_repeatable("petal_angles", || petal_angles(0.3, 7));
        assert_repeatable("flower", || flower(c, 0.2, 0.8, 7, 0.3).concat());
        assert_repeatable("hexagon", || hexagon(c, 0.6));
        assert_repeatable("hexagon_composite", || hexagon_composite(c, 0.6, 0.2, 1.4));
        assert_repeatable("dartboard_quad", || dartboard_quad(c, 0.5, 0.9, 0.4, 0.3));
        assert_repeatable("hue_color", || hue_color(0.37).to_array().to_vec());
    }
}
