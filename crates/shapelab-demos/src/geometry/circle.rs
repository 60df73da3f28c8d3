use std::f64::consts::TAU;

use shapelab_engine::coords::Vec2;

use super::push_vertex;

/// Segment count used by [`circle_ring`].
pub const CIRCLE_QUALITY: u32 = 200;

/// `2π·i / quality`, evaluated in double precision and narrowed once.
#[inline]
fn angle(i: u32, quality: u32) -> f32 {
    (TAU * f64::from(i) / f64::from(quality)) as f32
}

/// Ring outline of outer radius `size` and thickness `0.2`, as a triangle
/// strip with [`CIRCLE_QUALITY`] segments.
pub fn circle_ring(center: Vec2, size: f32) -> Vec<f32> {
    ring(center, size - 0.2, size, CIRCLE_QUALITY)
}

/// Ring between `inner` and `outer`, as a triangle strip.
///
/// Vertex `i` for `i in 0..=quality + 1` sits at angle `2π·i / quality`;
/// even `i` on `inner`, odd `i` on `outer`. Yields `3 * (quality + 2)`
/// floats, or nothing when `quality` is zero.
pub fn ring(center: Vec2, inner: f32, outer: f32, quality: u32) -> Vec<f32> {
    if quality == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(3 * (quality as usize + 2));
    for i in 0..=quality + 1 {
        let radius = if i % 2 == 0 { inner } else { outer };
        push_vertex(&mut out, center.polar_offset(radius, angle(i, quality)));
    }
    out
}

/// Filled disc as a triangle fan: the center, then `quality + 1` rim points
/// (the first rim point repeated to close).
pub fn disc(center: Vec2, radius: f32, quality: u32) -> Vec<f32> {
    if quality == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(3 * (quality as usize + 2));
    push_vertex(&mut out, center);
    for i in 0..=quality {
        push_vertex(&mut out, center.polar_offset(radius, angle(i, quality)));
    }
    out
}

/// Triangle fan: the center, then the rim points of `i in 0..=quality`
/// whose angle is at least `π`. Draws the lower half-disc.
pub fn inner_circle(center: Vec2, radius: f32, quality: u32) -> Vec<f32> {
    if quality == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    push_vertex(&mut out, center);
    for i in 0..=quality {
        // angle < π  <=>  2i < quality
        if 2 * i < quality {
            continue;
        }
        push_vertex(&mut out, center.polar_offset(radius, angle(i, quality)));
    }
    out
}

/// Ring keeping only every other 60° sector, as one triangle strip.
///
/// For `i in 0..quality` the sector is `6i / quality` (integer division);
/// points in odd sectors are dropped. Kept points alternate `inner` (even
/// `i`) and `outer` (odd `i`). Nothing is inserted at the gaps, so the strip
/// runs straight on from one kept sector to the next.
pub fn ring_segment(center: Vec2, inner: f32, outer: f32, quality: u32) -> Vec<f32> {
    let mut out = Vec::new();
    for i in 0..quality {
        let sector = 6 * i / quality;
        if sector % 2 == 1 {
            continue;
        }
        let radius = if i % 2 == 0 { inner } else { outer };
        push_vertex(&mut out, center.polar_offset(radius, angle(i, quality)));
    }
    out
}
