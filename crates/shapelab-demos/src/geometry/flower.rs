use std::f32::consts::{PI, TAU};

use shapelab_engine::coords::Vec2;

use super::push_vertex;

/// Starting angle of each of `leaf_count` petals, evenly spaced by
/// `2π / leaf_count` from `start_angle`.
pub fn petal_angles(start_angle: f32, leaf_count: u32) -> Vec<f32> {
    if leaf_count == 0 {
        return Vec::new();
    }
    let step = TAU / leaf_count as f32;
    (0..leaf_count).map(|k| start_angle + k as f32 * step).collect()
}

/// One four-vertex triangle fan per petal.
///
/// Petal `k` at angle `θ`: the center, the inner-left point at `θ - π/N` on
/// `inner_radius`, the tip at `θ` on `tip_radius`, and the inner-right point
/// at `θ + π/N` on `inner_radius`.
pub fn flower(
    center: Vec2,
    inner_radius: f32,
    tip_radius: f32,
    leaf_count: u32,
    start_angle: f32,
) -> Vec<Vec<f32>> {
    let half = if leaf_count == 0 { 0.0 } else { PI / leaf_count as f32 };

    petal_angles(start_angle, leaf_count)
        .into_iter()
        .map(|theta| {
            let mut petal = Vec::with_capacity(12);
            push_vertex(&mut petal, center);
            push_vertex(&mut petal, center.polar_offset(inner_radius, theta - half));
            push_vertex(&mut petal, center.polar_offset(tip_radius, theta));
            push_vertex(&mut petal, center.polar_offset(inner_radius, theta + half));
            petal
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn petal_angles_are_evenly_spaced() {
        for n in [3u32, 5, 8, 12] {
            let angles = petal_angles(0.25, n);
            assert_eq!(angles.len(), n as usize);
            assert_eq!(angles[0], 0.25);
            let step = TAU / n as f32;
            for w in angles.windows(2) {
                assert!((w[1] - w[0] - step).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn one_fan_of_four_vertices_per_petal() {
        let petals = flower(Vec2::zero(), 0.2, 0.8, 8, 0.0);
        assert_eq!(petals.len(), 8);
        assert!(petals.iter().all(|p| p.len() == 12));
        assert!(petals.iter().all(|p| p[..3] == [0.0, 0.0, 0.0]));
    }

    #[test]
    fn tip_points_along_the_petal_angle() {
        let petals = flower(Vec2::new(0.1, 0.1), 0.2, 0.8, 4, 0.0);
        // petal 1 points straight up
        let tip = &petals[1][6..9];
        assert!((tip[0] - 0.1).abs() < 1e-6);
        assert!((tip[1] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn zero_leaves_is_empty() {
        assert!(flower(Vec2::zero(), 0.2, 0.8, 0, 0.0).is_empty());
    }
}
