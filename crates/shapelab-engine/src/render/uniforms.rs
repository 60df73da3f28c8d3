use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Per-drawable uniform block (32 bytes):
///
///  offset  0  color  [f32; 4]
///  offset 16  time   f32
///  offset 20  _pad   [f32; 3]
///
/// Matches a WGSL `struct { color: vec4<f32>, time: f32 }` at
/// `@group(0) @binding(0)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct DrawUniforms {
    pub color: [f32; 4],
    pub time: f32,
    pub _pad: [f32; 3],
}

impl DrawUniforms {
    pub const SIZE: u64 = std::mem::size_of::<DrawUniforms>() as u64;

    #[inline]
    pub fn new(color: Color, time: f32) -> Self {
        Self {
            color: color.to_array(),
            time,
            _pad: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_32_bytes() {
        assert_eq!(DrawUniforms::SIZE, 32);
        assert_eq!(std::mem::align_of::<DrawUniforms>(), 4);
    }

    #[test]
    fn time_follows_color() {
        let u = DrawUniforms::new(Color::rgb(0.25, 0.5, 0.75), 2.0);
        let floats: [f32; 8] = bytemuck::cast(u);
        assert_eq!(&floats[..5], &[0.25, 0.5, 0.75, 1.0, 2.0]);
    }
}
