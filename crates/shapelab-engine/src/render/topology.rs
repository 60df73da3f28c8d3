/// How a mesh's vertices are assembled into primitives.
///
/// `TriangleFan` and `LineLoop` have no native wgpu topology; they are drawn
/// through an index list produced by [`Topology::index_list`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    TriangleFan,
    TriangleStrip,
    LineLoop,
    LineStrip,
    Triangles,
}

impl Topology {
    /// Primitive topology the pipeline is built with.
    pub fn primitive(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::TriangleFan | Topology::Triangles => wgpu::PrimitiveTopology::TriangleList,
            Topology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
            Topology::LineLoop | Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        }
    }

    /// Index format for strip pipelines; `None` for list pipelines.
    pub fn strip_index_format(self) -> Option<wgpu::IndexFormat> {
        match self.primitive() {
            wgpu::PrimitiveTopology::TriangleStrip | wgpu::PrimitiveTopology::LineStrip => {
                Some(wgpu::IndexFormat::Uint32)
            }
            _ => None,
        }
    }

    /// Indices that emulate this topology over `vertex_count` vertices, or
    /// `None` when the vertices are drawn directly.
    ///
    /// - fan: `(0, i, i + 1)` for `i in 1..n-1`, empty below 3 vertices
    /// - loop: `0..n` then `0`, empty below 2 vertices
    pub fn index_list(self, vertex_count: u32) -> Option<Vec<u32>> {
        match self {
            Topology::TriangleFan => {
                if vertex_count < 3 {
                    return Some(Vec::new());
                }
                Some(
                    (1..vertex_count - 1)
                        .flat_map(|i| [0, i, i + 1])
                        .collect(),
                )
            }
            Topology::LineLoop => {
                if vertex_count < 2 {
                    return Some(Vec::new());
                }
                Some((0..vertex_count).chain(std::iter::once(0)).collect())
            }
            Topology::TriangleStrip | Topology::LineStrip | Topology::Triangles => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── index_list ────────────────────────────────────────────────────────

    #[test]
    fn fan_expands_to_triangle_list() {
        let idx = Topology::TriangleFan.index_list(5).unwrap();
        assert_eq!(idx, vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn fan_index_count_is_three_per_triangle() {
        for n in 3..50 {
            let idx = Topology::TriangleFan.index_list(n).unwrap();
            assert_eq!(idx.len() as u32, 3 * (n - 2));
        }
    }

    #[test]
    fn degenerate_fan_draws_nothing() {
        assert_eq!(Topology::TriangleFan.index_list(0), Some(vec![]));
        assert_eq!(Topology::TriangleFan.index_list(2), Some(vec![]));
    }

    #[test]
    fn loop_closes_back_to_first_vertex() {
        let idx = Topology::LineLoop.index_list(6).unwrap();
        assert_eq!(idx, vec![0, 1, 2, 3, 4, 5, 0]);
        assert_eq!(Topology::LineLoop.index_list(1), Some(vec![]));
    }

    #[test]
    fn native_topologies_need_no_indices() {
        assert_eq!(Topology::TriangleStrip.index_list(10), None);
        assert_eq!(Topology::LineStrip.index_list(10), None);
        assert_eq!(Topology::Triangles.index_list(10), None);
    }

    // ── primitive ─────────────────────────────────────────────────────────

    #[test]
    fn emulated_topologies_map_to_native_ones() {
        assert_eq!(Topology::TriangleFan.primitive(), wgpu::PrimitiveTopology::TriangleList);
        assert_eq!(Topology::LineLoop.primitive(), wgpu::PrimitiveTopology::LineStrip);
    }

    #[test]
    fn only_strips_carry_an_index_format() {
        assert_eq!(Topology::TriangleStrip.strip_index_format(), Some(wgpu::IndexFormat::Uint32));
        assert_eq!(Topology::LineLoop.strip_index_format(), Some(wgpu::IndexFormat::Uint32));
        assert_eq!(Topology::TriangleFan.strip_index_format(), None);
        assert_eq!(Topology::Triangles.strip_index_format(), None);
    }
}
