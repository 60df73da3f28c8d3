/// Renderer-facing context for one frame.
pub struct RenderCtx<'a> {
    pub queue: &'a wgpu::Queue,
    /// Seconds since the first frame.
    pub time: f32,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(queue: &'a wgpu::Queue, time: f32) -> Self {
        Self { queue, time }
    }
}
