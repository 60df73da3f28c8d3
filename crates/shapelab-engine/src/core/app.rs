use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::device::Gpu;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demos.
///
/// Call order: `on_gpu_ready` once, then `on_window_event` / `on_frame` for
/// the lifetime of the window, then `on_exit` once before the GPU context
/// is dropped.
pub trait App {
    /// Called once after the window and GPU context exist, before the first frame.
    ///
    /// Build every buffer and pipeline here.
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) {
        let _ = gpu;
    }

    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once when the loop is about to stop. Release GPU objects here.
    fn on_exit(&mut self) {}
}
