//! UI fragments: self-contained panels driven once per frame by the host.

mod background;
mod chat;

pub use background::BackgroundMenuPanel;
pub use chat::ChatOverlay;

use crate::engine::{InputPoll, Renderer, SceneRoot, Viewport};
use crate::error::Result;

/// A self-contained UI panel attached to the engine's scene graph.
///
/// The host calls [`Fragment::update`] then [`Fragment::draw`] once per
/// frame on the render thread. `dt` is elapsed time in frame units
/// (1.0 at the reference 60 FPS).
pub trait Fragment {
    /// Register the panel with the scene so the host drives its hooks.
    fn attach_to(&mut self, scene: &mut dyn SceneRoot);

    /// Per-frame input and state step.
    fn update(&mut self, _input: &mut dyn InputPoll, _dt: f32) {}

    /// Per-frame draw.
    fn draw(&mut self, renderer: &mut dyn Renderer, viewport: Viewport) -> Result<()>;

    /// Whether the panel draws this frame.
    fn visible(&self) -> bool;
}
