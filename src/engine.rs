//! Engine boundary traits and shared value types.
//!
//! The host engine owns the scene graph, texture/font rendering, input
//! devices, session state and the network transport. Fragments only see
//! those services through the traits here, injected at construction, so
//! every panel can be driven headlessly in tests.

use crate::error::Result;

/// RGBA color value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Axis-aligned rectangle in screen pixels, origin at top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// A named texture region resolved by the engine's atlas.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRegion {
    pub name: String,
    pub width: f32,
    pub height: f32,
}

/// Current viewport, queried once per frame.
///
/// `scale` is the device-independent pixel scale; sizes specified in dp
/// units go through [`Viewport::dp`].
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self { width, height, scale }
    }

    /// Convert device-independent units to pixels.
    pub fn dp(&self, units: f32) -> f32 {
        units * self.scale
    }

    pub fn portrait(&self) -> bool {
        self.width < self.height
    }
}

/// Rendering primitives supplied by the engine.
///
/// Text is word-wrapped within the given width and bottom-left aligned;
/// measurement and layout use the same glyph metrics, so a rect sized from
/// [`Renderer::measure_text`] exactly fits the drawn text.
pub trait Renderer {
    /// Resolve a named texture region.
    fn region(&self, name: &str) -> Result<TextureRegion>;

    /// Draw a textured quad tinted by `color`.
    fn draw_region(&mut self, region: &TextureRegion, rect: Rect, color: Color);

    /// Wrapped pixel height of `text` laid out within `wrap_width`.
    fn measure_text(&mut self, text: &str, wrap_width: f32) -> f32;

    /// Draw word-wrapped text bottom-left aligned within `rect`.
    fn draw_text(&mut self, text: &str, rect: Rect, color: Color);
}

/// Edge-triggered key polling, once per frame.
pub trait InputPoll {
    /// Whether `key` was newly pressed this frame.
    fn key_tap(&mut self, key: &str) -> bool;
}

/// Read-only session/mode queries.
pub trait Session {
    /// Whether the application's top-level mode is the menu.
    fn in_menu(&self) -> bool;

    /// Whether networking is currently active.
    fn net_active(&self) -> bool;
}

/// Outgoing chat transport. Fire-and-forget; delivery is the engine's
/// problem, so the call takes `&self` and implementations queue internally.
pub trait ChatSink {
    fn send_chat_message(&self, text: &str);
}

/// Scene graph attach point for fragments.
pub trait SceneRoot {
    fn add(&mut self, name: &'static str);
}
