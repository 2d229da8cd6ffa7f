//! Headless renderer for tests and the demo binary.
//!
//! Drives fragments without a window by recording draw calls. Text
//! measurement uses a fixed character-budget wrap model so layouts are
//! deterministic across machines.

use std::collections::HashMap;

use crate::engine::{Color, Rect, Renderer, TextureRegion};
use crate::error::{Error, Result};

/// Pixel height of one wrapped line in the measurement model.
pub const LINE_HEIGHT: f32 = 16.0;
/// Approximate advance per character in the measurement model.
pub const CHAR_ADVANCE: f32 = 8.0;

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Region {
        name: String,
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        rect: Rect,
        color: Color,
    },
}

/// Recording [`Renderer`]. A 1x1 `"white"` region is pre-registered, as
/// every engine atlas carries one for solid fills.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    regions: HashMap<String, TextureRegion>,
    commands: Vec<DrawCommand>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        let mut renderer = Self::default();
        renderer.add_region("white", 1.0, 1.0);
        renderer
    }

    /// Register a named region, as the engine atlas would.
    pub fn add_region(&mut self, name: &str, width: f32, height: f32) {
        self.regions.insert(
            name.to_string(),
            TextureRegion {
                name: name.to_string(),
                width,
                height,
            },
        );
    }

    /// Discard recorded commands at the start of a frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Renderer for HeadlessRenderer {
    fn region(&self, name: &str) -> Result<TextureRegion> {
        self.regions
            .get(name)
            .cloned()
            .ok_or_else(|| Error::RegionMissing(name.to_string()))
    }

    fn draw_region(&mut self, region: &TextureRegion, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Region {
            name: region.name.clone(),
            rect,
            color,
        });
    }

    fn measure_text(&mut self, text: &str, wrap_width: f32) -> f32 {
        let per_line = ((wrap_width / CHAR_ADVANCE) as usize).max(1);
        let chars = text.chars().count().max(1);
        let lines = chars.div_ceil(per_line);
        lines as f32 * LINE_HEIGHT
    }

    fn draw_text(&mut self, text: &str, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            rect,
            color,
        });
    }
}
