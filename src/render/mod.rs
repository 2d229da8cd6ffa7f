//! Rendering support that does not require a live engine.

mod headless;

pub use headless::{DrawCommand, HeadlessRenderer, CHAR_ADVANCE, LINE_HEIGHT};
