//! Chat overlay state: message log, fade counter, input field.

mod fade;
mod field;
mod message;

pub use fade::FadeState;
pub use field::ChatField;
pub use message::{strip_color_tags, ChatLog, ChatMessage};
