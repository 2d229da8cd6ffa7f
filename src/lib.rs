//! Overlay UI fragments
//!
//! Engine-agnostic presentation panels for a multiplayer game client:
//! a menu background and an in-game chat overlay. The host engine supplies
//! rendering, input polling, session queries and message transport through
//! the traits in [`engine`]; panels are driven once per frame.

pub mod chat;
pub mod config;
pub mod engine;
pub mod error;
pub mod fragment;
pub mod keybinds;
pub mod render;

pub use error::{Error, Result};
