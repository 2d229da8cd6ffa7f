//! Shared test fixtures: stub engine collaborators and overlay setup.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use overlay_ui::config::OverlaySettings;
use overlay_ui::engine::{ChatSink, InputPoll, Session};
use overlay_ui::fragment::ChatOverlay;

/// Session stub with externally flippable flags.
pub struct StubSession {
    pub in_menu: Cell<bool>,
    pub net_active: Cell<bool>,
}

impl StubSession {
    /// In a game with networking up — the state chat tests start from.
    pub fn in_game() -> Self {
        Self {
            in_menu: Cell::new(false),
            net_active: Cell::new(true),
        }
    }

    #[allow(dead_code)]
    pub fn at_menu() -> Self {
        Self {
            in_menu: Cell::new(true),
            net_active: Cell::new(false),
        }
    }
}

impl Session for StubSession {
    fn in_menu(&self) -> bool {
        self.in_menu.get()
    }

    fn net_active(&self) -> bool {
        self.net_active.get()
    }
}

/// Records every outgoing chat message.
#[derive(Default)]
pub struct RecordingSink {
    pub sent: RefCell<Vec<String>>,
}

impl ChatSink for RecordingSink {
    fn send_chat_message(&self, text: &str) {
        self.sent.borrow_mut().push(text.to_string());
    }
}

/// Key taps pressed for the current frame, consumed on poll.
#[derive(Default)]
#[allow(dead_code)]
pub struct TapInput {
    pending: Vec<String>,
}

impl TapInput {
    #[allow(dead_code)]
    pub fn press(&mut self, key: &str) {
        self.pending.push(key.to_string());
    }
}

impl InputPoll for TapInput {
    fn key_tap(&mut self, key: &str) -> bool {
        if let Some(pos) = self.pending.iter().position(|k| k == key) {
            self.pending.remove(pos);
            true
        } else {
            false
        }
    }
}

/// Overlay with default settings wired to fresh stubs.
#[allow(dead_code)]
pub fn overlay() -> (ChatOverlay, Rc<StubSession>, Rc<RecordingSink>) {
    let session = Rc::new(StubSession::in_game());
    let sink = Rc::new(RecordingSink::default());
    let overlay = ChatOverlay::new(&OverlaySettings::default(), session.clone(), sink.clone());
    (overlay, session, sink)
}
