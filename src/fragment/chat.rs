//! In-game chat overlay: recent-message history with timed fade and an
//! input line toggled by a keybinding.

use std::rc::Rc;

use crate::chat::{strip_color_tags, ChatField, ChatLog, ChatMessage, FadeState};
use crate::config::OverlaySettings;
use crate::engine::{ChatSink, Color, InputPoll, Rect, Renderer, SceneRoot, Session, Viewport};
use crate::error::Result;
use crate::fragment::Fragment;
use crate::keybinds::{BindAction, KeyBindings};

/// Backdrop tint behind the input line and each message row.
const SHADOW: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.4 };

/// Input line height in pixels.
const FIELD_HEIGHT: f32 = 28.0;

pub struct ChatOverlay {
    log: ChatLog,
    fade: FadeState,
    field: ChatField,
    open: bool,
    fade_frames: f32,
    text_width: f32,
    bindings: KeyBindings,
    session: Rc<dyn Session>,
    net: Rc<dyn ChatSink>,
}

impl ChatOverlay {
    pub fn new(
        settings: &OverlaySettings,
        session: Rc<dyn Session>,
        net: Rc<dyn ChatSink>,
    ) -> Self {
        Self {
            log: ChatLog::new(settings.max_messages),
            fade: FadeState::new(settings.messages_shown),
            field: ChatField::new(settings.max_input_len),
            open: false,
            fade_frames: settings.fade_frames,
            text_width: settings.text_width,
            bindings: settings.bindings.clone(),
            session,
            net,
        }
    }

    /// Prepend a received message and raise the fade counter.
    pub fn add_message(&mut self, message: &str, sender: Option<&str>) {
        let msg = ChatMessage::new(message, sender);
        tracing::info!(target: "chat", "{}", strip_color_tags(&msg.formatted));
        self.log.push(msg);
        self.fade.raise();
    }

    /// Empty the message log. Idempotent.
    pub fn clear_messages(&mut self) {
        self.log.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message_count(&self) -> usize {
        self.log.len()
    }

    /// The input field, for the engine to feed typed characters into.
    pub fn field(&mut self) -> &mut ChatField {
        &mut self.field
    }

    /// Open the input line, or close it and attempt to send.
    pub fn toggle(&mut self) {
        if !self.open {
            self.open = true;
            self.field.set_focus(true);
            self.fade.open();
            tracing::debug!(target: "chat", "opened");
        } else {
            self.open = false;
            self.field.set_focus(false);
            self.fade.restore();
            self.send_message();
            tracing::debug!(target: "chat", "closed");
        }
    }

    /// Force the overlay closed without sending, regardless of prior state.
    pub fn hide(&mut self) {
        self.open = false;
        self.field.set_focus(false);
        self.field.clear();
    }

    fn send_message(&mut self) {
        let message = self.field.take_trimmed();
        if message.is_empty() {
            return;
        }
        self.net.send_chat_message(&message);
    }

    fn key_tapped(&self, input: &mut dyn InputPoll, action: BindAction) -> bool {
        self.bindings
            .key_for(action)
            .is_some_and(|key| input.key_tap(key))
    }
}

impl Fragment for ChatOverlay {
    fn attach_to(&mut self, scene: &mut dyn SceneRoot) {
        scene.add("chat");
    }

    fn visible(&self) -> bool {
        !self.session.in_menu() && self.session.net_active()
    }

    fn update(&mut self, input: &mut dyn InputPoll, dt: f32) {
        if !self.session.net_active() && self.open {
            self.hide();
        }

        if self.session.net_active() {
            if self.key_tapped(input, BindAction::ToggleChat) {
                self.toggle();
            }
            if self.open && self.key_tapped(input, BindAction::HideChat) {
                self.hide();
            }
        }

        if !self.open {
            self.fade.decay(dt, self.fade_frames);
        }
    }

    fn draw(&mut self, renderer: &mut dyn Renderer, viewport: Viewport) -> Result<()> {
        if !self.visible() {
            return Ok(());
        }

        let white = renderer.region("white")?;
        let offset = viewport.dp(4.0);
        let chat_space = viewport.dp(50.0);
        let text_spacing = viewport.dp(10.0);
        let width = viewport.dp(self.text_width);

        if self.open {
            let field_rect = Rect::new(
                offset,
                viewport.height - offset - FIELD_HEIGHT,
                width + 15.0,
                FIELD_HEIGHT,
            );
            renderer.draw_region(&white, field_rect, SHADOW);
            renderer.draw_text(
                &format!("> {}", self.field.text()),
                Rect::new(offset * 2.0, field_rect.y, width, FIELD_HEIGHT),
                Color::WHITE,
            );
        }

        // Messages stack upward from a baseline above the input line,
        // newest at the bottom. Each row is measured with wrapping so the
        // backdrop box fits the wrapped text.
        let mut bottom = viewport.height - offset - chat_space;
        let count = self.fade.visible_count(self.log.len());
        for i in 0..count {
            let Some(msg) = self.log.get(i) else { break };
            let height = renderer.measure_text(&msg.formatted, width);
            let alpha = self.fade.alpha(i);

            renderer.draw_region(
                &white,
                Rect::new(
                    offset,
                    bottom - height - 2.0,
                    width + viewport.dp(4.0),
                    height + text_spacing,
                ),
                SHADOW.with_alpha(SHADOW.a * alpha),
            );
            renderer.draw_text(
                &msg.formatted,
                Rect::new(offset + viewport.dp(2.0), bottom - height, width, height),
                Color::WHITE.with_alpha(alpha),
            );

            bottom -= height + text_spacing;
        }

        Ok(())
    }
}
