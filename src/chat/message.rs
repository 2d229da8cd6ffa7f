//! Chat messages and the newest-first message log.

/// A single chat line. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Absent for system/server messages.
    pub sender: Option<String>,
    /// Raw message text.
    pub message: String,
    /// Display text, computed once: a color-tagged sender prefix, or the
    /// raw text verbatim when there is no sender.
    pub formatted: String,
}

impl ChatMessage {
    pub fn new(message: impl Into<String>, sender: Option<&str>) -> Self {
        let message = message.into();
        let formatted = match sender {
            None => message.clone(),
            Some(s) => format!("[coral][[{s}[coral]]:[white] {message}"),
        };
        Self {
            sender: sender.map(str::to_string),
            message,
            formatted,
        }
    }
}

/// Ordered message history, newest first, capped at `max_messages`.
#[derive(Debug)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    max_messages: usize,
}

impl ChatLog {
    pub fn new(max_messages: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_messages: max_messages.max(1),
        }
    }

    /// Prepend a message, dropping the oldest entry past the cap.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.insert(0, message);
        if self.messages.len() > self.max_messages {
            self.messages.pop();
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Message at `index`, 0 being the most recent.
    pub fn get(&self, index: usize) -> Option<&ChatMessage> {
        self.messages.get(index)
    }
}

/// Strip color markup (e.g. `[coral]name[white]: hi`) from display text,
/// keeping `[[` escapes as literal brackets. Used when echoing chat lines
/// to the plain-text log.
pub fn strip_color_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '[' {
            if chars.peek() == Some(&'[') {
                chars.next();
                out.push('[');
                continue;
            }
            // skip to the closing bracket; unterminated tags are dropped
            for ch in chars.by_ref() {
                if ch == ']' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_message_unformatted() {
        let msg = ChatMessage::new("server restarting", None);
        assert_eq!(msg.formatted, "server restarting");
        assert!(msg.sender.is_none());
    }

    #[test]
    fn test_sender_message_tagged() {
        let msg = ChatMessage::new("hi", Some("Bob"));
        assert_eq!(msg.formatted, "[coral][[Bob[coral]]:[white] hi");
        assert_eq!(msg.sender.as_deref(), Some("Bob"));
        assert_eq!(msg.message, "hi");
    }

    #[test]
    fn test_strip_color_tags() {
        assert_eq!(
            strip_color_tags("[coral][[Bob[coral]]:[white] hi"),
            "[Bob]: hi"
        );
        assert_eq!(strip_color_tags("plain"), "plain");
        assert_eq!(strip_color_tags("[unterminated"), "");
    }

    #[test]
    fn test_log_cap_drops_oldest() {
        let mut log = ChatLog::new(2);
        log.push(ChatMessage::new("one", None));
        log.push(ChatMessage::new("two", None));
        log.push(ChatMessage::new("three", None));
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(0).unwrap().message, "three");
        assert_eq!(log.get(1).unwrap().message, "two");
    }
}
