//! Chat input field state.
//!
//! Length is filtered at insertion time (the engine's text widget feeds
//! typed characters through [`ChatField::insert`]) rather than validated
//! when sending.

#[derive(Debug)]
pub struct ChatField {
    text: String,
    focused: bool,
    max_len: usize,
}

impl ChatField {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            focused: false,
            max_len,
        }
    }

    /// Append a typed character, ignored once the field is full.
    pub fn insert(&mut self, c: char) {
        if self.text.chars().count() < self.max_len {
            self.text.push(c);
        }
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert(c);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let len = self.max_len;
        if self.text.chars().count() > len {
            self.text = self.text.chars().take(len).collect();
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Clear the field and return its content with surrounding whitespace
    /// stripped.
    pub fn take_trimmed(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        text.trim().to_string()
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_filters_at_max_len() {
        let mut field = ChatField::new(5);
        field.insert_str("hello world");
        assert_eq!(field.text(), "hello");
        field.insert('!');
        assert_eq!(field.text(), "hello");
    }

    #[test]
    fn test_take_trimmed_clears() {
        let mut field = ChatField::new(150);
        field.insert_str("  hi there  ");
        assert_eq!(field.take_trimmed(), "hi there");
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_set_text_truncates() {
        let mut field = ChatField::new(3);
        field.set_text("abcdef");
        assert_eq!(field.text(), "abc");
    }
}
