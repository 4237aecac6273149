use crate::inputs::{Input, InputBase, InputCaps, KeyResult, Validator};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

pub struct TextInput {
    base: InputBase,
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.base = self.base.with_min_width(width);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.base = self.base.with_placeholder(placeholder);
        self
    }

    fn byte_pos(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn handle_char(&mut self, ch: char) {
        let byte_pos = self.byte_pos(self.cursor_pos);
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
        self.base.error = None;
    }

    fn handle_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let byte_pos = self.byte_pos(self.cursor_pos - 1);
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
        self.base.error = None;
    }

    fn handle_delete(&mut self) {
        if self.cursor_pos >= self.value.chars().count() {
            return;
        }
        let byte_pos = self.byte_pos(self.cursor_pos);
        self.value.remove(byte_pos);
        self.base.error = None;
    }

    fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            self.cursor_pos += 1;
        }
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn move_word_left(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            pos -= 1;
        }

        self.cursor_pos = pos;
    }

    fn move_word_right(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            pos += 1;
        }
        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            pos += 1;
        }

        self.cursor_pos = pos;
    }

    fn delete_word_impl(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        self.value = chars.into_iter().collect();
        self.cursor_pos = pos;
        self.base.error = None;
    }

    fn delete_word_forward_impl(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos);
        }
        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos);
        }

        self.value = chars.into_iter().collect();
        self.base.error = None;
    }
}

impl Input for TextInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.cursor_pos = value.chars().count();
        self.value = value;
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps {
            capture_ctrl_backspace: true,
            capture_ctrl_delete: true,
            capture_ctrl_left: true,
            capture_ctrl_right: true,
            ..InputCaps::default()
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) => {
                self.handle_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.delete_word_impl();
                } else {
                    self.handle_backspace();
                }
                KeyResult::Handled
            }
            KeyCode::Delete => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.delete_word_forward_impl();
                } else {
                    self.handle_delete();
                }
                KeyResult::Handled
            }
            KeyCode::Left => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_left();
                } else {
                    self.move_left();
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_right();
                } else {
                    self.move_right();
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.chars().count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        if self.value.is_empty() {
            if let Some(placeholder) = self.placeholder() {
                return vec![Span::styled(placeholder, theme.placeholder)];
            }
        }
        vec![Span::new(&self.value)]
    }

    fn cursor_offset_in_content(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_pos)
            .map(|c| c.to_string().width())
            .sum()
    }

    fn delete_word(&mut self) {
        self.delete_word_impl();
    }

    fn delete_word_forward(&mut self) {
        self.delete_word_forward_impl();
    }
}
