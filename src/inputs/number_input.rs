use crate::core::value::Value;
use crate::inputs::{Input, InputBase, InputCaps, KeyResult, Validator};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

/// Numeric field: accepts digits, one leading sign and one decimal point.
pub struct NumberInput {
    base: InputBase,
    value: String,
    cursor_pos: usize,
}

impl NumberInput {
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

    fn accepts(&self, ch: char) -> bool {
        match ch {
            '0'..='9' => true,
            '-' => self.cursor_pos == 0 && !self.value.starts_with('-'),
            '.' => !self.value.contains('.'),
            _ => false,
        }
    }

    fn handle_char(&mut self, ch: char) {
        if !self.accepts(ch) {
            return;
        }
        self.value.insert(self.cursor_pos, ch);
        self.cursor_pos += 1;
        self.base.error = None;
    }

    fn handle_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        self.value.remove(self.cursor_pos - 1);
        self.cursor_pos -= 1;
        self.base.error = None;
    }
}

impl Input for NumberInput {
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
        self.cursor_pos = value.len();
        self.value = value;
    }

    fn value_typed(&self) -> Value {
        if let Ok(int) = self.value.parse::<i64>() {
            return Value::Integer(int);
        }
        if let Ok(float) = self.value.parse::<f64>() {
            return Value::Float(float);
        }
        Value::Text(self.value.clone())
    }

    fn is_complete(&self) -> bool {
        self.value.is_empty() || self.value.parse::<f64>().is_ok()
    }

    fn validate_internal(&self) -> Result<(), String> {
        if self.value.is_empty() || self.value.parse::<f64>().is_ok() {
            Ok(())
        } else {
            Err("Not a number".to_string())
        }
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps {
            capture_ctrl_backspace: true,
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
                    self.delete_word();
                } else {
                    self.handle_backspace();
                }
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                KeyResult::Handled
            }
            KeyCode::Right => {
                if self.cursor_pos < self.value.len() {
                    self.cursor_pos += 1;
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.len();
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
        self.value[..self.cursor_pos].width()
    }

    fn delete_word(&mut self) {
        self.value.truncate(0);
        self.cursor_pos = 0;
        self.base.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::NumberInput;
    use crate::core::value::Value;
    use crate::inputs::Input;
    use crate::terminal::{KeyCode, KeyModifiers};

    fn type_str(input: &mut NumberInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn rejects_non_numeric_characters() {
        let mut input = NumberInput::new("money", "Money");
        type_str(&mut input, "1a2b3");
        assert_eq!(input.value(), "123");
        assert_eq!(input.value_typed(), Value::Integer(123));
    }

    #[test]
    fn one_sign_and_one_decimal_point() {
        let mut input = NumberInput::new("money", "Money");
        type_str(&mut input, "-12.5");
        assert_eq!(input.value_typed(), Value::Float(-12.5));

        type_str(&mut input, ".7-");
        assert_eq!(input.value(), "-12.57");
    }

    #[test]
    fn lone_sign_is_incomplete() {
        let mut input = NumberInput::new("money", "Money");
        type_str(&mut input, "-");
        assert!(!input.is_complete());
        assert!(input.validate_internal().is_err());
    }
}
