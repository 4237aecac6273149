use crate::core::value::Value;
use crate::inputs::{Input, InputBase, KeyResult, Validator};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::ui::theme::Theme;

pub struct CheckboxInput {
    base: InputBase,
    checked: bool,
}

impl CheckboxInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            checked: false,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    fn toggle(&mut self) {
        self.checked = !self.checked;
        self.base.error = None;
    }
}

impl Input for CheckboxInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn value(&self) -> String {
        if self.checked { "true" } else { "false" }.to_string()
    }

    fn set_value(&mut self, value: String) {
        self.checked = matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes");
    }

    fn value_typed(&self) -> Value {
        Value::Bool(self.checked)
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(' ') => {
                self.toggle();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, _theme: &Theme) -> Vec<Span> {
        let (symbol, color) = if self.checked {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        vec![Span::styled(symbol, Style::new().color(color))]
    }

    fn cursor_offset_in_content(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::CheckboxInput;
    use crate::core::value::Value;
    use crate::inputs::Input;
    use crate::terminal::{KeyCode, KeyModifiers};

    #[test]
    fn space_toggles_and_value_is_typed() {
        let mut input = CheckboxInput::new("millionaire", "I am a Millionaire");
        assert_eq!(input.value_typed(), Value::Bool(false));

        input.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(input.value_typed(), Value::Bool(true));
        assert_eq!(input.value(), "true");
    }

    #[test]
    fn set_value_parses_common_spellings() {
        let mut input = CheckboxInput::new("flag", "Flag");
        input.set_value("Yes".to_string());
        assert!(input.checked());
        input.set_value(String::new());
        assert!(!input.checked());
    }
}
