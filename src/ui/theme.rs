use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub prompt: Style,
    pub hint: Style,
    pub error: Style,
    pub placeholder: Style,
    pub focused: Style,
    pub step_done: Style,
    pub step_active: Style,
    pub step_pending: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            prompt: Style::new().bold(),
            hint: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red).bold(),
            placeholder: Style::new().color(Color::DarkGrey),
            focused: Style::new().color(Color::Cyan),
            step_done: Style::new().color(Color::Green),
            step_active: Style::new().color(Color::Cyan).bold(),
            step_pending: Style::new().color(Color::DarkGrey),
        }
    }
}
