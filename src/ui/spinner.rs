use crate::ui::span::Span;
use crate::ui::style::{Color, Style};

const FRAMES: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

/// Activity indicator shown while a submission is in flight.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn span(&self) -> Span {
        Span::styled(
            FRAMES[self.frame].to_string(),
            Style::new().color(Color::Cyan),
        )
        .no_wrap()
    }
}
