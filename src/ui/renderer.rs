use crate::core::node::Node;
use crate::core::state::AppState;
use crate::core::wizard::StepStatus;
use crate::terminal::Terminal;
use crate::ui::layout;
use crate::ui::span::Span;
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;
use std::io;
use unicode_width::UnicodeWidthStr;

const FOCUS_MARKER: &str = "❯ ";
const PLAIN_MARKER: &str = "  ";

/// Inline renderer: repaints the wizard in place below the row where the
/// program started, without switching to the alternate screen.
pub struct Renderer {
    origin_row: u16,
    initialized: bool,
    last_height: u16,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            origin_row: 0,
            initialized: false,
            last_height: 0,
        }
    }

    pub fn render(
        &mut self,
        state: &AppState,
        theme: &Theme,
        spinner: Option<&Spinner>,
        terminal: &mut Terminal,
    ) -> io::Result<()> {
        if !self.initialized {
            terminal.refresh_cursor_position()?;
            self.origin_row = terminal.cursor_position().y;
            self.initialized = true;
        }

        let rows = build_rows(state, theme, spinner);
        let (frame, cursor) = layout::compose(rows, terminal.size().width);

        let height = frame.height() as u16;
        let term_height = terminal.size().height;
        if self.origin_row + height > term_height {
            let scroll = self.origin_row + height - term_height;
            terminal.scroll_up(scroll)?;
            self.origin_row = self.origin_row.saturating_sub(scroll);
        }

        terminal.queue_hide_cursor()?;
        for (i, line) in frame.lines().iter().enumerate() {
            terminal.queue_move_cursor(0, self.origin_row + i as u16)?;
            terminal.queue_clear_line()?;
            terminal.render_line(line)?;
        }
        for stale in height..self.last_height {
            terminal.queue_move_cursor(0, self.origin_row + stale)?;
            terminal.queue_clear_line()?;
        }
        self.last_height = height;

        if spinner.is_none() {
            if let Some(pos) = cursor {
                terminal.queue_move_cursor(pos.col, self.origin_row + pos.row)?;
                terminal.queue_show_cursor()?;
            }
        }

        terminal.flush()
    }

    pub fn move_to_end(&self, terminal: &mut Terminal) -> io::Result<()> {
        terminal.move_cursor(0, self.origin_row + self.last_height)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_rows(
    state: &AppState,
    theme: &Theme,
    spinner: Option<&Spinner>,
) -> Vec<(Vec<Span>, Option<usize>)> {
    let mut rows = Vec::new();

    rows.push((step_indicator(state, theme), None));

    if let Some(hint) = state.wizard.current_step().hint.as_deref() {
        rows.push((vec![Span::styled(hint, theme.hint)], None));
    }
    rows.push((vec![], None));

    let focused_id = state.engine.focused_id().cloned();
    for node in &state.wizard.current_step().nodes {
        match node {
            Node::Text(content) => rows.push((vec![Span::new(content.as_str())], None)),
            Node::Separator => {
                rows.push((vec![Span::styled("─".repeat(24), theme.hint).no_wrap()], None))
            }
            Node::Input(input) => {
                let focused = focused_id.as_deref() == Some(input.id().as_str());
                let marker = if focused { FOCUS_MARKER } else { PLAIN_MARKER };
                let prefix = format!("{}{}: [", marker, input.label());

                let mut spans = Vec::new();
                if focused {
                    spans.push(Span::styled(&prefix, theme.focused).no_wrap());
                } else {
                    spans.push(Span::new(&prefix).no_wrap());
                }

                let content = input.render_content(theme);
                let content_width: usize = content.iter().map(|s| s.width()).sum();
                spans.extend(content);
                if content_width < input.min_width() {
                    spans.push(Span::new(" ".repeat(input.min_width() - content_width)));
                }
                spans.push(Span::new("]"));

                let cursor = focused
                    .then(|| prefix.width() + input.cursor_offset_in_content());
                rows.push((spans, cursor));

                if let Some(error) = input.error() {
                    rows.push((
                        vec![Span::styled(format!("  ! {}", error), theme.error)],
                        None,
                    ));
                }
            }
        }
    }

    rows.push((vec![], None));
    rows.push((footer(state, theme, spinner), None));

    rows
}

fn step_indicator(state: &AppState, theme: &Theme) -> Vec<Span> {
    let mut spans = Vec::new();

    for index in 0..state.wizard.len() {
        if index > 0 {
            spans.push(Span::styled(" ─ ", theme.step_pending).no_wrap());
        }

        let (symbol, style, label_style) = match state.wizard.status_at(index) {
            StepStatus::Done => ("●", theme.step_done, theme.step_done),
            StepStatus::Active => ("●", theme.step_active, theme.prompt),
            StepStatus::Pending => ("○", theme.step_pending, theme.step_pending),
            StepStatus::Cancelled => ("✗", theme.error, theme.step_pending),
        };

        spans.push(Span::styled(symbol, style).no_wrap());
        spans.push(Span::new(" ").no_wrap());
        if let Some(step) = state.wizard.step_at(index) {
            spans.push(Span::styled(step.label.as_str(), label_style).no_wrap());
        }
    }

    spans
}

fn footer(state: &AppState, theme: &Theme, spinner: Option<&Spinner>) -> Vec<Span> {
    if let Some(spinner) = spinner {
        return vec![
            spinner.span(),
            Span::new(" Submitting…").no_wrap(),
        ];
    }

    let next = if state.wizard.is_last() {
        "Enter submit"
    } else {
        "Enter next"
    };
    let back = if state.wizard.current_index() > 0 {
        " · Ctrl+B back"
    } else {
        ""
    };
    vec![Span::styled(
        format!("{next} · Tab fields{back} · Esc cancel"),
        theme.hint,
    )]
}
