use crate::ui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    style: Style,
    wrap: Wrap,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            wrap: Wrap::Yes,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            wrap: Wrap::Yes,
        }
    }

    pub fn no_wrap(mut self) -> Self {
        self.wrap = Wrap::No;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn wrap(&self) -> Wrap {
        self.wrap
    }

    pub fn width(&self) -> usize {
        self.text.width()
    }

    /// Splits at a display-width boundary; the head never exceeds `width`
    /// columns. Returns `None` as tail when nothing is left over.
    pub fn split_at_width(&self, width: usize) -> (Span, Option<Span>) {
        let mut head_width = 0;
        let mut split_at = self.text.len();

        for (i, ch) in self.text.char_indices() {
            let ch_width = ch.width().unwrap_or(0);
            if head_width + ch_width > width {
                split_at = i;
                break;
            }
            head_width += ch_width;
        }

        let head = Span {
            text: self.text[..split_at].to_string(),
            style: self.style,
            wrap: self.wrap,
        };
        let rest = &self.text[split_at..];
        if rest.is_empty() {
            (head, None)
        } else {
            (
                head,
                Some(Span {
                    text: rest.to_string(),
                    style: self.style,
                    wrap: self.wrap,
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn split_respects_wide_characters() {
        let span = Span::new("日本語");
        let (head, tail) = span.split_at_width(3);
        assert_eq!(head.text(), "日");
        assert_eq!(tail.expect("tail").text(), "本語");
    }

    #[test]
    fn split_with_room_returns_no_tail() {
        let span = Span::new("abc");
        let (head, tail) = span.split_at_width(10);
        assert_eq!(head.text(), "abc");
        assert!(tail.is_none());
    }
}
