use crate::ui::frame::{Frame, Line};
use crate::ui::span::{Span, Wrap};
use std::mem;

/// Screen position of the text cursor inside a composed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

/// Width-aware composition: each entry is one logical row (a list of
/// spans plus an optional cursor offset in display columns). Wrapping
/// spans continue on the next line; no-wrap spans are truncated.
pub fn compose(
    rows: impl IntoIterator<Item = (Vec<Span>, Option<usize>)>,
    width: u16,
) -> (Frame, Option<CursorPos>) {
    let width = width.max(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut current = Line::new();
    let mut current_width = 0usize;
    let mut cursor: Option<CursorPos> = None;

    for (spans, cursor_offset) in rows {
        let mut remaining_cursor = cursor_offset;

        for span in spans {
            let mut span = span;
            loop {
                if current_width >= width {
                    lines.push(mem::take(&mut current));
                    current_width = 0;
                }

                let available = width - current_width;
                if span.width() <= available {
                    if let Some(offset) = remaining_cursor {
                        if offset <= span.width() {
                            if cursor.is_none() {
                                cursor = Some(CursorPos {
                                    col: (current_width + offset) as u16,
                                    row: lines.len() as u16,
                                });
                            }
                            remaining_cursor = None;
                        } else {
                            remaining_cursor = Some(offset - span.width());
                        }
                    }
                    current_width += span.width();
                    current.push(span);
                    break;
                }

                match span.wrap() {
                    Wrap::No => {
                        let (head, _) = span.split_at_width(available);
                        if let Some(offset) = remaining_cursor.take() {
                            if cursor.is_none() {
                                cursor = Some(CursorPos {
                                    col: (current_width + offset.min(head.width())) as u16,
                                    row: lines.len() as u16,
                                });
                            }
                        }
                        current_width += head.width();
                        current.push(head);
                        break;
                    }
                    Wrap::Yes => {
                        let (head, tail) = span.split_at_width(available);
                        if let Some(offset) = remaining_cursor {
                            if offset < head.width() {
                                if cursor.is_none() {
                                    cursor = Some(CursorPos {
                                        col: (current_width + offset) as u16,
                                        row: lines.len() as u16,
                                    });
                                }
                                remaining_cursor = None;
                            } else {
                                remaining_cursor = Some(offset - head.width());
                            }
                        }
                        current_width += head.width();
                        current.push(head);
                        match tail {
                            Some(rest) => span = rest,
                            None => break,
                        }
                    }
                }
            }
        }

        // A row with a cursor past its content parks it at the row end.
        if remaining_cursor.is_some() && cursor.is_none() {
            cursor = Some(CursorPos {
                col: current_width as u16,
                row: lines.len() as u16,
            });
        }

        lines.push(mem::take(&mut current));
        current_width = 0;
    }

    while lines.last().is_some_and(Line::is_empty) {
        lines.pop();
    }

    (Frame::from_lines(lines), cursor)
}

#[cfg(test)]
mod tests {
    use super::compose;
    use crate::ui::span::Span;

    #[test]
    fn rows_map_to_lines_without_wrapping() {
        let rows = vec![
            (vec![Span::new("first")], None),
            (vec![Span::new("second")], None),
        ];
        let (frame, cursor) = compose(rows, 80);
        assert_eq!(frame.height(), 2);
        assert!(cursor.is_none());
    }

    #[test]
    fn long_rows_wrap_at_the_width() {
        let rows = vec![(vec![Span::new("abcdefghij")], None)];
        let (frame, _) = compose(rows, 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.lines()[0].width(), 4);
        assert_eq!(frame.lines()[2].width(), 2);
    }

    #[test]
    fn cursor_lands_on_the_wrapped_line() {
        let rows = vec![
            (vec![Span::new("header")], None),
            (vec![Span::new("abcdefghij")], Some(6)),
        ];
        // "header" wraps into two lines, "abcd" takes the third, so
        // offset 6 sits at column 2 of the fourth line.
        let (_, cursor) = compose(rows, 4);
        let cursor = cursor.expect("cursor");
        assert_eq!(cursor.row, 3);
        assert_eq!(cursor.col, 2);
    }

    #[test]
    fn no_wrap_spans_truncate_instead_of_wrapping() {
        let rows = vec![(vec![Span::new("abcdefghij").no_wrap()], None)];
        let (frame, _) = compose(rows, 4);
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.lines()[0].width(), 4);
    }
}
