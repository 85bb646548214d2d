use crate::ui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Wrap,
    NoWrap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
    pub wrap_mode: WrapMode,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            wrap_mode: WrapMode::Wrap,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            wrap_mode: WrapMode::Wrap,
        }
    }

    pub fn no_wrap(mut self) -> Self {
        self.wrap_mode = WrapMode::NoWrap;
        self
    }

    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }

    /// Splits on display-cell boundaries: the head fits in `max_width`
    /// columns, the tail (if any) carries the rest with the same style.
    pub fn split_at_width(&self, max_width: usize) -> (Span, Option<Span>) {
        let mut used = 0usize;
        let mut boundary = self.text.len();
        for (offset, ch) in self.text.char_indices() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used.saturating_add(ch_width) > max_width {
                boundary = offset;
                break;
            }
            used = used.saturating_add(ch_width);
        }

        let head = Span {
            text: self.text[..boundary].to_string(),
            style: self.style,
            wrap_mode: self.wrap_mode,
        };
        let tail = if boundary < self.text.len() {
            Some(Span {
                text: self.text[boundary..].to_string(),
                style: self.style,
                wrap_mode: self.wrap_mode,
            })
        } else {
            None
        };
        (head, tail)
    }
}

pub type SpanLine = Vec<Span>;
