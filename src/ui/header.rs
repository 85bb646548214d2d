use crate::core::navigator::HeaderEntry;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;

/// Renders the step header: one numbered badge plus title per panel, the
/// active entry styled apart from the rest.
pub struct HeaderRenderer<'a> {
    theme: &'a Theme,
}

impl<'a> HeaderRenderer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn build(&self, entries: &[HeaderEntry]) -> SpanLine {
        let mut spans: SpanLine = Vec::new();
        for entry in entries {
            if entry.index > 0 {
                spans.push(Span::new("  ").no_wrap());
            }
            let (badge_style, title_style) = if entry.active {
                (self.theme.badge_active, self.theme.header_active)
            } else {
                (self.theme.badge_inverse, self.theme.header_inactive)
            };
            spans.push(Span::styled(format!(" {} ", entry.index + 1), badge_style).no_wrap());
            spans.push(Span::new(" ").no_wrap());
            spans.push(Span::styled(entry.title.as_str(), title_style).no_wrap());
        }
        spans
    }
}
