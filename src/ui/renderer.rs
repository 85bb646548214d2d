use crate::core::navigator::Navigator;
use crate::terminal::TerminalSize;
use crate::ui::controls::ControlsRenderer;
use crate::ui::frame::RenderFrame;
use crate::ui::header::HeaderRenderer;
use crate::ui::layout;
use crate::ui::span::Span;
use crate::ui::theme::Theme;

const SEPARATOR_WIDTH: usize = 40;
const KEY_HINTS: &str = "←/→ move · 1-9 jump · Enter submit · q quit";

/// Composes header, separator, active panel body, and the control row into
/// a frame, then reflows it to the terminal width.
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn render(&self, navigator: &Navigator, size: TerminalSize) -> RenderFrame {
        let mut frame = RenderFrame::new();

        frame.push_line(HeaderRenderer::new(&self.theme).build(&navigator.header_entries()));
        frame.push_line(self.separator(size.width));
        frame.blank_line();

        if let Some(panel) = navigator.carousel().active_panel() {
            for line in &panel.body {
                frame.push_line(vec![Span::styled(line.as_str(), self.theme.body)]);
            }
        }

        frame.blank_line();
        frame.push_line(
            ControlsRenderer::new(&self.theme).build(navigator.controls(), navigator.options()),
        );
        frame.blank_line();
        frame.push_line(vec![Span::styled(KEY_HINTS, self.theme.hint).no_wrap()]);

        frame.lines = layout::compose(&frame.lines, size.width);
        frame
    }

    fn separator(&self, width: u16) -> Vec<Span> {
        let width = (width as usize).min(SEPARATOR_WIDTH).max(1);
        vec![Span::styled("─".repeat(width), self.theme.separator).no_wrap()]
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Theme::default_theme())
    }
}
