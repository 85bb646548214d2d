use crate::core::controls::{Controls, Visibility};
use crate::core::options::NavigatorOptions;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

const CONTROL_GAP: &str = "   ";

/// Renders the prev/next/finish row. Hidden controls keep their width as
/// blanks so the row never shifts when visibility changes.
pub struct ControlsRenderer<'a> {
    theme: &'a Theme,
}

impl<'a> ControlsRenderer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn build(&self, controls: Controls, options: &NavigatorOptions) -> SpanLine {
        vec![
            slot(
                format!("← {}", options.previous_text),
                controls.previous,
                self.theme.control,
            ),
            Span::new(CONTROL_GAP).no_wrap(),
            slot(
                format!("{} →", options.next_text),
                controls.next,
                self.theme.control,
            ),
            Span::new(CONTROL_GAP).no_wrap(),
            slot(
                format!("[ {} ]", options.finish_text),
                controls.finish,
                self.theme.finish,
            ),
        ]
    }
}

fn slot(text: String, visibility: Visibility, style: Style) -> Span {
    match visibility {
        Visibility::Visible => Span::styled(text, style).no_wrap(),
        Visibility::Hidden => {
            Span::new(" ".repeat(UnicodeWidthStr::width(text.as_str()))).no_wrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ControlsRenderer;
    use crate::core::controls::Controls;
    use crate::core::options::NavigatorOptions;
    use crate::ui::span::SpanLine;
    use crate::ui::theme::Theme;

    fn text_of(line: &SpanLine) -> String {
        line.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn first_step_blanks_previous_and_finish() {
        let theme = Theme::default_theme();
        let options = NavigatorOptions::default();
        let line = ControlsRenderer::new(&theme).build(Controls::for_index(0, 2), &options);
        let text = text_of(&line);
        assert_eq!(text.trim(), "Next →");
        assert!(text.starts_with(&" ".repeat(10)));
    }

    #[test]
    fn last_step_blanks_next_and_shows_finish() {
        let theme = Theme::default_theme();
        let options = NavigatorOptions::default();
        let line = ControlsRenderer::new(&theme).build(Controls::for_index(2, 2), &options);
        let text = text_of(&line);
        assert!(text.starts_with("← Previous"));
        assert!(text.ends_with("[ Finish ]"));
        assert!(!text.contains("Next"));
    }

    #[test]
    fn hidden_controls_keep_the_row_width_stable() {
        let theme = Theme::default_theme();
        let options = NavigatorOptions::default();
        let renderer = ControlsRenderer::new(&theme);

        let widths: Vec<usize> = [
            Controls::for_index(0, 2),
            Controls::for_index(1, 2),
            Controls::for_index(2, 2),
        ]
        .into_iter()
        .map(|controls| text_of(&renderer.build(controls, &options)).chars().count())
        .collect();

        assert_eq!(widths[0], widths[1]);
        assert_eq!(widths[1], widths[2]);
    }

    #[test]
    fn labels_come_from_the_options() {
        let theme = Theme::default_theme();
        let options = NavigatorOptions {
            previous_text: "Back".to_string(),
            next_text: "Continue".to_string(),
            finish_text: "Done".to_string(),
        };
        let line = ControlsRenderer::new(&theme).build(Controls::for_index(1, 2), &options);
        let text = text_of(&line);
        assert!(text.starts_with("← Back"));
        assert!(text.contains("Continue →"));
        assert!(!text.contains("Done"));
    }
}
