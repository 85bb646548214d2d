use crate::ui::span::SpanLine;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
}

impl RenderFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: SpanLine) {
        self.lines.push(line);
    }

    pub fn blank_line(&mut self) {
        self.lines.push(Vec::new());
    }
}
