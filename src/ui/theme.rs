use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub header_active: Style,
    pub header_inactive: Style,
    pub badge_active: Style,
    pub badge_inverse: Style,
    pub body: Style,
    pub separator: Style,
    pub control: Style,
    pub finish: Style,
    pub hint: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            header_active: Style::new().bold(),
            header_inactive: Style::new().color(Color::DarkGrey),
            badge_active: Style::new().color(Color::Black).background(Color::Cyan),
            badge_inverse: Style::new().color(Color::DarkGrey),
            body: Style::new(),
            separator: Style::new().color(Color::DarkGrey),
            control: Style::new().color(Color::Cyan),
            finish: Style::new().color(Color::Green).bold(),
            hint: Style::new().color(Color::DarkGrey),
        }
    }
}
