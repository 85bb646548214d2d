#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Visibility of the prev/next/finish control row, derived from the current
/// step index:
///
/// - first step   → prev hidden, next visible, finish hidden
/// - last step    → prev visible, next hidden, finish visible
/// - in between   → prev visible, next visible, finish hidden
/// - single step  → prev hidden, next hidden, finish visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub previous: Visibility,
    pub next: Visibility,
    pub finish: Visibility,
}

impl Controls {
    pub fn hidden() -> Self {
        Self {
            previous: Visibility::Hidden,
            next: Visibility::Hidden,
            finish: Visibility::Hidden,
        }
    }

    pub fn for_index(current: usize, max_index: usize) -> Self {
        if max_index == 0 {
            Self {
                previous: Visibility::Hidden,
                next: Visibility::Hidden,
                finish: Visibility::Visible,
            }
        } else if current == 0 {
            Self {
                previous: Visibility::Hidden,
                next: Visibility::Visible,
                finish: Visibility::Hidden,
            }
        } else if current == max_index {
            Self {
                previous: Visibility::Visible,
                next: Visibility::Hidden,
                finish: Visibility::Visible,
            }
        } else {
            Self {
                previous: Visibility::Visible,
                next: Visibility::Visible,
                finish: Visibility::Hidden,
            }
        }
    }
}
