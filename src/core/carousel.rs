use crate::core::panel::Panel;

/// Shows exactly one of N panels at a time. The navigator delegates all
/// panel switching here and never touches the panel list itself.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    panels: Vec<Panel>,
    active: usize,
}

impl Carousel {
    pub fn new(panels: Vec<Panel>) -> Self {
        Self { panels, active: 0 }
    }

    pub fn with_active(mut self, index: usize) -> Self {
        if index < self.panels.len() {
            self.active = index;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel_at(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_panel(&self) -> Option<&Panel> {
        self.panels.get(self.active)
    }

    /// Switches the visible panel. Out-of-range indices are a no-op.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.panels.len() {
            return false;
        }
        self.active = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Carousel;
    use crate::core::panel::Panel;

    fn carousel(count: usize) -> Carousel {
        let panels = (0..count).map(|i| Panel::new(format!("step {i}"))).collect();
        Carousel::new(panels)
    }

    #[test]
    fn show_switches_active_panel() {
        let mut c = carousel(3);
        assert!(c.show(2));
        assert_eq!(c.active_index(), 2);
        assert_eq!(c.active_panel().map(|p| p.title.as_str()), Some("step 2"));
    }

    #[test]
    fn show_out_of_range_is_noop() {
        let mut c = carousel(3);
        assert!(!c.show(3));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn with_active_ignores_invalid_index() {
        let c = carousel(2).with_active(5);
        assert_eq!(c.active_index(), 0);

        let c = carousel(2).with_active(1);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn empty_carousel_has_no_active_panel() {
        let mut c = carousel(0);
        assert!(c.active_panel().is_none());
        assert!(!c.show(0));
    }
}
