use crate::core::carousel::Carousel;
use crate::core::controls::Controls;
use crate::core::options::{NavigatorHooks, NavigatorOptions, OptionsUpdate};

/// Backing data for one rendered header link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub index: usize,
    pub title: String,
    pub active: bool,
}

/// Tracks the current step index, gates forward moves through the
/// validation hook, and keeps header/control state in sync. Actual panel
/// switching is delegated to the carousel.
///
/// The index only moves through the operations below and always stays in
/// `[0, max_index]`.
pub struct Navigator {
    carousel: Carousel,
    current: usize,
    max_index: usize,
    options: NavigatorOptions,
    hooks: NavigatorHooks,
    controls: Controls,
    exit_requested: bool,
}

impl Navigator {
    pub fn new(carousel: Carousel, options: NavigatorOptions) -> Self {
        let current = carousel.active_index();
        let max_index = carousel.len().saturating_sub(1);
        let controls = if carousel.is_empty() {
            Controls::hidden()
        } else {
            Controls::for_index(current, max_index)
        };

        Self {
            carousel,
            current,
            max_index,
            options,
            hooks: NavigatorHooks::default(),
            controls,
            exit_requested: false,
        }
    }

    pub fn with_hooks(mut self, hooks: NavigatorHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Validated jump. Out-of-range indices and rejected validations leave
    /// the current index untouched; either way the resulting index is
    /// returned.
    pub fn go_to(&mut self, index: usize) -> usize {
        if self.carousel.is_empty() || index > self.max_index {
            return self.current;
        }
        if !(self.hooks.validate_step)(index) {
            return self.current;
        }
        self.apply(index);
        self.current
    }

    /// Forward move: validates the step being left before going to
    /// `current + 1`. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if self.carousel.is_empty() || self.current >= self.max_index {
            return false;
        }
        if !(self.hooks.validate_step)(self.current) {
            return false;
        }
        let before = self.current;
        self.go_to(self.current + 1);
        self.current != before
    }

    /// Backward move, not gated on validation. No-op at index 0.
    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.apply(self.current - 1);
        true
    }

    /// Merges the set keys of `update` into the live configuration.
    pub fn configure(&mut self, update: OptionsUpdate) {
        if let Some(text) = update.previous_text {
            self.options.previous_text = text;
        }
        if let Some(text) = update.next_text {
            self.options.next_text = text;
        }
        if let Some(text) = update.finish_text {
            self.options.finish_text = text;
        }
        if let Some(hook) = update.validate_step {
            self.hooks.validate_step = hook;
        }
        if let Some(hook) = update.on_step_changed {
            self.hooks.on_step_changed = hook;
        }
        if let Some(hook) = update.on_finish {
            self.hooks.on_finish = hook;
        }
    }

    /// Runs the finish handler and requests exit. Only honored while the
    /// finish control is visible, i.e. on the last step.
    pub fn finish(&mut self) -> bool {
        if !self.controls.finish.is_visible() {
            return false;
        }
        (self.hooks.on_finish)();
        self.exit_requested = true;
        true
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    pub fn header_entries(&self) -> Vec<HeaderEntry> {
        self.carousel
            .panels()
            .iter()
            .enumerate()
            .map(|(index, panel)| HeaderEntry {
                index,
                title: panel.title.clone(),
                active: index == self.current,
            })
            .collect()
    }

    fn apply(&mut self, index: usize) {
        self.carousel.show(index);
        self.current = index;
        self.controls = Controls::for_index(self.current, self.max_index);
        (self.hooks.on_step_changed)(index);
    }
}

#[cfg(test)]
mod tests {
    use super::Navigator;
    use crate::core::carousel::Carousel;
    use crate::core::controls::Visibility;
    use crate::core::options::{NavigatorHooks, NavigatorOptions, OptionsUpdate};
    use crate::core::panel::Panel;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn navigator(count: usize) -> Navigator {
        let panels = (0..count).map(|i| Panel::new(format!("step {i}"))).collect();
        Navigator::new(Carousel::new(panels), NavigatorOptions::default())
    }

    #[test]
    fn go_to_moves_when_validation_passes() {
        let mut nav = navigator(3);
        assert_eq!(nav.go_to(2), 2);
        assert_eq!(nav.current_index(), 2);
        assert_eq!(nav.carousel().active_index(), 2);
    }

    #[test]
    fn go_to_blocked_by_validation() {
        let mut nav =
            navigator(3).with_hooks(NavigatorHooks::default().validate_step(|index| index != 2));
        assert_eq!(nav.go_to(2), 0);
        assert_eq!(nav.go_to(1), 1);
    }

    #[test]
    fn go_to_out_of_range_is_noop() {
        let mut nav = navigator(3);
        assert_eq!(nav.go_to(3), 0);
        assert_eq!(nav.go_to(99), 0);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn prev_at_first_step_is_noop() {
        let mut nav = navigator(3);
        assert!(!nav.prev());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn next_at_last_step_is_noop() {
        let mut nav = navigator(3);
        nav.go_to(2);
        assert!(!nav.next());
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn next_validates_the_step_being_left() {
        let mut nav =
            navigator(3).with_hooks(NavigatorHooks::default().validate_step(|index| index != 0));
        assert!(!nav.next());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn prev_bypasses_validation() {
        let mut nav = navigator(3);
        nav.go_to(2);
        nav.configure(OptionsUpdate::new().validate_step(|_| false));
        assert!(nav.prev());
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn exactly_one_header_entry_is_active() {
        let mut nav = navigator(4);
        for target in [1, 3, 0, 2] {
            nav.go_to(target);
            let entries = nav.header_entries();
            let active: Vec<usize> = entries
                .iter()
                .filter(|e| e.active)
                .map(|e| e.index)
                .collect();
            assert_eq!(active, vec![nav.current_index()]);
        }
    }

    #[test]
    fn three_steps_reach_finish() {
        let mut nav = navigator(3);
        assert!(nav.next());
        assert!(nav.next());
        assert_eq!(nav.current_index(), 2);
        let controls = nav.controls();
        assert_eq!(controls.previous, Visibility::Visible);
        assert_eq!(controls.next, Visibility::Hidden);
        assert_eq!(controls.finish, Visibility::Visible);
    }

    #[test]
    fn step_changed_fires_only_on_successful_moves() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut nav = navigator(3).with_hooks(
            NavigatorHooks::default().on_step_changed(move |index| sink.borrow_mut().push(index)),
        );

        nav.next();
        nav.go_to(99);
        nav.prev();
        nav.go_to(2);
        assert_eq!(*seen.borrow(), vec![1, 0, 2]);
    }

    #[test]
    fn configure_updates_single_keys_only() {
        let mut nav = navigator(3);
        nav.configure(OptionsUpdate::new().next_text("Continue"));
        assert_eq!(nav.options().next_text, "Continue");
        assert_eq!(nav.options().previous_text, "Previous");
        assert_eq!(nav.options().finish_text, "Finish");
    }

    #[test]
    fn configure_replaces_finish_handler() {
        let fired = Rc::new(RefCell::new(0));
        let first = Rc::clone(&fired);
        let second = Rc::clone(&fired);

        let mut nav = navigator(1)
            .with_hooks(NavigatorHooks::default().on_finish(move || *first.borrow_mut() += 1));
        nav.configure(OptionsUpdate::new().on_finish(move || *second.borrow_mut() += 10));

        assert!(nav.finish());
        assert_eq!(*fired.borrow(), 10);
    }

    #[test]
    fn finish_only_honored_on_last_step() {
        let fired = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&fired);
        let mut nav = navigator(3)
            .with_hooks(NavigatorHooks::default().on_finish(move || *sink.borrow_mut() += 1));

        assert!(!nav.finish());
        assert_eq!(*fired.borrow(), 0);
        assert!(!nav.should_exit());

        nav.go_to(2);
        assert!(nav.finish());
        assert_eq!(*fired.borrow(), 1);
        assert!(nav.should_exit());
    }

    #[test]
    fn empty_carousel_degrades_to_noops() {
        let mut nav = navigator(0);
        assert_eq!(nav.go_to(0), 0);
        assert!(!nav.next());
        assert!(!nav.prev());
        assert!(!nav.finish());
        assert!(nav.header_entries().is_empty());
    }

    #[test]
    fn initial_index_comes_from_the_carousel() {
        let panels = vec![Panel::new("a"), Panel::new("b"), Panel::new("c")];
        let carousel = Carousel::new(panels).with_active(1);
        let nav = Navigator::new(carousel, NavigatorOptions::default());
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.controls().previous, Visibility::Visible);
    }
}
