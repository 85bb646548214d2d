/// Returns whether the step at `index` may be entered (forward moves also
/// run it for the step being left).
pub type ValidateStep = Box<dyn Fn(usize) -> bool>;

/// Called with the new index after every successful step change.
pub type StepChanged = Box<dyn FnMut(usize)>;

pub type FinishHandler = Box<dyn FnMut()>;

/// Rendered label text for the three controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorOptions {
    pub previous_text: String,
    pub next_text: String,
    pub finish_text: String,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            previous_text: "Previous".to_string(),
            next_text: "Next".to_string(),
            finish_text: "Finish".to_string(),
        }
    }
}

/// All hooks are defaulted, so callers only replace the ones they care
/// about and the navigator never has to check for a missing callback.
pub struct NavigatorHooks {
    pub validate_step: ValidateStep,
    pub on_step_changed: StepChanged,
    pub on_finish: FinishHandler,
}

impl Default for NavigatorHooks {
    fn default() -> Self {
        Self {
            validate_step: Box::new(|_| true),
            on_step_changed: Box::new(|_| {}),
            on_finish: Box::new(|| {}),
        }
    }
}

impl NavigatorHooks {
    pub fn validate_step(mut self, hook: impl Fn(usize) -> bool + 'static) -> Self {
        self.validate_step = Box::new(hook);
        self
    }

    pub fn on_step_changed(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.on_step_changed = Box::new(hook);
        self
    }

    pub fn on_finish(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_finish = Box::new(hook);
        self
    }
}

/// Partial reconfiguration merged into the live options by
/// `Navigator::configure`. Only the keys that are set change; callbacks are
/// replaced by reference, never stacked.
#[derive(Default)]
pub struct OptionsUpdate {
    pub previous_text: Option<String>,
    pub next_text: Option<String>,
    pub finish_text: Option<String>,
    pub validate_step: Option<ValidateStep>,
    pub on_step_changed: Option<StepChanged>,
    pub on_finish: Option<FinishHandler>,
}

impl OptionsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_text(mut self, text: impl Into<String>) -> Self {
        self.previous_text = Some(text.into());
        self
    }

    pub fn next_text(mut self, text: impl Into<String>) -> Self {
        self.next_text = Some(text.into());
        self
    }

    pub fn finish_text(mut self, text: impl Into<String>) -> Self {
        self.finish_text = Some(text.into());
        self
    }

    pub fn validate_step(mut self, hook: impl Fn(usize) -> bool + 'static) -> Self {
        self.validate_step = Some(Box::new(hook));
        self
    }

    pub fn on_step_changed(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.on_step_changed = Some(Box::new(hook));
        self
    }

    pub fn on_finish(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_finish = Some(Box::new(hook));
        self
    }
}
