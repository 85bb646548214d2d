pub mod core;
pub mod definition;
pub mod runtime;
pub mod terminal;
pub mod ui;

pub use crate::core::carousel::Carousel;
pub use crate::core::controls::{Controls, Visibility};
pub use crate::core::navigator::{HeaderEntry, Navigator};
pub use crate::core::options::{NavigatorHooks, NavigatorOptions, OptionsUpdate};
pub use crate::core::panel::Panel;
pub use crate::definition::{DefinitionError, WizardDefinition};
pub use crate::runtime::command::Command;
pub use crate::runtime::key_bindings::{KeyBinding, KeyBindings};
pub use crate::runtime::runner::Runtime;
pub use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, Terminal};
pub use crate::ui::renderer::Renderer;
pub use crate::ui::theme::Theme;
