pub mod input_event;
pub mod terminal;
pub mod terminal_event;

pub use input_event::{KeyCode, KeyEvent, KeyModifiers};
pub use terminal::Terminal;
pub use terminal_event::{TerminalEvent, TerminalSize};
