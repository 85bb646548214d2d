use crate::core::navigator::Navigator;
use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(120);

/// Owns the pieces and drives the synchronous event loop: poll, resolve a
/// key to a command, reduce, render when asked.
pub struct Runtime {
    navigator: Navigator,
    terminal: Terminal,
    key_bindings: KeyBindings,
    renderer: Renderer,
}

impl Runtime {
    pub fn new(navigator: Navigator, terminal: Terminal) -> Self {
        Self {
            navigator,
            terminal,
            key_bindings: KeyBindings::new(),
            renderer: Renderer::default(),
        }
    }

    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;
        let run_result = self.event_loop();
        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while !self.navigator.should_exit() {
            match self.terminal.poll_event(POLL_TIMEOUT)? {
                TerminalEvent::Resize(size) => {
                    self.terminal.set_size(size);
                    self.render()?;
                }
                TerminalEvent::Key(key) => {
                    let command = self.key_bindings.resolve(key).unwrap_or(Command::Noop);
                    self.process_command(command)?;
                }
                TerminalEvent::Tick => {}
            }
        }

        Ok(())
    }

    fn process_command(&mut self, command: Command) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.navigator, command);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;
        for effect in effects {
            match effect {
                Effect::RequestRender => render_requested = true,
                // Exit is observed through the navigator's flag; the loop
                // condition picks it up on the next pass.
                Effect::Exit => {}
            }
        }

        if render_requested {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.renderer.render(&self.navigator, self.terminal.size());
        self.terminal.render(&frame)
    }
}
