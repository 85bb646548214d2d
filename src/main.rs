use std::io;
use stepway::core::navigator::Navigator;
use stepway::definition::WizardDefinition;
use stepway::runtime::runner::Runtime;
use stepway::terminal::Terminal;

const DEMO_WIZARD: &str = r#"
labels:
  finish: Done
panels:
  - title: Welcome
    active: true
    body:
      - This short tour walks through the demo wizard.
      - Use Left/Right (or p/n) to move between steps and digits to jump.
  - title: Details
    body:
      - Each panel carries its own body text.
      - Forward moves run the validation hook before leaving a step.
  - title: Confirm
    body:
      - Press Enter on this final step to finish.
"#;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> io::Result<()> {
    let definition = WizardDefinition::from_yaml(DEMO_WIZARD)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let (carousel, options) = definition.into_navigator_parts();
    let navigator = Navigator::new(carousel, options);

    let terminal = Terminal::new()?;
    Runtime::new(navigator, terminal).run()
}
