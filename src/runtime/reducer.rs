use crate::core::navigator::Navigator;
use crate::runtime::command::Command;
use crate::runtime::effect::Effect;

pub struct Reducer;

impl Reducer {
    pub fn reduce(navigator: &mut Navigator, command: Command) -> Vec<Effect> {
        match command {
            Command::Exit => {
                navigator.request_exit();
                vec![Effect::Exit]
            }
            Command::Next => render_if(navigator.next()),
            Command::Prev => render_if(navigator.prev()),
            Command::GoTo(index) => {
                let before = navigator.current_index();
                navigator.go_to(index);
                render_if(navigator.current_index() != before)
            }
            Command::Submit => {
                if navigator.controls().finish.is_visible() {
                    if navigator.finish() {
                        vec![Effect::Exit]
                    } else {
                        vec![]
                    }
                } else {
                    render_if(navigator.next())
                }
            }
            Command::Tick | Command::Noop => vec![],
        }
    }
}

fn render_if(changed: bool) -> Vec<Effect> {
    if changed {
        vec![Effect::RequestRender]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::Reducer;
    use crate::core::carousel::Carousel;
    use crate::core::navigator::Navigator;
    use crate::core::options::{NavigatorHooks, NavigatorOptions};
    use crate::core::panel::Panel;
    use crate::runtime::command::Command;
    use crate::runtime::effect::Effect;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn navigator(count: usize) -> Navigator {
        let panels = (0..count).map(|i| Panel::new(format!("step {i}"))).collect();
        Navigator::new(Carousel::new(panels), NavigatorOptions::default())
    }

    #[test]
    fn next_and_prev_request_renders_on_change() {
        let mut nav = navigator(3);
        assert_eq!(
            Reducer::reduce(&mut nav, Command::Next),
            vec![Effect::RequestRender]
        );
        assert_eq!(
            Reducer::reduce(&mut nav, Command::Prev),
            vec![Effect::RequestRender]
        );
        // At the first step again, prev has nothing to do.
        assert!(Reducer::reduce(&mut nav, Command::Prev).is_empty());
    }

    #[test]
    fn go_to_without_movement_is_silent() {
        let mut nav = navigator(3);
        assert!(Reducer::reduce(&mut nav, Command::GoTo(7)).is_empty());
        assert_eq!(
            Reducer::reduce(&mut nav, Command::GoTo(2)),
            vec![Effect::RequestRender]
        );
    }

    #[test]
    fn submit_advances_before_the_last_step() {
        let mut nav = navigator(3);
        assert_eq!(
            Reducer::reduce(&mut nav, Command::Submit),
            vec![Effect::RequestRender]
        );
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn submit_on_the_last_step_finishes() {
        let fired = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&fired);
        let mut nav = navigator(3)
            .with_hooks(NavigatorHooks::default().on_finish(move || *sink.borrow_mut() = true));
        nav.go_to(2);

        assert_eq!(
            Reducer::reduce(&mut nav, Command::Submit),
            vec![Effect::Exit]
        );
        assert!(*fired.borrow());
        assert!(nav.should_exit());
    }

    #[test]
    fn exit_requests_exit() {
        let mut nav = navigator(3);
        assert_eq!(Reducer::reduce(&mut nav, Command::Exit), vec![Effect::Exit]);
        assert!(nav.should_exit());
    }

    #[test]
    fn ticks_are_ignored() {
        let mut nav = navigator(3);
        assert!(Reducer::reduce(&mut nav, Command::Tick).is_empty());
        assert!(Reducer::reduce(&mut nav, Command::Noop).is_empty());
    }
}
