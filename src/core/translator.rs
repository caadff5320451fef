use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

use crate::{
    core::{
        msg::{navigation::NavigationMsg, pointer::PointerMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    model::subscriptions::InputSource,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => {
            if !state.presentation.is_subscribed(InputSource::Pointer) {
                return vec![];
            }
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => vec![Msg::Pointer(PointerMsg::Pressed {
                    column: mouse.column,
                    row: mouse.row,
                })],
                MouseEventKind::Up(MouseButton::Left) => vec![Msg::Pointer(PointerMsg::Released {
                    column: mouse.column,
                    row: mouse.row,
                })],
                _ => vec![],
            }
        }

        RawMsg::TimerDue => vec![Msg::RevealTimersDue],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    let normalized = KeyEvent::new(key.code, key.modifiers);
    match state.config.config.keybindings.get(&vec![normalized]) {
        Some(Action::Quit) => vec![Msg::System(SystemMsg::Quit)],
        Some(Action::Suspend) => vec![Msg::System(SystemMsg::Suspend)],
        Some(action) if state.presentation.is_subscribed(InputSource::Keyboard) => {
            translate_action_to_msg(*action)
        }
        _ => vec![], // No matching keybinding found, or keyboard not subscribed
    }
}

fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    match action {
        Action::PrevSlide => vec![Msg::Navigation(NavigationMsg::Previous)],
        Action::NextSlide => vec![Msg::Navigation(NavigationMsg::Next)],
        Action::FirstSlide => vec![Msg::Navigation(NavigationMsg::First)],
        Action::LastSlide => vec![Msg::Navigation(NavigationMsg::Last)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyEventState, MouseEvent};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::{
        domain::deck::{Deck, Slide},
        infrastructure::config::Config,
    };

    #[fixture]
    fn state() -> AppState {
        let deck = Deck::new(vec![Slide::default(), Slide::default()]);
        let mut state = AppState::new_with_config(deck, Config::embedded().unwrap());
        state.presentation.start(Duration::ZERO);
        state
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[rstest]
    #[case(KeyCode::Left, NavigationMsg::Previous)]
    #[case(KeyCode::Right, NavigationMsg::Next)]
    #[case(KeyCode::Char(' '), NavigationMsg::Next)]
    #[case(KeyCode::Home, NavigationMsg::First)]
    #[case(KeyCode::End, NavigationMsg::Last)]
    fn test_arrow_keys_navigate(
        state: AppState,
        #[case] code: KeyCode,
        #[case] expected: NavigationMsg,
    ) {
        assert_eq!(
            translate_raw_to_domain(key(code), &state),
            vec![Msg::Navigation(expected)]
        );
    }

    #[rstest]
    fn test_quit_keys(state: AppState) {
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(
                RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                &state
            ),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[rstest]
    fn test_key_release_is_ignored(state: AppState) {
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate_raw_to_domain(RawMsg::Key(release), &state).is_empty());
    }

    #[rstest]
    fn test_unbound_key_is_ignored(state: AppState) {
        assert!(translate_raw_to_domain(key(KeyCode::Char('x')), &state).is_empty());
    }

    #[rstest]
    fn test_input_ignored_after_teardown(mut state: AppState) {
        state.presentation.teardown();
        assert!(translate_raw_to_domain(key(KeyCode::Right), &state).is_empty());
        assert!(
            translate_raw_to_domain(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1), &state)
                .is_empty()
        );
        // Quitting still works
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[rstest]
    fn test_mouse_press_and_release(state: AppState) {
        assert_eq!(
            translate_raw_to_domain(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4), &state),
            vec![Msg::Pointer(PointerMsg::Pressed { column: 3, row: 4 })]
        );
        assert_eq!(
            translate_raw_to_domain(mouse(MouseEventKind::Up(MouseButton::Left), 9, 4), &state),
            vec![Msg::Pointer(PointerMsg::Released { column: 9, row: 4 })]
        );
        assert!(
            translate_raw_to_domain(mouse(MouseEventKind::Moved, 9, 4), &state).is_empty()
        );
    }

    #[rstest]
    fn test_system_events(state: AppState) {
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(80, 24), &state),
            vec![Msg::System(SystemMsg::Resize(80, 24))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::TimerDue, &state),
            vec![Msg::RevealTimersDue]
        );
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
    }
}
