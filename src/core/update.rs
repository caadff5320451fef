use std::time::Duration;

use crate::{
    core::{
        cmd::Cmd,
        msg::{navigation::NavigationMsg, pointer::PointerMsg, system::SystemMsg, Msg},
        state::AppState,
    },
    model::{reveal::RevealEvent, subscriptions::InputSource},
    presentation::layout::{hit_test, HitTarget},
};

/// Inputs to the update function that do not come from the message itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateContext {
    /// Time since the session started
    pub now: Duration,
}

impl UpdateContext {
    pub fn at(now: Duration) -> Self {
        Self { now }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState, ctx: &UpdateContext) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(SystemMsg::Quit) => {
            state.presentation.teardown();
            let commands = state.system.update(SystemMsg::Quit);
            (state, commands)
        }

        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Navigation(nav_msg) => {
            let commands = navigate(&mut state, nav_msg, ctx);
            (state, commands)
        }

        Msg::Pointer(PointerMsg::Pressed { column, .. }) => {
            state.pointer.press(column);
            (state, vec![])
        }

        Msg::Pointer(PointerMsg::Released { column, row }) => {
            let commands = release_pointer(&mut state, column, row, ctx);
            (state, commands)
        }

        Msg::RevealTimersDue => {
            let events = state.presentation.advance(ctx.now);
            let commands = render_if_changed(&events);
            (state, commands)
        }
    }
}

fn navigate(state: &mut AppState, msg: NavigationMsg, ctx: &UpdateContext) -> Vec<Cmd> {
    let events = state.presentation.go_to(msg.into(), ctx.now);
    render_if_changed(&events)
}

/// A release ends either a swipe or, when the drag was too short, a click.
fn release_pointer(state: &mut AppState, column: u16, row: u16, ctx: &UpdateContext) -> Vec<Cmd> {
    let Some(start_column) = state.pointer.release() else {
        return vec![];
    };

    let cell_width = state.config.config.navigation.cell_width_px.max(1);
    let start_x = i32::from(start_column).saturating_mul(cell_width);
    let end_x = i32::from(column).saturating_mul(cell_width);
    if state.presentation.navigator().is_swipe(start_x, end_x) {
        return navigate(state, NavigationMsg::Swipe { start_x, end_x }, ctx);
    }

    let navigator = state.presentation.navigator();
    let (total, current) = (navigator.total(), navigator.current());
    let msg = match hit_test(state.system.viewport, total, current, column, row) {
        Some(HitTarget::Prev) if state.presentation.is_subscribed(InputSource::NavigationControls) => {
            NavigationMsg::Previous
        }
        Some(HitTarget::Next) if state.presentation.is_subscribed(InputSource::NavigationControls) => {
            NavigationMsg::Next
        }
        Some(HitTarget::Dot(index)) if state.presentation.is_subscribed(InputSource::ProgressDots) => {
            NavigationMsg::GoTo(index)
        }
        _ => return vec![],
    };
    navigate(state, msg, ctx)
}

fn render_if_changed(events: &[RevealEvent]) -> Vec<Cmd> {
    for event in events {
        log::trace!("{event:?}");
    }
    if events.is_empty() {
        vec![]
    } else {
        vec![Cmd::RequestRender]
    }
}
