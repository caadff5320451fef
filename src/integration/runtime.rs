use std::collections::VecDeque;
use std::time::Duration;

use color_eyre::eyre::Result;

use crate::{
    core::{
        cmd_executor::CmdExecutor,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update, UpdateContext},
    },
    infrastructure::tui::TuiLike,
};

/// Owns the application state and runs queued raw messages through
/// translate, update and command execution.
pub struct Runtime {
    state: AppState,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            raw_msg_queue: VecDeque::new(),
            cmd_executor: CmdExecutor::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_raw_msg(&mut self, raw: RawMsg) {
        if !raw.is_frequent() {
            log::debug!("{raw:?}");
        }
        self.raw_msg_queue.push_back(raw);
    }

    /// Registers input and starts the first slide's reveal.
    pub fn start(&mut self, now: Duration) {
        for event in self.state.presentation.start(now) {
            log::trace!("{event:?}");
        }
    }

    /// Tears the presentation down unless quitting already did.
    pub fn shutdown(&mut self) {
        if self.state.presentation.is_live() {
            self.state.presentation.teardown();
        }
    }

    /// Processes every queued raw message at time `now`.
    /// Returns whether the screen needs to be redrawn.
    pub fn run_update_cycle(&mut self, now: Duration, tui: &mut (dyn TuiLike + Send)) -> Result<bool> {
        let ctx = UpdateContext::at(now);
        let mut render = false;

        while let Some(raw) = self.raw_msg_queue.pop_front() {
            for msg in translate_raw_to_domain(raw, &self.state) {
                if !msg.is_frequent() {
                    log::debug!("{msg:?}");
                }
                let (state, cmds) = update(msg, std::mem::take(&mut self.state), &ctx);
                self.state = state;

                match self.cmd_executor.execute_commands(cmds, tui) {
                    Ok(execution) => {
                        render |= execution.render;
                        self.raw_msg_queue.extend(execution.follow_up);
                    }
                    Err(e) => {
                        log::error!("command failed: {e}");
                        self.raw_msg_queue
                            .push_back(RawMsg::Error(format!("command failed: {e}")));
                    }
                }
            }
        }

        Ok(render)
    }
}
