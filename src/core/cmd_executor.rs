use color_eyre::eyre::Result;
use ratatui::layout::Rect;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    infrastructure::tui::TuiLike,
};

/// What the runner still has to do after a batch of commands ran
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Execution {
    pub render: bool,
    /// Messages fed back into the update loop, in order
    pub follow_up: Vec<RawMsg>,
}

/// Executes the side effects requested by `update` against a terminal
#[derive(Debug, Default)]
pub struct CmdExecutor;

impl CmdExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn execute_commands(
        &self,
        cmds: Vec<Cmd>,
        tui: &mut (dyn TuiLike + Send),
    ) -> Result<Execution> {
        let mut execution = Execution::default();
        for cmd in cmds.into_iter().flat_map(Cmd::flatten) {
            self.execute_command(cmd, tui, &mut execution)?;
        }
        Ok(execution)
    }

    fn execute_command(
        &self,
        cmd: Cmd,
        tui: &mut (dyn TuiLike + Send),
        execution: &mut Execution,
    ) -> Result<()> {
        match cmd {
            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                tui.resize(Rect::new(0, 0, width, height))?;
                execution.render = true;
            }
            Cmd::Tui(TuiCommand::Suspend) => {
                tui.suspend()?;
                // Execution continues here once the shell brings us back
                tui.resume()?;
                execution.follow_up.push(RawMsg::Resume);
            }
            Cmd::RequestRender => execution.render = true,
            Cmd::LogError { message } => log::error!("{message}"),
            Cmd::LogInfo { message } => log::info!("{message}"),
            Cmd::Batch(_) | Cmd::None => {}
        }
        Ok(())
    }
}
