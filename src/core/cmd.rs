use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
    Suspend,
}

/// Elm-like command definitions
/// Represents side effects the runner performs on behalf of the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Tui(TuiCommand),
    /// Request a render; coalesced by the runner
    RequestRender,

    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands: Vec<Cmd> = commands
            .into_iter()
            .filter(|cmd| *cmd != Cmd::None)
            .collect();
        match commands.len() {
            0 => Cmd::None,
            1 => commands.remove(0),
            _ => Cmd::Batch(commands),
        }
    }

    /// Flattens nested batches into the order they should run in
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            Cmd::None => vec![],
            cmd => vec![cmd],
        }
    }
}
