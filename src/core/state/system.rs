use ratatui::layout::Rect;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// Last known terminal area, used for pointer hit testing
    pub viewport: Rect,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![Cmd::Tui(TuiCommand::Suspend)]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![Cmd::RequestRender]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![
                    Cmd::LogError { message: error },
                    Cmd::RequestRender,
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);
        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_system_state_suspend_resume() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        assert_eq!(cmds, vec![Cmd::Tui(TuiCommand::Suspend)]);

        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }

    #[test]
    fn test_system_state_resize_records_viewport() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Resize(120, 40));
        assert_eq!(system.viewport, Rect::new(0, 0, 120, 40));
        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 120,
                height: 40
            })]
        );
    }

    #[test]
    fn test_system_state_error_message() {
        let mut system = SystemState::default();
        system.update(SystemMsg::ShowError("boom".to_string()));
        assert_eq!(system.status_message.as_deref(), Some("Error: boom"));

        system.update(SystemMsg::ClearStatusMessage);
        assert_eq!(system.status_message, None);
    }
}
