use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

/// Raw messages from external sources (input, timers, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input
    Key(KeyEvent),
    Mouse(MouseEvent),

    // The runner's reveal deadline elapsed
    TimerDue,

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render | RawMsg::TimerDue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(RawMsg::TimerDue.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)).is_frequent());
    }

    #[test]
    fn test_raw_msg_serialization() {
        let msg = RawMsg::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: RawMsg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
