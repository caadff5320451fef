use serde::{Deserialize, Serialize};

pub mod navigation;
pub mod pointer;
pub mod system;

use navigation::NavigationMsg;
use pointer::PointerMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Navigation(NavigationMsg),
    Pointer(PointerMsg),
    /// The reveal animator's next deadline has passed
    RevealTimersDue,
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::RevealTimersDue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use color_eyre::Result;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::RevealTimersDue.is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Navigation(NavigationMsg::Next).is_frequent());
    }

    #[test]
    fn test_msg_serialization() -> Result<()> {
        let msg = Msg::Navigation(NavigationMsg::GoTo(3));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
