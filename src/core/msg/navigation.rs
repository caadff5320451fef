use serde::{Deserialize, Serialize};

use crate::model::navigator::Message as NavigatorMessage;

/// Slide navigation requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMsg {
    GoTo(usize),
    Previous,
    Next,
    First,
    Last,
    /// Horizontal drag in pixels
    Swipe { start_x: i32, end_x: i32 },
}

impl From<NavigationMsg> for NavigatorMessage {
    fn from(msg: NavigationMsg) -> Self {
        match msg {
            NavigationMsg::GoTo(index) => NavigatorMessage::SlideRequested(index),
            NavigationMsg::Previous => NavigatorMessage::PreviousRequested,
            NavigationMsg::Next => NavigatorMessage::NextRequested,
            NavigationMsg::First => NavigatorMessage::FirstRequested,
            NavigationMsg::Last => NavigatorMessage::LastRequested,
            NavigationMsg::Swipe { start_x, end_x } => NavigatorMessage::Swiped { start_x, end_x },
        }
    }
}
