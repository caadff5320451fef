use serde::{Deserialize, Serialize};

/// Primary-button pointer input, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerMsg {
    Pressed { column: u16, row: u16 },
    Released { column: u16, row: u16 },
}
