/// Tracks an in-progress primary-button drag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    pressed_at: Option<u16>,
}

impl PointerState {
    pub fn press(&mut self, column: u16) {
        self.pressed_at = Some(column);
    }

    /// Ends the drag, returning the column it started at
    pub fn release(&mut self) -> Option<u16> {
        self.pressed_at.take()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }
}
