//! Reusable widgets
//!
//! Each widget borrows the model it draws and the configured styles.

pub mod header;
pub mod nav_bar;
pub mod progress_dots;
pub mod slide;
pub mod status_bar;
