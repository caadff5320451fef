//! Integration layer
//!
//! Wires the pure core to the terminal:
//! - `Runtime` runs raw messages through translate, update and commands
//! - `AppRunner` owns the event loop and rendering
pub mod app_runner;
pub mod runtime;
