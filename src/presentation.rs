//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering from `AppState`
//! - Reusable widgets
//! - Screen layout shared with pointer hit testing
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod layout;
pub mod widgets;
