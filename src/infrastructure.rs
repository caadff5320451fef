//! Infrastructure layer
//!
//! This module handles external integrations:
//! - TUI foundation (real terminal and in-memory test terminal)
//! - CLI argument processing
//! - Configuration and deck loading

pub mod cli;
pub mod config;
pub mod deck_loader;
pub mod tui;
