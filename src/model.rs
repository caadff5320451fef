//! Self-contained presentation models
//!
//! Each model owns its state and changes only through its `update` function.

pub mod navigator;
pub mod reveal;
pub mod subscriptions;
