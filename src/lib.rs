//! # revealdeck - slides for the terminal
//!
//! A terminal slide presenter with sequential navigation, progress dots and
//! a per-slide reveal animation: text is typed out character by character and
//! boxed elements bubble up one after another.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`, `model`): application state and the navigator,
//!   reveal animator and input subscriptions it is made of
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects performed by the runner
//! - **View** (`presentation`): stateless rendering based on current state
//!
//! Time is passed into the model as a `Duration` since the session started,
//! so reveal timing is deterministic and testable without a clock.
//!
//! ## Example Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use revealdeck::{
//!     core::{msg::{navigation::NavigationMsg, Msg}, state::AppState, update::{update, UpdateContext}},
//!     domain::deck::{Deck, Element, ElementKind, Slide},
//!     infrastructure::config::Config,
//! };
//!
//! let deck = Deck::new(vec![
//!     Slide::new(vec![Element::text(ElementKind::Heading, "One")]),
//!     Slide::new(vec![Element::text(ElementKind::Heading, "Two")]),
//! ]);
//! let mut state = AppState::new_with_config(deck, Config::default());
//! state.presentation.start(Duration::ZERO);
//!
//! let ctx = UpdateContext::at(Duration::from_millis(10));
//! let (state, _commands) = update(Msg::Navigation(NavigationMsg::Next), state, &ctx);
//! assert_eq!(state.presentation.navigator().current(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Deck structure, reveal classification, text wrapping
//! - [`model`] - Navigator, reveal animator, input subscriptions
//! - [`core`] - Messages, state, update, commands
//! - [`infrastructure`] - Terminal, CLI, configuration, deck loading
//! - [`integration`] - Runtime and event loop
//! - [`presentation`] - Components, widgets, styles and keybindings

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
