//! Harvest: a top-down survival game where vegetables come at you in waves.
//!
//! The library holds everything; `main.rs` only calls [`game::run`].
//! Integration tests in `tests/` build headless apps through
//! [`game::configure_headless`].

pub mod common;
pub mod game;
pub mod plugins;
