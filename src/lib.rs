//! termtris: a falling-block puzzle game for the terminal.
//!
//! `core` holds the game rules and state machine, `term` the framebuffer
//! renderer, `input` the key mapping. The binary in `main.rs` wires them into
//! a fixed-interval real-time loop.

pub mod core;
pub mod diag;
pub mod input;
pub mod term;
pub mod types;
