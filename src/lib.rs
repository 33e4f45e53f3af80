//! Botanic Sweeper - a minesweeper-style 3D block puzzle
//!
//! Library crate exposing the board types and Bevy systems; the binary in
//! `main.rs` adds the window and the command-line front end.

pub mod sweeper3d;
