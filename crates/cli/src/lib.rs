//! qmenu CLI Library
//!
//! This crate provides the command-line interface for qmenu, a terminal
//! command launcher driven by an outline-style dotfile. It handles argument
//! parsing, the interactive menu session, and wiring selected commands to
//! the shell executor.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`navigator`]: The recursive menu state machine and its collaborator
//!   traits (selection prompt, command runner)
//! - [`selection`]: The crossterm-based selection prompt
//!
//! # Examples
//!
//! The CLI binary (`qm`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - opens the menu described by ./.qmenu
//! qm
//!
//! # A different outline document
//! qm -f ~/project/.qmenu
//!
//! # Print the outline with command numbers
//! qm --list
//!
//! # Run command number 3 directly, skipping the menu
//! qm -n 3
//! ```

pub mod cli_args;
pub mod navigator;
pub mod selection;
