//! qmenu Core Library
//!
//! This crate provides the core functionality for qmenu, a terminal command
//! launcher that reads an outline-style dotfile describing a hierarchy of
//! labeled shell commands and executes the command the operator selects.
//!
//! # Key Features
//!
//! - **Outline Parsing**: Turn indentation-structured text into a tree of
//!   menu entries, with a configurable indent unit and tolerant recovery
//!   from malformed structure
//! - **Document Loading**: Read outline documents with contextual errors
//! - **Command Execution**: Run selected commands through the operator's
//!   shell with inherited standard streams and exit-code propagation
//! - **Configuration**: Document path and shell resolution
//!
//! # Examples
//!
//! Loading an outline document:
//!
//! ```no_run
//! use qmenu_core::document::load_outline;
//!
//! let outline = load_outline(".qmenu")?;
//! for entry in &outline.root.children {
//!     println!("{entry}");
//! }
//! # Ok::<(), qmenu_core::error::Error>(())
//! ```

pub mod config;
pub mod document;
pub mod entries;
pub mod error;
pub mod execution;
pub mod outline;
