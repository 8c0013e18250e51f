//! Interactive menu-level selection.
//!
//! This module provides the terminal list prompt used at every menu level:
//! a scrollable, highlightable list of entries with type-to-filter search.
//!
//! # User Interface
//!
//! - Arrow keys or vim-style (j/k) navigation with wrap-around
//! - Enter to select the highlighted entry
//! - `/` to start filtering, Escape to stop
//! - Typing to filter entries (fuzzy match on labels, or by number)
//! - `q`, Escape or Ctrl-C to cancel out of the current level
//!
//! Branch entries are shown with a trailing `/` and their own color so
//! submenus stand apart from runnable commands.

// Export public items from submodules
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use ui::{prompt_for_choice, TerminalPrompt};
