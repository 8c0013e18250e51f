//! Command-line argument parsing for the `qm` binary.

use clap::Parser;

/// Command-line arguments for the qmenu launcher.
///
/// With no arguments, `qm` reads `.qmenu` from the working directory and
/// opens the interactive menu.
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the outline document describing the menu.
    ///
    /// If not provided, defaults to `.qmenu` in the working directory.
    #[arg(long, short = 'f')]
    pub document_path: Option<String>,

    /// Print the outline with command numbers and exit without running
    /// anything.
    #[arg(long, short = 'l', action)]
    pub list: bool,

    /// Run the n-th command directly (1-based, as numbered by --list),
    /// bypassing the menu.
    #[arg(long, short = 'n')]
    pub command_number: Option<usize>,
}
