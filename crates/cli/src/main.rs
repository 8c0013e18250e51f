use std::process::ExitCode;

use clap::Parser;
use log::debug;

use qmenu_core::entries::Entry;
use qmenu_core::error::{Error, Result};
use qmenu_core::execution::{process_exit_code, ShellExecutor};
use qmenu_core::{config, document};

use crate::navigator::{run_menu, Outcome};
use crate::selection::TerminalPrompt;

mod cli_args;
mod navigator;
mod selection;

fn execute() -> Result<ExitCode> {
    let args = cli_args::Args::parse();

    let document_path = config::get_document_path(&args.document_path);
    debug!("Outline path: `{document_path}`");

    let outline = document::load_outline(&document_path)?;

    if args.list {
        print_outline(&outline.root);
        return Ok(ExitCode::SUCCESS);
    }

    let shell = config::get_shell();
    let working_directory = config::document_directory(&document_path);
    let mut runner = ShellExecutor::new(shell, working_directory);

    if let Some(number) = args.command_number {
        return run_numbered_command(&outline.root, number, &runner);
    }

    let mut prompt = TerminalPrompt;
    let mut breadcrumb = vec![outline.root.label.clone()];

    match run_menu(&outline.root, &mut breadcrumb, &mut prompt, &mut runner)? {
        Outcome::Cancelled => Ok(ExitCode::SUCCESS),
        Outcome::Exit(code) => Ok(ExitCode::from(process_exit_code(code))),
    }
}

/// Runs the n-th leaf (1-based, `--list` numbering) without opening the menu.
fn run_numbered_command(root: &Entry, number: usize, runner: &ShellExecutor) -> Result<ExitCode> {
    let leaves = root.leaves();

    let leaf = number
        .checked_sub(1)
        .and_then(|index| leaves.get(index))
        .ok_or(Error::CommandNumberOutOfRange {
            number,
            available: leaves.len(),
        })?;

    let Some(command_line) = &leaf.command else {
        // leaves() only yields entries with commands
        return Ok(ExitCode::FAILURE);
    };

    println!("Running:\n{command_line}");
    let code = runner.run(command_line)?;

    Ok(ExitCode::from(process_exit_code(code)))
}

/// Prints the outline tree, numbering leaves in the order `-n` selects them.
fn print_outline(root: &Entry) {
    fn print_level(entries: &[Entry], depth: usize, next_number: &mut usize) {
        let padding = "    ".repeat(depth + 1);
        for entry in entries {
            if entry.is_leaf() {
                println!("{padding}{next_number}. {}", entry.label);
                *next_number += 1;
            } else {
                println!("{padding}{}:", entry.label);
                print_level(&entry.children, depth + 1, next_number);
            }
        }
    }

    println!();
    let mut next_number = 1;
    print_level(&root.children, 0, &mut next_number);
    println!();
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
