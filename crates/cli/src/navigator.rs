//! The recursive menu navigator.
//!
//! Walks the entry tree one level at a time: a branch selection descends a
//! level, a leaf selection hands its command to the runner, and the entry's
//! `exit_after_run` flag decides whether the whole session ends or the
//! current level is presented again. Cancellation bubbles exactly one level.

use itertools::Itertools;
use log::debug;

use qmenu_core::entries::Entry;
use qmenu_core::error::Result;
use qmenu_core::execution::ShellExecutor;

/// One selectable row at a menu level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub is_branch: bool,
}

/// What the operator did at a selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Selected(usize),
    Cancelled,
}

/// How a menu level finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operator cancelled at this level; the caller resumes its own
    /// prompt (at the root this ends the session normally).
    Cancelled,
    /// A command with `exit_after_run` completed; unwinds every open level
    /// and becomes the process exit code.
    Exit(i32),
}

/// Presents an ordered list of options and blocks until the operator picks
/// one or cancels.
pub trait OptionPrompt {
    /// # Errors
    ///
    /// Returns an error if the underlying terminal interaction fails.
    fn choose(&mut self, title: &str, options: &[MenuOption]) -> Result<Choice>;
}

/// Executes one command line synchronously and reports its exit code.
pub trait CommandRunner {
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or waited on.
    fn run(&mut self, command_line: &str) -> Result<i32>;
}

impl CommandRunner for ShellExecutor {
    fn run(&mut self, command_line: &str) -> Result<i32> {
        ShellExecutor::run(self, command_line)
    }
}

/// Runs the interactive loop for one menu level, recursing into branches.
///
/// `breadcrumb` is the path of branch labels from the root to this level;
/// it is display context only and is restored on every return.
///
/// # Errors
///
/// Returns an error only if a collaborator (prompt or runner) fails in a
/// way the session cannot continue from.
pub fn run_menu<P, R>(
    entry: &Entry,
    breadcrumb: &mut Vec<String>,
    prompt: &mut P,
    runner: &mut R,
) -> Result<Outcome>
where
    P: OptionPrompt,
    R: CommandRunner,
{
    loop {
        let options: Vec<MenuOption> = entry
            .children
            .iter()
            .map(|child| MenuOption {
                label: child.label.clone(),
                is_branch: child.is_branch(),
            })
            .collect();
        let title = breadcrumb.iter().join(" > ");

        match prompt.choose(&title, &options)? {
            Choice::Cancelled => return Ok(Outcome::Cancelled),
            Choice::Selected(index) => {
                let Some(child) = entry.children.get(index) else {
                    debug!("Prompt returned out-of-range index {index}");
                    continue;
                };

                if child.is_branch() {
                    breadcrumb.push(child.label.clone());
                    let outcome = run_menu(child, breadcrumb, prompt, runner)?;
                    breadcrumb.pop();

                    if let Outcome::Exit(code) = outcome {
                        return Ok(Outcome::Exit(code));
                    }
                    // Child level cancelled: present this level again.
                } else if let Some(command_line) = &child.command {
                    let code = report_run(runner, command_line);
                    if child.exit_after_run {
                        return Ok(Outcome::Exit(code));
                    }
                }
            }
        }
    }
}

/// Runs one command and reports its result to the operator.
///
/// A failing command never ends the session by itself; a spawn failure
/// degrades to code -1 so `exit_after_run` semantics still apply.
fn report_run<R: CommandRunner>(runner: &mut R, command_line: &str) -> i32 {
    println!("Running:\n{command_line}");

    match runner.run(command_line) {
        Ok(code) => {
            if code != 0 {
                eprintln!("Command exited with status {code}");
            }
            code
        }
        Err(e) => {
            eprintln!("{e}");
            -1
        }
    }
}
