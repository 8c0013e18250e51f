use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Runs command lines through a shell with inherited standard streams.
///
/// The executor blocks until the spawned process has fully terminated; there
/// is no timeout and no in-flight cancellation.
pub struct ShellExecutor {
    shell: String,
    working_directory: Option<PathBuf>,
}

impl ShellExecutor {
    pub fn new(shell: String, working_directory: Option<PathBuf>) -> Self {
        Self {
            shell,
            working_directory,
        }
    }

    /// Executes `command_line` via `<shell> -c` and returns its exit code.
    ///
    /// Signal termination maps to the negated signal number.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell process cannot be spawned or waited on.
    pub fn run(&self, command_line: &str) -> Result<i32> {
        let mut command = Command::new(&self.shell);
        command
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(working_directory) = &self.working_directory {
            command.current_dir(working_directory);
        }

        info!("Executing `{command_line}` with `{}`", self.shell);

        let status = command.spawn().map_err(Error::Spawn)?.wait().map_err(Error::Spawn)?;

        Ok(exit_code(&status))
    }
}

fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}

/// Maps an internal exit code to the code this process should exit with.
///
/// Negative codes (signal deaths) follow the shell convention of
/// `128 + signal`; anything outside `u8` range degrades to a plain failure.
#[must_use]
pub fn process_exit_code(code: i32) -> u8 {
    if code < 0 {
        let signal = (-code).min(127) as u8;
        return 128 + signal;
    }

    u8::try_from(code).unwrap_or(1)
}
