//! Configuration path utilities for qmenu.

use std::env;
use std::path::{Path, PathBuf};

/// Default outline document: a dotfile in the working directory.
const DEFAULT_DOCUMENT_PATH: &str = ".qmenu";

/// Shell used when `$SHELL` is not set.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Resolves the outline document path.
///
/// Uses the provided path if any, falling back to `.qmenu` in the working
/// directory. Shell expansions like `~` are resolved.
pub fn get_document_path(document_path_arg: &Option<String>) -> String {
    let document_path = match document_path_arg {
        Some(document_path) => document_path,
        None => DEFAULT_DOCUMENT_PATH,
    };

    shellexpand::tilde(document_path).to_string()
}

/// The directory containing the outline document, used as the working
/// directory for executed commands.
///
/// Returns `None` for a bare filename: the document then lives in the
/// current directory and commands run where the operator started `qm`.
pub fn document_directory(document_path: &str) -> Option<PathBuf> {
    let parent = Path::new(document_path).parent()?;
    if parent.as_os_str().is_empty() {
        return None;
    }
    Some(parent.to_path_buf())
}

/// The shell that runs selected commands: `$SHELL` or [`DEFAULT_SHELL`].
pub fn get_shell() -> String {
    env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_document_path_with_custom_path() {
        let custom_path = Some("/custom/path/.qmenu".to_string());
        let result = get_document_path(&custom_path);
        assert_eq!(result, "/custom/path/.qmenu");
    }

    #[test]
    fn test_get_document_path_with_none() {
        let result = get_document_path(&None);
        assert_eq!(result, ".qmenu");
    }

    #[test]
    fn test_get_document_path_with_tilde() {
        let tilde_path = Some("~/.qmenu".to_string());
        let result = get_document_path(&tilde_path);
        // Should expand the tilde
        assert!(!result.starts_with('~'));
        assert!(result.ends_with(".qmenu"));
    }

    #[test]
    fn test_document_directory_of_nested_path() {
        let result = document_directory("/home/op/project/.qmenu");
        assert_eq!(result, Some(PathBuf::from("/home/op/project")));
    }

    #[test]
    fn test_document_directory_of_bare_filename() {
        assert!(document_directory(".qmenu").is_none());
    }

    #[test]
    fn test_default_shell_constant() {
        assert_eq!(DEFAULT_SHELL, "/bin/bash");
    }
}
