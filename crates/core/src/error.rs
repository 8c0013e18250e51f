use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No entries were found in the outline. Is `{}` empty?", .path)]
    EmptyOutline { path: String },

    #[error("Error spawning sub process: {}", _0)]
    Spawn(std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("No command numbered {}. The outline has {} commands (see --list).", .number, .available)]
    CommandNumberOutOfRange { number: usize, available: usize },
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn empty_outline(path: String) -> Self {
        Self::EmptyOutline { path }
    }
}
