use thiserror::Error;

/// Rejections of caller-supplied input before any rendering happens.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    #[error("The project name must not be empty")]
    EmptyProjectName,

    #[error("The project name `{name}` contains `{character}`, which is unsafe in an unquoted shell command")]
    UnsafeProjectName { name: String, character: char },
}

/// Failures while persisting the rendered Makefile.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("The destination directory does not exist: {0}")]
    MissingDirectory(String),

    #[error("The destination path is not a directory: {0}")]
    NotDirectory(String),

    #[error("A Makefile already exists at {0} and overwriting is disabled")]
    DestinationExists(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
