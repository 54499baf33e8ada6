use crate::error::InvalidInputError;
use std::path::PathBuf;
use tracing::error;

/// A package name that is safe to interpolate, unquoted, into the shell
/// commands of the generated Makefile.
///
/// Construction is the only validation point: once a `ProjectName` exists it
/// is guaranteed non-empty and restricted to `[A-Za-z0-9._-]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    #[tracing::instrument(skip_all, fields(project = name))]
    pub fn try_new(name: &str) -> Result<Self, InvalidInputError> {
        if name.is_empty() {
            error!("Empty project name rejected");
            return Err(InvalidInputError::EmptyProjectName);
        }

        if let Some(character) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        {
            error!(?character, "Shell-unsafe project name rejected");
            return Err(InvalidInputError::UnsafeProjectName {
                name: name.to_string(),
                character,
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: ProjectName,
    pub root_path: PathBuf,
    pub config: GeneratorConfig,
}

/// Explicit knobs for the write step.
///
/// `overwrite` makes the historical clobber-on-regenerate behavior an
/// auditable choice instead of an implicit default.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub overwrite: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { overwrite: true }
    }
}
