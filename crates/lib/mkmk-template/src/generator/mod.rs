use crate::error::{FilesystemError, GeneratorError};
use crate::project::Project;
use crate::template;
use crate::{Generator, GeneratorOutput};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Renders the fixed Makefile template for one project and persists it.
///
/// Rendering and writing are split: [`Generator::generate`] is pure and
/// [`MakefileGenerator::write`] performs the single whole-file write. There
/// is no locking; callers must not invoke `write` concurrently for the same
/// destination.
pub struct MakefileGenerator {
    project: Project,
}

impl MakefileGenerator {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    /// Render and write the Makefile, returning the destination path.
    ///
    /// The destination directory is validated before anything is rendered,
    /// so a failing call never leaves a partial file behind.
    #[tracing::instrument(skip_all, fields(root = ?self.project.root_path))]
    pub fn write(&self) -> Result<PathBuf, GeneratorError> {
        check_destination_directory(&self.project.root_path)?;

        let destination = self.project.root_path.join(template::MAKEFILE_NAME);
        if destination.exists() && !self.project.config.overwrite {
            error!("Refusing to replace an existing Makefile");
            return Err(FilesystemError::DestinationExists(
                destination.to_string_lossy().to_string(),
            )
            .into());
        }

        for output in self.generate()? {
            std::fs::write(&output.path, &output.content).map_err(|source| {
                FilesystemError::Io {
                    path: output.path.to_string_lossy().to_string(),
                    source,
                }
            })?;
        }

        info!(
            generator = self.name(),
            project = self.project.name.as_str(),
            "Makefile regenerated"
        );
        Ok(destination)
    }
}

impl Generator for MakefileGenerator {
    type Error = GeneratorError;

    fn generate(&self) -> Result<Vec<GeneratorOutput>, Self::Error> {
        let content = template::render(self.project.name.as_str());

        Ok(vec![GeneratorOutput {
            path: self.project.root_path.join(template::MAKEFILE_NAME),
            content,
        }])
    }

    fn name(&self) -> &'static str {
        "makefile-generator"
    }
}

/// Checks that the destination exists and is a directory.
fn check_destination_directory(path: &Path) -> Result<(), FilesystemError> {
    if !path.exists() {
        return Err(FilesystemError::MissingDirectory(
            path.to_string_lossy().to_string(),
        ));
    }

    if !path.is_dir() {
        return Err(FilesystemError::NotDirectory(
            path.to_string_lossy().to_string(),
        ));
    }

    Ok(())
}
