use mkmk_template::prelude::{
    GeneratorConfig, GeneratorError, MakefileGenerator, Project, ProjectName,
};
use std::path::{Path, PathBuf};

pub struct Regenerator;

impl Regenerator {
    /// Validate the inputs, render the Makefile and write it under
    /// `output_path`, returning the destination on success.
    pub fn regenerate(
        project_name: &str,
        output_path: &Path,
        overwrite: bool,
    ) -> Result<PathBuf, GeneratorError> {
        let name = ProjectName::try_new(project_name)?;

        let project = Project {
            name,
            root_path: output_path.to_path_buf(),
            config: GeneratorConfig { overwrite },
        };

        MakefileGenerator::new(project).write()
    }
}
