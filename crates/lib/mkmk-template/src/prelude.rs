pub use crate::error::*;
pub use crate::generator::MakefileGenerator;
pub use crate::project::{GeneratorConfig, Project, ProjectName};
pub use crate::{Generator, GeneratorOutput};
