use std::path::PathBuf;

pub mod error;
pub mod generator;
pub mod prelude;
pub mod project;
pub mod template;

/// A rendered file ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOutput {
    pub path: PathBuf,
    pub content: String,
}

/// Trait defining the interface for build-file generators
///
/// Implementing this trait allows a generator to be driven by the mkmk
/// toolchain: `generate` produces the rendered outputs without touching the
/// filesystem, and `name` identifies the generator in diagnostics.
///
/// # Examples
///
/// ```rust,no_run
/// use mkmk_template::{Generator, GeneratorOutput};
/// use std::error::Error;
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct MyError(String);
///
/// impl fmt::Display for MyError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// impl Error for MyError {}
///
/// struct MyGenerator;
///
/// impl Generator for MyGenerator {
///     type Error = MyError;
///
///     fn generate(&self) -> Result<Vec<GeneratorOutput>, Self::Error> {
///         Ok(vec![])
///     }
///
///     fn name(&self) -> &'static str {
///         "my-generator"
///     }
/// }
/// ```
pub trait Generator {
    /// The error type returned by this generator
    type Error: std::error::Error;

    /// Render all outputs for this generator.
    ///
    /// This method is pure: it allocates the rendered text and the
    /// destination paths but performs no filesystem access.
    fn generate(&self) -> Result<Vec<GeneratorOutput>, Self::Error>;

    /// Get the name of this generator
    fn name(&self) -> &'static str;
}
