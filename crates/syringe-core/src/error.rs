use thiserror::Error;

pub type SyringeResult<T> = Result<T, SyringeError>;

#[derive(Error, Debug)]
pub enum SyringeError {
    /// A second provider tried to register under an occupied name.
    #[error("A provider for [{0}] already exists")]
    DuplicateProvider(String),

    /// Nothing is registered under the requested name.
    #[error("No provider found for [{0}]")]
    NoCandidate(String),

    /// The name is occupied, but by an instance of another type.
    #[error("Provider for [{name}] is a `{actual}`, not a `{expected}`")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid capability name: {0:?}")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SyringeError {
    /// Capability name the error refers to, for registry errors.
    pub fn name(&self) -> Option<&str> {
        match self {
            SyringeError::DuplicateProvider(name)
            | SyringeError::NoCandidate(name)
            | SyringeError::InvalidName(name)
            | SyringeError::TypeMismatch { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, SyringeError::DuplicateProvider(_))
    }

    pub fn is_no_candidate(&self) -> bool {
        matches!(self, SyringeError::NoCandidate(_))
    }
}
