use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty `{0}`, expected `easy` or `hard`")]
pub struct ParseDifficultyError(pub String);
