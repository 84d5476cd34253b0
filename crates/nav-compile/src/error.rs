use nav_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("invalid compiler configuration: {0}")]
    Config(#[from] CoreError),
}

pub type CompileResult<T> = Result<T, CompileError>;
