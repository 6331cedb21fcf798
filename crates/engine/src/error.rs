use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Engine received invalid parameters: {0}")]
    InvalidParameters(String),
}
