use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid option {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
