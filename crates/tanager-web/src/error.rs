use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("page rendering failed: {0}")]
    Render(#[from] std::fmt::Error),
}
