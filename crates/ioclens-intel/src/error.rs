use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntelError>;

#[derive(Debug, Error)]
pub enum IntelError {
    #[error("tab host error: {0}")]
    TabHost(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("context menu error: {0}")]
    Menu(String),
}
