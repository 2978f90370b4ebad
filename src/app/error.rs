use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cave loading error: {0}")]
    CaveLoad(#[from] crate::cave_loader::CaveLoaderError),
    #[error("Path search error: {0}")]
    Path(#[from] crate::path::PathError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("General error: {0}")]
    General(String),
}
